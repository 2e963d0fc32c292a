use crate::fs::FileSystem;
use std::path::Path;

/// Entry-point files checked in priority order
pub const HANDLER_CANDIDATES: [&str; 6] = [
    "index.js",
    "index.ts",
    "main.py",
    "lambda_function.py",
    "handler.js",
    "handler.py",
];

pub const DEFAULT_HANDLER: &str = "index.handler";

/// Derives the dotted handler reference from the first entry-point file present
///
/// Python files export `lambda_handler`, everything else exports `handler`.
pub fn detect_handler(fs: &dyn FileSystem, function_dir: &Path) -> String {
    HANDLER_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|candidate| fs.is_file(&function_dir.join(candidate)))
        .and_then(|candidate| {
            let stem = candidate.file_stem()?.to_str()?;
            let export = match candidate.extension().and_then(|e| e.to_str()) {
                Some("py") => "lambda_handler",
                _ => "handler",
            };
            Some(format!("{}.{}", stem, export))
        })
        .unwrap_or_else(|| DEFAULT_HANDLER.to_string())
}
