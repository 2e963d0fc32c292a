use super::{detect_handler, detect_runtime, LambdaRuntime};
use crate::artifacts::write_json;
use crate::config::HelperConfig;
use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use serde::Serialize;
use tracing::{debug, info};

/// Marks a subdirectory of the Lambda source directory as a function
pub const PACKAGE_JSON: &str = "package.json";

const STAGE: &str = "Lambda function scan";

/// Per-function packaging descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaFunctionMetadata {
    pub function_name: String,
    pub runtime: LambdaRuntime,
    pub handler: String,
    pub bucket_placeholder: String,
    pub key_placeholder: String,
}

impl LambdaFunctionMetadata {
    pub fn file_name(&self) -> String {
        format!("{}-metadata.json", self.function_name)
    }
}

/// Writes `<function>-metadata.json` for every function directory
///
/// A missing Lambda source directory is skipped, not an error.
pub fn scan_lambda_functions(
    fs: &dyn FileSystem,
    config: &HelperConfig,
) -> Result<Vec<LambdaFunctionMetadata>> {
    info!(dir = %config.lambda_dir.display(), "Processing Lambda functions");

    if !fs.exists(&config.lambda_dir) {
        info!("No Lambda functions directory found, skipping");
        return Ok(Vec::new());
    }

    fs.create_dir_all(&config.output_dir)
        .map_err(PipelineError::stage(STAGE))?;

    let entries = fs
        .read_dir(&config.lambda_dir)
        .map_err(PipelineError::stage(STAGE))?;

    let mut functions = Vec::new();
    for entry in entries.iter().filter(|e| e.is_dir()) {
        let function_dir = entry.path();
        if !fs.is_file(&function_dir.join(PACKAGE_JSON)) {
            debug!(dir = %function_dir.display(), "No package.json, not a Lambda function");
            continue;
        }

        let name = entry.file_name();
        info!(function = name, "Found Lambda function");

        let metadata = LambdaFunctionMetadata {
            function_name: name.to_string(),
            runtime: detect_runtime(fs, function_dir)?,
            handler: detect_handler(fs, function_dir),
            bucket_placeholder: config.placeholders.bucket(),
            key_placeholder: config.placeholders.function_key(name),
        };

        let path = config.output_dir.join(metadata.file_name());
        write_json(fs, &path, &metadata, STAGE)?;
        debug!(
            runtime = %metadata.runtime,
            handler = %metadata.handler,
            "Created metadata: {}",
            metadata.file_name()
        );

        functions.push(metadata);
    }

    Ok(functions)
}
