use crate::pipeline::PipelineSummary;
use std::fmt::Write;
use std::path::Path;

const RULE: &str = "========================================";

/// Opening banner printed before the first phase
pub fn render_header() -> String {
    format!("{RULE}\nTerraform Solution Helper\n{RULE}\n")
}

/// Closing report with next steps for whoever runs the release
pub fn render_summary(summary: &PipelineSummary, output_dir: &Path, dry_run: bool) -> String {
    let mut out = String::new();

    let title = if dry_run {
        "Dry run complete, no files were written"
    } else {
        "Processing complete!"
    };
    let _ = writeln!(out, "{RULE}\n{title}\n{RULE}");

    let _ = writeln!(out, "Lambda functions: {}", summary.functions.len());
    for function in &summary.functions {
        let _ = writeln!(
            out,
            "  - {} ({}, {})",
            function.function_name, function.runtime, function.handler
        );
    }
    let _ = writeln!(
        out,
        "Terraform files: {} ({} updated)",
        summary.rewrites.len(),
        summary.files_changed()
    );
    for artifact in &summary.artifacts {
        let _ = writeln!(out, "Artifact: {}", artifact.display());
    }

    let _ = writeln!(out, "\nNext steps:");
    let _ = writeln!(
        out,
        "1. Review processed files in {}/",
        output_dir.display()
    );
    let _ = writeln!(out, "2. Package Lambda functions as .zip files");
    let _ = writeln!(out, "3. Run the build script to replace placeholders");
    let _ = writeln!(out, "4. Deploy using Terraform");

    out
}
