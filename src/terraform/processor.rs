use super::TerraformRewriter;
use crate::config::HelperConfig;
use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use std::path::PathBuf;
use tracing::{debug, info};

pub const TERRAFORM_EXTENSION: &str = ".tf";

const STAGE: &str = "Terraform rewrite";

/// Replacement counts for one `.tf` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteReport {
    pub path: PathBuf,
    pub bucket: usize,
    pub solution: usize,
    pub version: usize,
    /// False when the file already held only placeholders and was left as is
    pub changed: bool,
}

impl RewriteReport {
    pub fn total(&self) -> usize {
        self.bucket + self.solution + self.version
    }
}

/// Rewrites every `.tf` file of the Terraform directory in place
///
/// Substitutions run bucket, then solution name, then version. A failure
/// stops the stage; files rewritten before it stay rewritten.
pub fn process_terraform_configs(
    fs: &dyn FileSystem,
    config: &HelperConfig,
    rewriter: &TerraformRewriter,
) -> Result<Vec<RewriteReport>> {
    info!(dir = %config.terraform_dir.display(), "Processing Terraform configurations");

    if !fs.exists(&config.terraform_dir) {
        info!("No Terraform directory found, skipping");
        return Ok(Vec::new());
    }

    let entries = fs
        .read_dir(&config.terraform_dir)
        .map_err(PipelineError::stage(STAGE))?;

    let mut reports = Vec::new();
    for entry in entries
        .iter()
        .filter(|e| e.is_file() && e.file_name().ends_with(TERRAFORM_EXTENSION))
    {
        let path = entry.path();
        info!(file = entry.file_name(), "Processing");

        let original = fs.read_to_string(path).map_err(PipelineError::stage(STAGE))?;

        let bucket = rewriter.replace_bucket_references(&original);
        let solution = rewriter.replace_solution_references(&bucket.content);
        let version = rewriter.replace_version_references(&solution.content);

        let changed = version.content != original;
        if changed {
            fs.write(path, &version.content)
                .map_err(PipelineError::stage(STAGE))?;
            info!(
                bucket = bucket.replacements,
                solution = solution.replacements,
                version = version.replacements,
                "Updated with placeholders"
            );
        } else {
            debug!(file = entry.file_name(), "Already processed, left unchanged");
        }

        reports.push(RewriteReport {
            path: path.to_path_buf(),
            bucket: bucket.replacements,
            solution: solution.replacements,
            version: version.replacements,
            changed,
        });
    }

    Ok(reports)
}
