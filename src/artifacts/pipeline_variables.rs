use super::write_json;
use crate::config::HelperConfig;
use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use crate::placeholder::Placeholders;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub const PIPELINE_VARIABLES_FILE: &str = "pipeline-variables.json";

const STAGE: &str = "Pipeline variables";

/// Describes the placeholder tokens and what replaces them at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineVariables {
    pub deployment: DeploymentVariables,
    pub instructions: Instructions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentVariables {
    pub bucket_name: String,
    pub solution_name: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructions {
    pub bucket_name: String,
    pub solution_name: String,
    pub version: String,
}

impl PipelineVariables {
    pub fn new(placeholders: &Placeholders) -> Self {
        Self {
            deployment: DeploymentVariables {
                bucket_name: placeholders.bucket(),
                solution_name: placeholders.solution(),
                version: placeholders.version(),
                description: "These variables are replaced during the build process".to_string(),
            },
            instructions: Instructions {
                bucket_name: "Will be replaced with: <bucket-name>-<region>".to_string(),
                solution_name: "Will be replaced with the solution name".to_string(),
                version: "Will be replaced with the solution version".to_string(),
            },
        }
    }
}

/// Writes `pipeline-variables.json` into the output directory
pub fn generate_pipeline_variables(fs: &dyn FileSystem, config: &HelperConfig) -> Result<PathBuf> {
    info!("Generating pipeline variables");

    fs.create_dir_all(&config.output_dir)
        .map_err(PipelineError::stage(STAGE))?;

    let path = config.output_dir.join(PIPELINE_VARIABLES_FILE);
    write_json(fs, &path, &PipelineVariables::new(&config.placeholders), STAGE)?;
    info!("Created {}", PIPELINE_VARIABLES_FILE);

    Ok(path)
}
