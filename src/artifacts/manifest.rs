use super::write_json;
use crate::config::HelperConfig;
use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use crate::placeholder::Placeholders;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

pub const MANIFEST_FILE: &str = "deployment-manifest.json";

const STAGE: &str = "Deployment manifest";

/// Summary of the solution layout and how to deploy it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentManifest {
    pub solution: String,
    pub version: String,
    /// RFC 3339, UTC, millisecond precision
    pub timestamp: String,
    pub infrastructure: String,
    pub components: Components,
    pub deployment_instructions: DeploymentInstructions,
}

/// Repository-relative locations of each component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    pub terraform_configs: String,
    pub lambda_functions: String,
    pub deployment_assets: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentInstructions {
    pub step1: String,
    pub step2: String,
    pub step3: String,
}

impl DeploymentManifest {
    pub fn new(placeholders: &Placeholders, now: DateTime<Utc>) -> Self {
        Self {
            solution: placeholders.solution(),
            version: placeholders.version(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            infrastructure: "terraform".to_string(),
            components: Components {
                terraform_configs: "terraform/".to_string(),
                lambda_functions: "source/custom-resource/".to_string(),
                deployment_assets: "deployment/regional-s3-assets/".to_string(),
            },
            deployment_instructions: DeploymentInstructions {
                step1: "Upload Lambda deployment packages to S3".to_string(),
                step2: "Update terraform.tfvars with artifact_bucket and solution_version"
                    .to_string(),
                step3: "Run terraform init and terraform apply".to_string(),
            },
        }
    }
}

/// Writes `deployment-manifest.json` stamped with `now`
pub fn create_deployment_manifest(
    fs: &dyn FileSystem,
    config: &HelperConfig,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    info!("Creating deployment manifest");

    fs.create_dir_all(&config.output_dir)
        .map_err(PipelineError::stage(STAGE))?;

    let path = config.output_dir.join(MANIFEST_FILE);
    write_json(fs, &path, &DeploymentManifest::new(&config.placeholders, now), STAGE)?;
    info!("Created {}", MANIFEST_FILE);

    Ok(path)
}
