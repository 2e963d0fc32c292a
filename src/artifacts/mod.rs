//! Generated JSON documents consumed by the release build

pub mod manifest;
pub mod pipeline_variables;

pub use manifest::{create_deployment_manifest, DeploymentManifest, MANIFEST_FILE};
pub use pipeline_variables::{generate_pipeline_variables, PipelineVariables, PIPELINE_VARIABLES_FILE};

use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use serde::Serialize;
use std::path::Path;

/// Serializes `value` with two-space indentation and writes it to `path`
pub fn write_json<T: Serialize>(
    fs: &dyn FileSystem,
    path: &Path,
    value: &T,
    stage: &'static str,
) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|source| PipelineError::Serialize {
        artifact: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string()),
        source,
    })?;

    fs.write(path, &json).map_err(PipelineError::stage(stage))
}
