use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A function's package.json exists but is not valid JSON
    #[error("Malformed package.json at {}", .path.display())]
    MalformedPackageJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A generated document could not be serialized
    #[error("Failed to serialize {artifact}")]
    Serialize {
        artifact: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stage failed on a filesystem operation
    #[error("{stage} failed")]
    Stage {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub fn stage(stage: &'static str) -> impl FnOnce(anyhow::Error) -> PipelineError {
        move |source| PipelineError::Stage { stage, source }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
