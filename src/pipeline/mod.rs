pub mod context;
pub mod orchestrator;
pub mod phase;

pub use context::{PipelineContext, PipelineSummary};
pub use orchestrator::PipelineOrchestrator;
pub use phase::{
    DeploymentManifestPhase, LambdaScanPhase, PipelinePhase, PipelineVariablesPhase,
    TerraformRewritePhase,
};
