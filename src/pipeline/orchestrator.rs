use super::context::{PipelineContext, PipelineSummary};
use super::phase::{
    DeploymentManifestPhase, LambdaScanPhase, PipelinePhase, PipelineVariablesPhase,
    TerraformRewritePhase,
};
use crate::error::Result;
use std::time::Instant;
use tracing::{debug, info};

/// Runs the four packaging phases in order, stopping at the first failure
pub struct PipelineOrchestrator {
    phases: Vec<Box<dyn PipelinePhase>>,
}

impl PipelineOrchestrator {
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(LambdaScanPhase),
                Box::new(TerraformRewritePhase),
                Box::new(PipelineVariablesPhase),
                Box::new(DeploymentManifestPhase),
            ],
        }
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|p| p.name()).collect()
    }

    pub fn execute(&self, mut context: PipelineContext<'_>) -> Result<PipelineSummary> {
        let start = Instant::now();

        for phase in &self.phases {
            debug!("Phase: {}", phase.name());
            let phase_start = Instant::now();
            phase.execute(&mut context)?;
            debug!(
                "Phase {} complete in {:?}",
                phase.name(),
                phase_start.elapsed()
            );
        }

        let summary = context.summary;
        info!(
            functions = summary.functions.len(),
            terraform_files = summary.rewrites.len(),
            files_changed = summary.files_changed(),
            elapsed = ?start.elapsed(),
            "Processing complete"
        );

        Ok(summary)
    }
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
