use super::context::PipelineContext;
use crate::artifacts::{create_deployment_manifest, generate_pipeline_variables};
use crate::error::Result;
use crate::lambda::scan_lambda_functions;
use crate::terraform::process_terraform_configs;

/// One sequential stage of the packaging run
pub trait PipelinePhase {
    fn name(&self) -> &'static str;

    fn execute(&self, context: &mut PipelineContext<'_>) -> Result<()>;
}

pub struct LambdaScanPhase;

impl PipelinePhase for LambdaScanPhase {
    fn name(&self) -> &'static str {
        "LambdaScanPhase"
    }

    fn execute(&self, context: &mut PipelineContext<'_>) -> Result<()> {
        context.summary.functions = scan_lambda_functions(context.fs, context.config)?;
        Ok(())
    }
}

pub struct TerraformRewritePhase;

impl PipelinePhase for TerraformRewritePhase {
    fn name(&self) -> &'static str {
        "TerraformRewritePhase"
    }

    fn execute(&self, context: &mut PipelineContext<'_>) -> Result<()> {
        context.summary.rewrites =
            process_terraform_configs(context.fs, context.config, &context.rewriter)?;
        Ok(())
    }
}

pub struct PipelineVariablesPhase;

impl PipelinePhase for PipelineVariablesPhase {
    fn name(&self) -> &'static str {
        "PipelineVariablesPhase"
    }

    fn execute(&self, context: &mut PipelineContext<'_>) -> Result<()> {
        let path = generate_pipeline_variables(context.fs, context.config)?;
        context.summary.artifacts.push(path);
        Ok(())
    }
}

pub struct DeploymentManifestPhase;

impl PipelinePhase for DeploymentManifestPhase {
    fn name(&self) -> &'static str {
        "DeploymentManifestPhase"
    }

    fn execute(&self, context: &mut PipelineContext<'_>) -> Result<()> {
        let path = create_deployment_manifest(context.fs, context.config, context.started_at)?;
        context.summary.artifacts.push(path);
        Ok(())
    }
}
