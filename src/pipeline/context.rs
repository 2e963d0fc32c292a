use crate::config::HelperConfig;
use crate::fs::FileSystem;
use crate::lambda::LambdaFunctionMetadata;
use crate::terraform::{RewriteReport, TerraformRewriter};
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// What a full run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineSummary {
    pub functions: Vec<LambdaFunctionMetadata>,
    pub rewrites: Vec<RewriteReport>,
    /// Generated pipeline-level documents, in the order they were written
    pub artifacts: Vec<PathBuf>,
}

impl PipelineSummary {
    pub fn files_changed(&self) -> usize {
        self.rewrites.iter().filter(|r| r.changed).count()
    }
}

/// Inputs shared by every phase plus the results gathered so far
pub struct PipelineContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub config: &'a HelperConfig,
    pub rewriter: TerraformRewriter,
    /// Timestamp recorded in the deployment manifest
    pub started_at: DateTime<Utc>,
    pub summary: PipelineSummary,
}

impl<'a> PipelineContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a HelperConfig, started_at: DateTime<Utc>) -> Self {
        Self {
            fs,
            config,
            rewriter: TerraformRewriter::new(&config.placeholders),
            started_at,
            summary: PipelineSummary::default(),
        }
    }
}
