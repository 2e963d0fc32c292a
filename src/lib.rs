//! solution-helper - prepares Terraform solutions for the publishing pipeline
//!
//! The tool runs four phases, in order, against a solution checkout:
//!
//! 1. [`lambda`]: scans the Lambda source directory and writes one
//!    `<function>-metadata.json` per function (runtime, handler, placeholders)
//! 2. [`terraform`]: rewrites `.tf` files in place, replacing hardcoded bucket
//!    names, solution names and versions with `%%PLACEHOLDER%%` tokens
//! 3. [`artifacts::pipeline_variables`]: writes `pipeline-variables.json`
//! 4. [`artifacts::manifest`]: writes `deployment-manifest.json`
//!
//! Every phase is idempotent, so running the tool twice only refreshes the
//! manifest timestamp.
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use solution_helper::fs::RealFileSystem;
//! use solution_helper::pipeline::{PipelineContext, PipelineOrchestrator};
//! use solution_helper::HelperConfig;
//!
//! # fn main() -> Result<(), solution_helper::PipelineError> {
//! let fs = RealFileSystem::new();
//! let config = HelperConfig::default().with_terraform_dir("infra");
//! let summary = PipelineOrchestrator::new().execute(PipelineContext::new(&fs, &config, Utc::now()))?;
//! println!("{} Lambda functions", summary.functions.len());
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod lambda;
pub mod pipeline;
pub mod placeholder;
pub mod terraform;
pub mod util;

pub use config::{ConfigError, HelperConfig};
pub use error::PipelineError;
pub use lambda::LambdaFunctionMetadata;
pub use pipeline::{PipelineOrchestrator, PipelineSummary};
pub use placeholder::{Placeholder, Placeholders};
pub use terraform::TerraformRewriter;
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
