use super::commands::CliArgs;
use super::output::{render_header, render_summary};
use crate::config::{ConfigError, HelperConfig};
use crate::fs::{DryRunFileSystem, FileSystem, RealFileSystem};
use crate::pipeline::{PipelineContext, PipelineOrchestrator};
use chrono::Utc;
use tracing::info;

/// Layers CLI flags over the config file (if any) over defaults
pub fn resolve_config(args: &CliArgs) -> Result<HelperConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => HelperConfig::from_file(path)?,
        None => HelperConfig::default(),
    };

    if let Some(dir) = &args.terraform_dir {
        config.terraform_dir = dir.clone();
    }
    if let Some(dir) = &args.lambda_dir {
        config.lambda_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Runs the packaging pipeline and returns the process exit code
pub fn handle_run(args: &CliArgs) -> i32 {
    let config = match resolve_config(args) {
        Ok(config) => config,
        Err(e) => {
            let e = anyhow::Error::from(e);
            eprintln!("Error: {:#}", e);
            return 1;
        }
    };

    if !args.quiet {
        println!("{}", render_header());
    }

    let real = RealFileSystem::new();
    let dry_run = DryRunFileSystem::new(RealFileSystem::new());
    let fs: &dyn FileSystem = if args.dry_run {
        info!("Dry run: no files will be written");
        &dry_run
    } else {
        &real
    };

    let context = PipelineContext::new(fs, &config, Utc::now());
    match PipelineOrchestrator::new().execute(context) {
        Ok(summary) => {
            if !args.quiet {
                println!("{}", render_summary(&summary, &config.output_dir, args.dry_run));
            }
            0
        }
        Err(e) => {
            let e = anyhow::Error::from(e);
            eprintln!("Error during processing: {:#}", e);
            1
        }
    }
}
