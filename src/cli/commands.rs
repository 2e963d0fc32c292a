use crate::util::logging::{self, LoggingConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Prepares Terraform configurations and Lambda metadata for the solutions publishing pipeline
#[derive(Parser, Debug)]
#[command(
    name = "solution-helper",
    about = "Prepares Terraform configurations and Lambda metadata for the solutions publishing pipeline",
    version,
    long_about = "solution-helper replaces hardcoded bucket names, solution names and versions in \
                  Terraform files with %%PLACEHOLDER%% tokens, writes one metadata file per Lambda \
                  function, and emits pipeline-variables.json and deployment-manifest.json.\n\n\
                  Examples:\n  \
                  solution-helper\n  \
                  solution-helper --dry-run -v\n  \
                  solution-helper --config helper.toml --output-dir dist/assets"
)]
pub struct CliArgs {
    #[arg(long, value_name = "DIR", help = "Terraform configuration directory [default: ../terraform]")]
    pub terraform_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Lambda source directory, one subdirectory per function [default: ../source/custom-resource]"
    )]
    pub lambda_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Output directory for generated artifacts [default: ../deployment/regional-s3-assets]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(short = 'c', long, value_name = "FILE", help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Report what would change without writing any file")]
    pub dry_run: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short = 'v', long, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// Flags first, then `SOLUTION_HELPER_LOG_*`, then defaults
    pub fn logging_config(&self) -> LoggingConfig {
        let mut config = logging::config_from_env();

        if let Some(level_str) = &self.log_level {
            config.level = logging::parse_level(level_str);
        } else if self.verbose {
            config.level = Level::DEBUG;
        } else if self.quiet {
            config.level = Level::ERROR;
        }

        if self.log_json {
            config.use_json = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::parse_from(["solution-helper"]);
        assert!(args.terraform_dir.is_none());
        assert!(args.lambda_dir.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.config.is_none());
        assert!(!args.dry_run);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_path_overrides() {
        let args = CliArgs::parse_from([
            "solution-helper",
            "--terraform-dir",
            "infra",
            "--lambda-dir",
            "functions",
            "--output-dir",
            "dist",
            "--dry-run",
        ]);

        assert_eq!(args.terraform_dir, Some(PathBuf::from("infra")));
        assert_eq!(args.lambda_dir, Some(PathBuf::from("functions")));
        assert_eq!(args.output_dir, Some(PathBuf::from("dist")));
        assert!(args.dry_run);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = CliArgs::try_parse_from(["solution-helper", "-q", "-v"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_flag_wins() {
        let args = CliArgs::parse_from(["solution-helper", "-v", "--log-level", "warn"]);
        assert_eq!(args.logging_config().level, Level::WARN);
    }

    #[test]
    fn test_verbose_and_quiet_levels() {
        let verbose = CliArgs::parse_from(["solution-helper", "-v"]);
        assert_eq!(verbose.logging_config().level, Level::DEBUG);

        let quiet = CliArgs::parse_from(["solution-helper", "--quiet"]);
        assert_eq!(quiet.logging_config().level, Level::ERROR);
    }

    #[test]
    fn test_log_json_flag() {
        let args = CliArgs::parse_from(["solution-helper", "--log-json"]);
        assert!(args.logging_config().use_json);
    }
}
