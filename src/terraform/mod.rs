//! Placeholder substitution in Terraform configuration files

pub mod processor;
pub mod rewriter;

pub use processor::{process_terraform_configs, RewriteReport, TERRAFORM_EXTENSION};
pub use rewriter::{Substitution, TerraformRewriter};
