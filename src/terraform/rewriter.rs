//! Regex-based literal substitution
//!
//! Each pattern captures the literal value of an assignment (or the bucket
//! segment of an `s3://` path) in group 1. Only that byte range is replaced,
//! so the surrounding key, spacing and quotes survive untouched. Literals that
//! already carry a placeholder marker or an interpolation are left alone,
//! which makes every pass idempotent.
//!
//! This is text rewriting, not HCL parsing. Coverage is bounded by the
//! patterns below.

use crate::placeholder::{is_processed, Placeholders};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

const BUCKET_PATTERNS: [&str; 3] = [
    r#"bucket\s*=\s*"([^"]+)""#,
    r"s3://([a-z0-9\-\.]+)",
    r#"artifact_bucket\s*=\s*"([^"]+)""#,
];

const SOLUTION_PATTERNS: [&str; 2] = [
    r#"solution_name\s*=\s*"([^"]+)""#,
    r#"project_name\s*=\s*"([^"]+)""#,
];

const VERSION_PATTERNS: [&str; 1] = [r#"solution_version\s*=\s*"([^"]+)""#];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid substitution regex"))
        .collect()
}

fn bucket_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| compile(&BUCKET_PATTERNS))
}

fn solution_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| compile(&SOLUTION_PATTERNS))
}

fn version_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| compile(&VERSION_PATTERNS))
}

/// Result of one substitution family applied to a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

/// Applies the bucket, solution-name and version substitutions
#[derive(Debug, Clone)]
pub struct TerraformRewriter {
    bucket_value: String,
    solution_value: String,
    version_value: String,
}

impl TerraformRewriter {
    pub fn new(placeholders: &Placeholders) -> Self {
        Self {
            bucket_value: format!("${{{}}}-${{var.aws_region}}", placeholders.bucket()),
            solution_value: placeholders.solution(),
            version_value: placeholders.version(),
        }
    }

    /// Bucket literals become `${%%BUCKET_NAME%%}-${var.aws_region}`
    pub fn replace_bucket_references(&self, content: &str) -> Substitution {
        substitute_all(content, bucket_regexes(), &self.bucket_value)
    }

    pub fn replace_solution_references(&self, content: &str) -> Substitution {
        substitute_all(content, solution_regexes(), &self.solution_value)
    }

    pub fn replace_version_references(&self, content: &str) -> Substitution {
        substitute_all(content, version_regexes(), &self.version_value)
    }
}

impl Default for TerraformRewriter {
    fn default() -> Self {
        Self::new(&Placeholders::default())
    }
}

fn substitute_all(content: &str, patterns: &[Regex], value: &str) -> Substitution {
    let mut current = content.to_string();
    let mut replacements = 0;

    for pattern in patterns {
        let (next, count) = substitute(&current, pattern, value);
        if count > 0 {
            debug!(pattern = pattern.as_str(), count, "Replaced literals");
        }
        current = next;
        replacements += count;
    }

    Substitution {
        content: current,
        replacements,
    }
}

fn substitute(content: &str, pattern: &Regex, value: &str) -> (String, usize) {
    let mut count = 0;

    let replaced = pattern.replace_all(content, |caps: &Captures| {
        let (Some(whole), Some(literal)) = (caps.get(0), caps.get(1)) else {
            return caps[0].to_string();
        };
        if is_processed(literal.as_str()) {
            debug!(literal = literal.as_str(), "Literal already processed, skipping");
            return whole.as_str().to_string();
        }

        count += 1;
        let text = whole.as_str();
        let start = literal.start() - whole.start();
        let end = literal.end() - whole.start();
        format!("{}{}{}", &text[..start], value, &text[end..])
    });

    (replaced.into_owned(), count)
}
