//! Placeholder tokens substituted into generated artifacts
//!
//! A token is a bare name such as `BUCKET_NAME` rendered between `%%` markers.
//! The release build later replaces every rendered token with its real value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that brackets every rendered token
pub const MARKER: &str = "%%";

/// Opening sequence of a Terraform interpolation
pub const INTERPOLATION: &str = "${";

pub const DEFAULT_BUCKET_NAME: &str = "BUCKET_NAME";
pub const DEFAULT_SOLUTION_NAME: &str = "SOLUTION_NAME";
pub const DEFAULT_VERSION: &str = "VERSION";

/// The three token kinds the pipeline knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    BucketName,
    SolutionName,
    Version,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] = [
        Placeholder::BucketName,
        Placeholder::SolutionName,
        Placeholder::Version,
    ];
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Placeholder::BucketName => "bucket_name",
            Placeholder::SolutionName => "solution_name",
            Placeholder::Version => "version",
        };
        f.write_str(name)
    }
}

/// Token names used for each placeholder kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placeholders {
    pub bucket_name: String,
    pub solution_name: String,
    pub version: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            bucket_name: DEFAULT_BUCKET_NAME.to_string(),
            solution_name: DEFAULT_SOLUTION_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl Placeholders {
    pub fn name(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::BucketName => &self.bucket_name,
            Placeholder::SolutionName => &self.solution_name,
            Placeholder::Version => &self.version,
        }
    }

    /// Rendered form, e.g. `%%BUCKET_NAME%%`
    pub fn token(&self, placeholder: Placeholder) -> String {
        format!("{MARKER}{}{MARKER}", self.name(placeholder))
    }

    pub fn bucket(&self) -> String {
        self.token(Placeholder::BucketName)
    }

    pub fn solution(&self) -> String {
        self.token(Placeholder::SolutionName)
    }

    pub fn version(&self) -> String {
        self.token(Placeholder::Version)
    }

    /// Object key for a packaged function: `%%SOLUTION_NAME%%/%%VERSION%%/<name>.zip`
    pub fn function_key(&self, function_name: &str) -> String {
        format!("{}/{}/{}.zip", self.solution(), self.version(), function_name)
    }

    /// Returns the first placeholder whose name is empty or contains a marker or whitespace
    pub fn first_invalid(&self) -> Option<(Placeholder, &str)> {
        Placeholder::ALL.into_iter().find_map(|p| {
            let name = self.name(p);
            let invalid =
                name.is_empty() || name.contains('%') || name.chars().any(char::is_whitespace);
            invalid.then_some((p, name))
        })
    }
}

/// True when a literal was already substituted or is computed by Terraform
pub fn is_processed(value: &str) -> bool {
    value.contains(MARKER) || value.contains(INTERPOLATION)
}
