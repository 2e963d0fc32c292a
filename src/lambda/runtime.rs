use crate::error::{PipelineError, Result};
use crate::fs::FileSystem;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

pub const DEFAULT_NODE_RUNTIME: &str = "nodejs18.x";
pub const PYTHON_RUNTIME: &str = "python3.11";

/// Lambda runtime identifier as written to function metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LambdaRuntime {
    /// Node.js, optionally pinned by the `engines.node` field of package.json
    Node(Option<String>),
    Python,
}

impl LambdaRuntime {
    /// Keeps only the digits and dots of an engine range such as `>=18.0.0`
    pub fn from_node_engine(engine: &str) -> Self {
        let version: String = engine
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        LambdaRuntime::Node(Some(version))
    }
}

impl Default for LambdaRuntime {
    fn default() -> Self {
        LambdaRuntime::Node(None)
    }
}

impl fmt::Display for LambdaRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LambdaRuntime::Node(Some(version)) => write!(f, "nodejs{}", version),
            LambdaRuntime::Node(None) => f.write_str(DEFAULT_NODE_RUNTIME),
            LambdaRuntime::Python => f.write_str(PYTHON_RUNTIME),
        }
    }
}

impl Serialize for LambdaRuntime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Detects the runtime of the function rooted at `function_dir`
///
/// package.json wins over requirements.txt. An empty or non-string
/// `engines.node` counts as absent.
pub fn detect_runtime(fs: &dyn FileSystem, function_dir: &Path) -> Result<LambdaRuntime> {
    let package_json = function_dir.join("package.json");
    if fs.is_file(&package_json) {
        let content = fs
            .read_to_string(&package_json)
            .map_err(PipelineError::stage("Lambda function scan"))?;
        let package: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| PipelineError::MalformedPackageJson {
                path: package_json.clone(),
                source,
            })?;

        return Ok(match package["engines"]["node"].as_str() {
            Some(engine) if !engine.is_empty() => LambdaRuntime::from_node_engine(engine),
            _ => LambdaRuntime::default(),
        });
    }

    if fs.is_file(&function_dir.join("requirements.txt")) {
        return Ok(LambdaRuntime::Python);
    }

    Ok(LambdaRuntime::default())
}
