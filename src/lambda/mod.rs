//! Lambda function discovery and metadata emission

pub mod handler;
pub mod runtime;
pub mod scanner;

pub use handler::{detect_handler, DEFAULT_HANDLER, HANDLER_CANDIDATES};
pub use runtime::{detect_runtime, LambdaRuntime};
pub use scanner::{scan_lambda_functions, LambdaFunctionMetadata, PACKAGE_JSON};
