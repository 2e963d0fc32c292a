pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::CliArgs;
pub use handlers::{handle_run, resolve_config};
pub use output::render_summary;
