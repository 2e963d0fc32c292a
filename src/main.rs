use solution_helper::cli::{handle_run, CliArgs};
use solution_helper::util::init_logging;
use solution_helper::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(args.logging_config());

    debug!("solution-helper v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    std::process::exit(handle_run(&args));
}
