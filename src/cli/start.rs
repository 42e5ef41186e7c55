use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Main entry point for the CLI - builds and returns the Action
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action dispatch fails
pub fn start() -> Result<Action> {
    // 1. Parse command-line arguments
    let matches = commands::new().get_matches();

    // 2. Initialize logging at the requested verbosity
    telemetry::init(commands::logging::verbosity_level(&matches))?;

    // 3. Map the subcommand to its action
    dispatch::handler(&matches)
}
