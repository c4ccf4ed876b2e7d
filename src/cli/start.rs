use super::{commands, dispatch};
use crate::{
    names::{NameGenerator, RandomNames},
    report::{GithubReporter, Reporter},
    telemetry,
};
use anyhow::Result;
use clap::ArgMatches;
use std::process::ExitCode;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Five-step data flow:
/// 1. Parse: Extract CLI arguments and `INPUT_*` variables
/// 2. Extract Verbosity: Convert flag count to logging level
/// 3. Initialize Telemetry: Set up structured logging/tracing
/// 4. Dispatch: Convert `ArgMatches` into typed Action enum
/// 5. Execute: Run the action's business logic
///
/// Failures of steps 4 and 5 are reported as a workflow error and turned
/// into a failing exit code.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized
pub async fn start() -> Result<ExitCode> {
    // 1. Parse: Extract CLI arguments
    let matches = commands::new().get_matches();

    // 2. Extract Verbosity
    let verbosity = matches.get_count("verbose");

    // 3. Initialize Telemetry
    telemetry::init(verbosity)?;

    // 4. + 5. Dispatch and execute
    let mut reporter = GithubReporter::from_env();
    if orchestrate(&matches, &RandomNames, &mut reporter).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Dispatch and execute the requested operation, `false` once a failure was reported
///
/// Nothing escapes this function: every error ends up as exactly one
/// `set_failed` call on the reporter.
pub async fn orchestrate(
    matches: &ArgMatches,
    names: &dyn NameGenerator,
    reporter: &mut dyn Reporter,
) -> bool {
    let result = match dispatch::dispatch(matches, names) {
        Ok(action) => action.execute(reporter).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            reporter.set_failed(&format!("{e:#}"));
            false
        }
    }
}
