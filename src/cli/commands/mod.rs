use crate::config::{
    DEFAULT_API_ENDPOINT, DEFAULT_ENVIRONMENT, DEFAULT_ERROR_RETRIES, DEFAULT_MAX_ATTEMPTS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
///
/// Every input can be given as a flag or through the `INPUT_<NAME>`
/// variable GitHub Actions sets for `with:` inputs. Defaults are applied in
/// `dispatch` so that empty inputs fall back the same way as missing ones.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("action")
                .env("INPUT_ACTION")
                .help("Operation to run: branch or delete [default: branch]")
                .long("action")
                .short('a')
                .value_name("ACTION"),
        )
        .arg(
            Arg::new("tembo-api-endpoint")
                .env("INPUT_TEMBO-API-ENDPOINT")
                .help(format!("Tembo API base URL [default: {DEFAULT_API_ENDPOINT}]"))
                .long("tembo-api-endpoint")
                .short('e')
                .value_name("URL"),
        )
        .arg(
            Arg::new("org-id")
                .env("INPUT_ORG-ID")
                .help("Organization that owns the instances (required)")
                .long("org-id")
                .short('o')
                .value_name("ORG"),
        )
        .arg(
            Arg::new("instance-id")
                .env("INPUT_INSTANCE-ID")
                .help("Instance to branch from, or to delete (required)")
                .long("instance-id")
                .short('i')
                .value_name("ID"),
        )
        .arg(
            Arg::new("instance-name")
                .env("INPUT_INSTANCE-NAME")
                .help("Name of the new instance [default: random animal-adjective name]")
                .long("instance-name")
                .short('n')
                .value_name("NAME"),
        )
        .arg(
            Arg::new("tembo-token")
                .env("INPUT_TEMBO-TOKEN")
                .help("Tembo API token (required)")
                .long("tembo-token")
                .short('t')
                .value_name("TOKEN")
                .hide_env_values(true),
        )
        .arg(
            Arg::new("environment")
                .env("INPUT_ENVIRONMENT")
                .help(format!(
                    "Environment tag of the new instance [default: {DEFAULT_ENVIRONMENT}]"
                ))
                .long("environment")
                .value_name("ENV"),
        )
        .arg(
            Arg::new("polling-interval")
                .env("INPUT_POLLING-INTERVAL")
                .help(format!(
                    "Milliseconds between status checks [default: {DEFAULT_POLL_INTERVAL_MS}]"
                ))
                .long("polling-interval")
                .value_name("MS"),
        )
        .arg(
            Arg::new("max-polling-attempts")
                .env("INPUT_MAX-POLLING-ATTEMPTS")
                .help(format!(
                    "Status checks before giving up [default: {DEFAULT_MAX_ATTEMPTS}]"
                ))
                .long("max-polling-attempts")
                .value_name("N"),
        )
        .arg(
            Arg::new("error-retries")
                .env("INPUT_ERROR-RETRIES")
                .help(format!(
                    "Error states tolerated while polling [default: {DEFAULT_ERROR_RETRIES}]"
                ))
                .long("error-retries")
                .long_help(
                    "Number of times the instance may report the Error state while polling.\n\
                    With 0 (default) the first Error state fails the run.\n\
                    Each tolerated Error state still counts as a polling attempt.",
                )
                .value_name("N"),
        )
        .arg(
            Arg::new("request-timeout")
                .env("INPUT_REQUEST-TIMEOUT")
                .help(format!(
                    "Seconds before a single API request is abandoned [default: {DEFAULT_REQUEST_TIMEOUT_SECS}]"
                ))
                .long("request-timeout")
                .value_name("SECS"),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity (-v debug, -vv trace)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
}
