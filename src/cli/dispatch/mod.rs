use crate::{
    cli::actions::Action,
    config::{
        DEFAULT_API_ENDPOINT, DEFAULT_ENVIRONMENT, DEFAULT_ERROR_RETRIES, DEFAULT_MAX_ATTEMPTS,
        DEFAULT_POLL_INTERVAL_MS, DEFAULT_REQUEST_TIMEOUT_SECS, Operation, PollPolicy,
        ProvisionRequest,
    },
    names::NameGenerator,
};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::{str::FromStr, time::Duration};

/// Trimmed value of an input, empty inputs count as missing
fn input(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    input(matches, id).with_context(|| format!("Input required and not supplied: {id}"))
}

/// Numeric input, missing, unparsable and zero values all fall back to `default`
fn number<T>(matches: &ArgMatches, id: &str, default: T) -> T
where
    T: FromStr + PartialEq + Default,
{
    input(matches, id)
        .and_then(|value| value.parse::<T>().ok())
        .filter(|value| *value != T::default())
        .unwrap_or(default)
}

/// Convert `ArgMatches` into typed Action enum with validation
///
/// The operation is checked first, an unsupported value fails before any
/// other input is looked at.
///
/// # Errors
///
/// Returns an error if the operation is not supported or a required input is
/// missing
pub fn dispatch(matches: &ArgMatches, names: &dyn NameGenerator) -> Result<Action> {
    let operation = match input(matches, "action") {
        Some(value) => value.parse::<Operation>().map_err(|e| anyhow!(e))?,
        None => Operation::default(),
    };

    let request = ProvisionRequest {
        api_endpoint: input(matches, "tembo-api-endpoint")
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
        org_id: required(matches, "org-id")?,
        instance_id: required(matches, "instance-id")?,
        instance_name: input(matches, "instance-name").unwrap_or_else(|| names.generate()),
        token: required(matches, "tembo-token")?,
        environment: input(matches, "environment")
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        poll: PollPolicy {
            interval: Duration::from_millis(number(
                matches,
                "polling-interval",
                DEFAULT_POLL_INTERVAL_MS,
            )),
            max_attempts: number(matches, "max-polling-attempts", DEFAULT_MAX_ATTEMPTS),
            // zero is a meaningful value here
            error_retries: input(matches, "error-retries")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_ERROR_RETRIES),
        },
        request_timeout: Duration::from_secs(number(
            matches,
            "request-timeout",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )),
    };

    Ok(match operation {
        Operation::Branch => Action::Branch { request },
        Operation::Delete => Action::Delete { request },
    })
}
