use crate::{
    api::{Client, InstanceDetails, InstanceState, InstanceStatus},
    config::PollPolicy,
    error::Error,
    report::Reporter,
};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

pub const READY_MESSAGE: &str = "Instance is up and running.";

/// Poll an instance until it is `Up`
///
/// Every status request counts as one attempt. `Submitted`, `Configuring` and
/// unknown states keep the loop going; `Error` ends it unless the policy still
/// has error retries left. The pause between two requests is fixed.
///
/// # Errors
///
/// Returns an error if a request fails, the instance ends in `Error`, or
/// `max_attempts` requests pass without reaching `Up`
pub async fn wait_until_up(
    client: &Client,
    instance_id: &str,
    policy: &PollPolicy,
    reporter: &mut dyn Reporter,
) -> Result<InstanceDetails, Error> {
    let path = format!("instances/{instance_id}");
    let mut error_retries = policy.error_retries;

    for attempt in 1..=policy.max_attempts {
        let response = client.get(&path).await.inspect_err(|e| {
            error!("Failed to check instance status: {e}");
        })?;

        if !response.status.is_success() {
            let err = response.into_error();
            error!("Failed to check instance status: {err}");
            return Err(err);
        }

        let status: InstanceStatus = response.json()?;
        let state = status.state.clone();
        info!("Current state: {state}");

        match state {
            InstanceState::Up => {
                reporter.info(READY_MESSAGE);
                return Ok(InstanceDetails::from(status));
            }
            InstanceState::Error if error_retries == 0 => {
                error!("Instance {instance_id} entered the Error state");
                return Err(Error::InstanceFailed);
            }
            InstanceState::Error => {
                error_retries -= 1;
                reporter.warning(&format!(
                    "Instance {instance_id} reported an Error state, polling again ({error_retries} error retries left)"
                ));
            }
            InstanceState::Other(other) => {
                warn!("Unexpected instance state {other}, polling again");
            }
            InstanceState::Submitted | InstanceState::Configuring => {}
        }

        if attempt < policy.max_attempts {
            debug!(
                "attempt {attempt}/{} done, next check in {:?}",
                policy.max_attempts, policy.interval
            );
            sleep(policy.interval).await;
        }
    }

    error!(
        "Instance {instance_id} not up after {} attempts",
        policy.max_attempts
    );
    Err(Error::Timeout {
        attempts: policy.max_attempts,
    })
}
