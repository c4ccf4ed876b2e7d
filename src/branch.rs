use crate::{
    api::{Client, InstanceDetails, InstanceSummary, RestoreRequest, RestoreSource},
    config::ProvisionRequest,
    error::{Error, Rejection},
    poll,
    report::Reporter,
};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, info, warn};

/// Result of a branch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    /// An instance with the requested name already exists, nothing was created
    Skipped,
    /// A new instance was restored and is up
    Created {
        created: InstanceSummary,
        details: InstanceDetails,
    },
}

/// Check whether an instance named `instance_name` exists in the organization
///
/// A listing that is not a JSON array, or comes back with an unexpected
/// status, counts as "does not exist".
///
/// # Errors
///
/// Returns an error if no response is received or the API rejects the
/// request (400, 401, 403, 409)
pub async fn instance_exists(client: &Client, instance_name: &str) -> Result<bool, Error> {
    let response = client.get("instances").await.inspect_err(|e| {
        error!("Failed to list instances: {e}");
    })?;

    if Rejection::from_status(response.status).is_some() {
        let err = response.into_error();
        error!("Failed to list instances: {err}");
        return Err(err);
    }

    if response.status != StatusCode::OK {
        warn!(
            "Unexpected response status while listing instances: {}",
            response.status
        );
        return Ok(false);
    }

    match serde_json::from_str::<Value>(&response.body) {
        Ok(Value::Array(instances)) => Ok(instances
            .into_iter()
            .filter_map(|instance| serde_json::from_value::<InstanceSummary>(instance).ok())
            .any(|instance| instance.instance_name == instance_name)),
        _ => {
            warn!("Unexpected response format while listing instances");
            Ok(false)
        }
    }
}

/// Ask the API to restore a new instance from `request.instance_id`
///
/// # Errors
///
/// Returns an error unless the API answers `202 Accepted` with a non-empty
/// `instance_id`
pub async fn restore_instance(
    client: &Client,
    request: &ProvisionRequest,
) -> Result<InstanceSummary, Error> {
    let body = RestoreRequest {
        instance_name: &request.instance_name,
        restore: RestoreSource {
            instance_id: &request.instance_id,
        },
        environment: &request.environment,
    };

    let response = client.post("restore", &body).await.inspect_err(|e| {
        error!("Failed to restore instance: {e}");
    })?;

    if response.status != StatusCode::ACCEPTED {
        let err = response.into_error();
        error!("Failed to restore instance: {err}");
        return Err(err);
    }

    let created: Value = response.json()?;
    let instance_id = created
        .get("instance_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            Error::Malformed("restore response has no instance_id".to_string())
        })?;
    let instance_name = created
        .get("instance_name")
        .and_then(Value::as_str)
        .unwrap_or(request.instance_name.as_str());

    info!("Restore accepted, new instance {instance_name} ({instance_id})");

    Ok(InstanceSummary {
        instance_id: instance_id.to_string(),
        instance_name: instance_name.to_string(),
    })
}

/// Branch `request.instance_id` into a new instance and wait until it is up
///
/// # Errors
///
/// Returns an error if any of the existence check, the restore or the
/// status polling fails
pub async fn branch(
    client: &Client,
    request: &ProvisionRequest,
    reporter: &mut dyn Reporter,
) -> Result<BranchOutcome, Error> {
    if instance_exists(client, &request.instance_name).await? {
        reporter.info(&format!(
            "Database instance with name \"{}\" already exists, skipping creation",
            request.instance_name
        ));
        return Ok(BranchOutcome::Skipped);
    }

    let created = restore_instance(client, request).await?;
    reporter.info("Database branch initiated successfully.");

    let details =
        poll::wait_until_up(client, &created.instance_id, &request.poll, reporter).await?;

    Ok(BranchOutcome::Created { created, details })
}
