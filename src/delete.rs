use crate::{api::Client, error::Error, report::Reporter};
use reqwest::StatusCode;
use tracing::error;

/// Delete an instance, only `202 Accepted` counts as success
///
/// # Errors
///
/// Returns an error if no response is received or the API answers with any
/// other status
pub async fn delete_instance(
    client: &Client,
    instance_id: &str,
    reporter: &mut dyn Reporter,
) -> Result<(), Error> {
    let response = client
        .delete(&format!("instances/{instance_id}"))
        .await
        .inspect_err(|e| {
            error!("Error deleting instance {instance_id}: {e}");
        })?;

    if response.status == StatusCode::ACCEPTED {
        reporter.info(&format!("Instance {instance_id} deleted successfully."));
        Ok(())
    } else {
        let err = Error::DeleteFailed {
            instance_id: instance_id.to_string(),
            status: response.status.as_u16(),
        };
        error!("{err}: {}", response.body);
        Err(err)
    }
}
