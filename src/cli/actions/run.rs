use super::Action;
use crate::{
    api::{Client, InstanceDetails, InstanceSummary},
    branch::{self, BranchOutcome},
    delete,
    report::Reporter,
};
use anyhow::{Context, Result};

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action, reporter: &mut dyn Reporter) -> Result<()> {
    match action {
        Action::Branch { request } => {
            let client = Client::from_request(&request)?;
            match branch::branch(&client, &request, reporter).await? {
                BranchOutcome::Skipped => Ok(()),
                BranchOutcome::Created { created, details } => {
                    publish(&created, &details, reporter)
                }
            }
        }
        Action::Delete { request } => {
            let client = Client::from_request(&request)?;
            delete::delete_instance(&client, &request.instance_id, reporter).await?;
            Ok(())
        }
    }
}

/// Publish the credentials of a new instance as step outputs
///
/// Identifiers missing from the status payload fall back to the ones the
/// restore call returned. Secrets are masked before they are written.
fn publish(
    created: &InstanceSummary,
    details: &InstanceDetails,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let mut outputs: Vec<(&str, String)> = vec![
        (
            "instance_id",
            details
                .instance_id
                .clone()
                .unwrap_or_else(|| created.instance_id.clone()),
        ),
        (
            "instance_name",
            details
                .instance_name
                .clone()
                .unwrap_or_else(|| created.instance_name.clone()),
        ),
    ];

    if let Some(info) = &details.connection_info {
        if let Some(password) = &info.password {
            reporter.set_secret(password);
        }
        let url = info.connection_url();
        if let Some(url) = &url {
            reporter.set_secret(url);
        }

        let fields = [
            ("host", info.host.clone()),
            ("port", info.port_string()),
            ("user", info.user.clone()),
            ("password", info.password.clone()),
            ("connection_url", url),
        ];
        outputs.extend(
            fields
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value))),
        );
    }

    for (name, value) in outputs {
        reporter
            .set_output(name, &value)
            .with_context(|| format!("Failed to set output {name}"))?;
    }

    Ok(())
}
