mod run;

use crate::{config::ProvisionRequest, report::Reporter};

/// Action enum representing each possible operation
#[derive(Debug)]
pub enum Action {
    Branch { request: ProvisionRequest },
    Delete { request: ProvisionRequest },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self, reporter: &mut dyn Reporter) -> anyhow::Result<()> {
        run::execute(self, reporter).await
    }
}
