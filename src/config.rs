use std::{fmt, str::FromStr, time::Duration};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.tembo.io";
pub const DEFAULT_ENVIRONMENT: &str = "prod";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;
pub const DEFAULT_ERROR_RETRIES: u32 = 0;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Operation requested by the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Restore a new instance from a source instance and wait for it
    #[default]
    Branch,
    /// Delete an existing instance
    Delete,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch" => Ok(Self::Branch),
            "delete" => Ok(Self::Delete),
            _ => Err(format!("Unsupported operation: {s}")),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch => f.write_str("branch"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// How the status poller waits for an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Fixed pause between two status requests
    pub interval: Duration,
    /// Upper bound of status requests
    pub max_attempts: u32,
    /// How many `Error` states are tolerated before giving up
    pub error_retries: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            error_retries: DEFAULT_ERROR_RETRIES,
        }
    }
}

/// Inputs of a single run, built once and never mutated
#[derive(Clone, PartialEq, Eq)]
pub struct ProvisionRequest {
    pub api_endpoint: String,
    pub org_id: String,
    /// Source instance when branching, target instance when deleting
    pub instance_id: String,
    /// Name of the instance to create
    pub instance_name: String,
    /// Environment tag of the new instance (prod, dev, test)
    pub environment: String,
    pub token: String,
    pub poll: PollPolicy,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl fmt::Debug for ProvisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionRequest")
            .field("api_endpoint", &self.api_endpoint)
            .field("org_id", &self.org_id)
            .field("instance_id", &self.instance_id)
            .field("instance_name", &self.instance_name)
            .field("environment", &self.environment)
            .field("token", &"<redacted>")
            .field("poll", &self.poll)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
