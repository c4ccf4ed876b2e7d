//! Tembo Cloud API plumbing
//!
//! - `client` - authenticated HTTP client scoped to an organization
//! - `models` - request and response bodies

pub mod client;
pub mod models;

pub use client::{ApiResponse, Client};
pub use models::{
    ConnectionInfo, InstanceDetails, InstanceState, InstanceStatus, InstanceSummary, Port,
    RestoreRequest, RestoreSource,
};
