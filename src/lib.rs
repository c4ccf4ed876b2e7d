//! Branch and delete ephemeral Tembo database instances from CI
//!
//! # Module Organization
//!
//! - `cli` - argument parsing, dispatch and the orchestrator
//! - `config` - typed inputs of a run
//! - `api` - Tembo Cloud API client and payloads
//! - `branch` - existence check, restore request and the branch flow
//! - `poll` - status polling until the instance is up
//! - `delete` - instance deletion
//! - `report` - step outputs and workflow commands
//! - `names` - default instance names
//! - `telemetry` - tracing setup

pub mod api;
pub mod branch;
pub mod cli;
pub mod config;
pub mod delete;
pub mod error;
pub mod names;
pub mod poll;
pub mod report;
pub mod telemetry;
