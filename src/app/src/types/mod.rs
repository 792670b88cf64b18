//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - network: Scan results and connect request/response bodies
//! - state: Provisioning state machine
//! - error: Transport and validation errors
//! - config: Device API profile and password policy

pub mod config;
pub mod error;
pub mod network;
pub mod state;

pub use config::*;
pub use error::*;
pub use network::*;
pub use state::*;
