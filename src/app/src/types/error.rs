use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failure of a call to the device API
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransportError {
    /// Fetch rejected, timed out or the device dropped the connection
    #[error("the device could not be reached")]
    Unreachable(String),

    #[error("the device responded with HTTP {} ({})", .0, status_category(.0))]
    HttpStatus(u16),

    #[error("the device sent an unexpected response")]
    MalformedResponse(String),
}

impl TransportError {
    /// Raw detail for diagnostics, not meant for the user
    pub fn detail(&self) -> String {
        match self {
            Self::Unreachable(detail) | Self::MalformedResponse(detail) => detail.clone(),
            Self::HttpStatus(code) => format!("status {code}"),
        }
    }
}

fn status_category(code: &u16) -> &'static str {
    match code {
        400..=499 => "client error",
        500..=599 => "server error",
        _ => "unexpected status",
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CredentialField {
    Ssid,
    Password,
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssid => write!(f, "Network name"),
            Self::Password => write!(f, "Password"),
        }
    }
}

/// Local rejection of the credential form
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyCredentialField(CredentialField),
}
