use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::fmt;

use super::config::PasswordPolicy;
use super::error::{CredentialField, ValidationError};

/// A wireless network reported by the device scan.
///
/// Older firmware reports the security flag as `auth`, the newest omits it
/// entirely, in which case the network is treated as open.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct NetworkRecord {
    #[validate(min_length = 1)]
    pub ssid: String,
    pub rssi: i32,
    #[serde(alias = "auth", default)]
    pub secured: bool,
}

/// Keep only the networks a user can actually pick.
///
/// Hidden networks come back with an empty SSID because the firmware scans
/// with `show_hidden` enabled. An SSID whose raw bytes were not UTF-8 cannot
/// be sent back verbatim, so it is dropped as well. Order is preserved.
pub fn selectable_networks(records: Vec<NetworkRecord>) -> Vec<NetworkRecord> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) if record.ssid.contains(char::REPLACEMENT_CHARACTER) => {
                log::debug!(
                    "dropping scan entry with rssi {}: SSID is not valid UTF-8",
                    record.rssi
                );
                false
            }
            Ok(()) => true,
            Err(e) => {
                log::debug!("dropping scan entry with rssi {}: {e}", record.rssi);
                false
            }
        })
        .collect()
}

/// Credentials for exactly one connect attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialInput {
    pub ssid: String,
    pub password: String,
}

impl CredentialInput {
    /// Check the input against the password policy for the selected network.
    pub fn check(&self, secured: bool, policy: PasswordPolicy) -> Result<(), ValidationError> {
        if self.ssid.is_empty() {
            return Err(ValidationError::EmptyCredentialField(CredentialField::Ssid));
        }

        if self.password.is_empty() && policy.requires_password(secured) {
            return Err(ValidationError::EmptyCredentialField(
                CredentialField::Password,
            ));
        }

        Ok(())
    }

    /// Consume the credentials into the connect request body.
    pub fn into_request(self) -> ConnectRequest {
        ConnectRequest {
            ssid: self.ssid,
            password: self.password,
        }
    }
}

impl fmt::Debug for CredentialInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialInput")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// Body of the connect request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectRequest {
    pub ssid: String,
    pub password: String,
}

impl fmt::Debug for ConnectRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectRequest")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// Response of the connect request
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectOutcome {
    pub success: bool,
}
