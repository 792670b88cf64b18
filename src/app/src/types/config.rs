use serde::{Deserialize, Serialize};

use crate::transport::BASE_URL;

/// HTTP method the device expects for the scan request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ScanMethod {
    Get,
    #[default]
    Post,
}

/// Endpoint layout of the device API.
///
/// Firmware shipped with two layouts: the current one (`POST /scan`,
/// `POST /connect`) and the legacy wifi-manager one
/// (`GET /api/wifi-scan`, `POST /api/connect`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceApi {
    pub base_url: String,
    pub scan_path: String,
    pub scan_method: ScanMethod,
    pub connect_path: String,
}

impl DeviceApi {
    pub fn current() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            scan_path: "/scan".to_string(),
            scan_method: ScanMethod::Post,
            connect_path: "/connect".to_string(),
        }
    }

    pub fn legacy() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            scan_path: "/api/wifi-scan".to_string(),
            scan_method: ScanMethod::Get,
            connect_path: "/api/connect".to_string(),
        }
    }

    pub fn scan_url(&self) -> String {
        crate::transport::build_url(&self.base_url, &self.scan_path)
    }

    pub fn connect_url(&self) -> String {
        crate::transport::build_url(&self.base_url, &self.connect_path)
    }
}

impl Default for DeviceApi {
    fn default() -> Self {
        Self::current()
    }
}

/// When the credential form may be submitted with an empty password
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PasswordPolicy {
    Optional,
    #[default]
    RequiredForSecured,
    Always,
}

impl PasswordPolicy {
    pub fn requires_password(self, secured: bool) -> bool {
        match self {
            Self::Optional => false,
            Self::RequiredForSecured => secured,
            Self::Always => true,
        }
    }
}

/// Settings supplied by the shell at start-up
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningConfig {
    pub device_api: DeviceApi,
    pub password_policy: PasswordPolicy,
}
