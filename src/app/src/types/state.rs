use serde::{Deserialize, Serialize};

use super::network::NetworkRecord;

/// State machine of the provisioning page.
///
/// # State Machine Diagram
///
/// ```text
///   Idle ──scan──► Scanning ──non-empty──► NetworksListed ──select──► AwaitingCredentials
///    ▲                │                                                    │
///    │   empty / error│                                                    │ submit
///    ├────────────────┘                                                    ▼
///    │                                                                Connecting
///    │                                                      success=true │      │ false / error
///    │                                                                   ▼      ▼
///    └─────────────────────────── restart ──────────────────────── Succeeded  Failed
/// ```
///
/// `AwaitingCredentials`, `Connecting` and the terminal states carry the ssid
/// the user picked in the current cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ProvisioningState {
    #[default]
    Idle,
    Scanning,
    NetworksListed {
        networks: Vec<NetworkRecord>,
    },
    AwaitingCredentials {
        ssid: String,
        secured: bool,
    },
    Connecting {
        ssid: String,
    },
    Succeeded {
        ssid: String,
    },
    Failed {
        ssid: String,
        message: String,
    },
}

impl ProvisioningState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Scanning => "Scanning",
            Self::NetworksListed { .. } => "NetworksListed",
            Self::AwaitingCredentials { .. } => "AwaitingCredentials",
            Self::Connecting { .. } => "Connecting",
            Self::Succeeded { .. } => "Succeeded",
            Self::Failed { .. } => "Failed",
        }
    }

    /// A scan or connect request is outstanding
    pub fn is_request_in_flight(&self) -> bool {
        matches!(self, Self::Scanning | Self::Connecting { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Whether a user-initiated scan may start from here
    pub fn accepts_scan(&self) -> bool {
        matches!(
            self,
            Self::Idle | Self::NetworksListed { .. } | Self::AwaitingCredentials { .. }
        )
    }

    /// The ssid chosen in the current cycle, if any
    pub fn selected_ssid(&self) -> Option<&str> {
        match self {
            Self::AwaitingCredentials { ssid, .. }
            | Self::Connecting { ssid }
            | Self::Succeeded { ssid }
            | Self::Failed { ssid, .. } => Some(ssid.as_str()),
            _ => None,
        }
    }

    /// Transition from NetworksListed to AwaitingCredentials for entry `index`
    pub fn to_awaiting_credentials(&self, index: usize) -> Option<Self> {
        if let Self::NetworksListed { networks } = self {
            networks
                .get(index)
                .map(|network| Self::AwaitingCredentials {
                    ssid: network.ssid.clone(),
                    secured: network.secured,
                })
        } else {
            None
        }
    }
}
