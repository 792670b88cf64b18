use serde::{Deserialize, Serialize};

use crate::types::*;

/// Scan domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    Request,

    #[serde(skip)]
    Response(Result<Vec<NetworkRecord>, TransportError>),
}

/// Network selection and connect domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectEvent {
    SelectNetwork {
        index: usize,
    },
    Submit {
        password: String,
    },

    /// Tagged with the ssid the request was sent for
    #[serde(skip)]
    Response {
        ssid: String,
        result: Result<ConnectOutcome, TransportError>,
    },
}

/// UI domain events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Restart,
    ClearError,
    ClearInfo,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Configure(ProvisioningConfig),
    Scan(ScanEvent),
    Connect(ConnectEvent),
    Ui(UiEvent),
}
