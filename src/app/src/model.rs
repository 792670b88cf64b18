use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized (it never holds a password)
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Provisioning state
    pub state: ProvisioningState,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub info_message: Option<String>,

    // Settings supplied by the shell
    pub config: ProvisioningConfig,
}

impl Model {
    /// Back to Idle with all messages cleared, settings are kept
    pub fn reset(&mut self) {
        self.state = ProvisioningState::Idle;
        self.clear_messages();
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.info_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }
}
