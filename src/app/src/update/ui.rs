use crux_core::Command;

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI-related events (restart, clear messages)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::Restart => {
            if model.state.is_request_in_flight() {
                log::debug!("ignoring restart while {}", model.state.name());
                return Command::done();
            }
            if model.state.is_terminal() {
                log::info!("restarting provisioning from {}", model.state.name());
            }
            model.reset();
            crux_core::render::render()
        }
        UiEvent::ClearError => update_field!(model.error_message, None),
        UiEvent::ClearInfo => update_field!(model.info_message, None),
    }
}
