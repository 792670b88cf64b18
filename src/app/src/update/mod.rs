mod connect;
mod scan;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Page load
        Event::Initialize => {
            if model.state.is_request_in_flight() {
                log::debug!("ignoring initialize while {}", model.state.name());
                return Command::done();
            }
            model.reset();
            render()
        }

        Event::Configure(config) => {
            log::debug!("using device API {:?}", config.device_api);
            model.config = config;
            render()
        }

        Event::Scan(scan_event) => scan::handle(scan_event, model),
        Event::Connect(connect_event) => connect::handle(connect_event, model),
        Event::Ui(ui_event) => ui::handle(ui_event, model),
    }
}
