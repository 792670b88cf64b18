pub mod events;
pub mod macros;
pub mod model;
pub mod transport;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    events::{ConnectEvent, Event, ScanEvent, UiEvent},
    model::Model,
    transport::{build_url, process_json_response, BASE_URL},
    types::*,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
