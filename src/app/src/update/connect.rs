use crux_core::Command;

use crate::device_request;
use crate::events::{ConnectEvent, Event};
use crate::model::Model;
use crate::types::{ConnectOutcome, CredentialInput, ProvisioningState, TransportError};
use crate::{Effect, HttpCmd};

pub const CONNECT_SUCCESS: &str =
    "Success! The device will now restart and connect to your network.";

/// Handle network selection and connect events
pub fn handle(event: ConnectEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConnectEvent::SelectNetwork { index } => handle_select_network(index, model),
        ConnectEvent::Submit { password } => handle_submit(password, model),
        ConnectEvent::Response { ssid, result } => handle_connect_response(ssid, result, model),
    }
}

fn handle_select_network(index: usize, model: &mut Model) -> Command<Effect, Event> {
    match model.state.to_awaiting_credentials(index) {
        Some(awaiting) => {
            model.state = awaiting;
            model.clear_messages();
            crux_core::render::render()
        }
        None => {
            log::warn!(
                "ignoring selection of network {index} while {}",
                model.state.name()
            );
            Command::done()
        }
    }
}

fn handle_submit(password: String, model: &mut Model) -> Command<Effect, Event> {
    let ProvisioningState::AwaitingCredentials { ssid, secured } = &model.state else {
        log::debug!("ignoring credentials while {}", model.state.name());
        return Command::done();
    };

    let credentials = CredentialInput {
        ssid: ssid.clone(),
        password,
    };

    if let Err(e) = credentials.check(*secured, model.config.password_policy) {
        return model.set_error_and_render(e.to_string());
    }

    let ssid = credentials.ssid.clone();
    let request = credentials.into_request();

    match HttpCmd::post(model.config.device_api.connect_url())
        .header("Content-Type", "application/json")
        .body_json(&request)
    {
        Ok(builder) => {
            log::info!("connecting device to {ssid:?}");
            model.state = ProvisioningState::Connecting { ssid: ssid.clone() };
            model.clear_messages();

            device_request!(builder, "Connect",
                expect_json: ConnectOutcome,
                then: move |result| Event::Connect(ConnectEvent::Response { ssid, result }))
        }
        Err(e) => {
            let message = format!("Failed to create connect request: {e}");
            log::error!("{message}");
            model.state = ProvisioningState::Failed {
                ssid,
                message: message.clone(),
            };
            model.set_error_and_render(message)
        }
    }
}

fn handle_connect_response(
    ssid: String,
    result: Result<ConnectOutcome, TransportError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match &model.state {
        ProvisioningState::Connecting { ssid: pending } if *pending == ssid => {}
        _ => {
            log::debug!(
                "discarding connect response for {ssid:?} while {}",
                model.state.name()
            );
            return Command::done();
        }
    }

    match result {
        Ok(ConnectOutcome { success: true }) => {
            log::info!("device accepted credentials for {ssid:?}");
            model.state = ProvisioningState::Succeeded { ssid };
            model.success_message = Some(CONNECT_SUCCESS.to_string());
        }
        Ok(ConnectOutcome { success: false }) => {
            log::info!("device failed to join {ssid:?}");
            let message = format!(
                "Failed to connect to \"{ssid}\". Please check the password and try again."
            );
            fail(model, ssid, message);
        }
        Err(e) => {
            log::warn!("connect to {ssid:?} failed: {e} ({})", e.detail());
            fail(model, ssid, connect_error_message(&e));
        }
    }

    crux_core::render::render()
}

fn fail(model: &mut Model, ssid: String, message: String) {
    model.set_error(message.clone());
    model.state = ProvisioningState::Failed { ssid, message };
}

/// The device restarts right after accepting credentials, so a lost
/// connection does not necessarily mean the attempt failed.
fn connect_error_message(error: &TransportError) -> String {
    match error {
        TransportError::Unreachable(_) => format!(
            "Connection error: {error}. The device may already be restarting; \
             if it does not join your network, please try again."
        ),
        _ => format!("Connection error: {error}. Please try again."),
    }
}
