use crux_core::Command;

use crate::device_request;
use crate::events::{Event, ScanEvent};
use crate::model::Model;
use crate::types::{
    selectable_networks, NetworkRecord, ProvisioningState, ScanMethod, TransportError,
};
use crate::{Effect, HttpCmd};

pub const NO_NETWORKS_FOUND: &str = "No networks found.";

/// Handle scan-related events
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Request => handle_scan_request(model),
        ScanEvent::Response(result) => handle_scan_response(result, model),
    }
}

fn handle_scan_request(model: &mut Model) -> Command<Effect, Event> {
    if !model.state.accepts_scan() {
        log::debug!("ignoring scan request while {}", model.state.name());
        return Command::done();
    }

    model.state = ProvisioningState::Scanning;
    model.clear_messages();

    let api = &model.config.device_api;
    let builder = match api.scan_method {
        ScanMethod::Get => HttpCmd::get(api.scan_url()),
        ScanMethod::Post => HttpCmd::post(api.scan_url()),
    };

    device_request!(builder, "Scan",
        expect_json: Vec<NetworkRecord>,
        then: |result| Event::Scan(ScanEvent::Response(result)))
}

fn handle_scan_response(
    result: Result<Vec<NetworkRecord>, TransportError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if model.state != ProvisioningState::Scanning {
        log::debug!("discarding scan response while {}", model.state.name());
        return Command::done();
    }

    match result.map(selectable_networks) {
        Ok(networks) if networks.is_empty() => {
            model.state = ProvisioningState::Idle;
            model.info_message = Some(NO_NETWORKS_FOUND.to_string());
        }
        Ok(networks) => {
            log::debug!("scan returned {} networks", networks.len());
            model.state = ProvisioningState::NetworksListed { networks };
        }
        Err(e) => {
            log::warn!("scan failed: {e} ({})", e.detail());
            model.state = ProvisioningState::Idle;
            model.set_error(format!("Error scanning for networks: {e}"));
        }
    }

    crux_core::render::render()
}
