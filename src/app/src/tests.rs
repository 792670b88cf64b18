use super::*;
use crux_core::Request;
use crux_http::protocol::{HttpRequest, HttpResponse, HttpResult};
use serde_json::json;

/// Pull the HTTP request out of a command, skipping the render effect
fn take_http_request(cmd: &mut Command<Effect, Event>) -> Request<HttpRequest> {
    cmd.effects()
        .find_map(|effect| match effect {
            Effect::Http(request) => Some(request),
            _ => None,
        })
        .expect("command should issue an HTTP request")
}

/// Resolve the request and feed the resulting event back into the app
fn respond(
    mut cmd: Command<Effect, Event>,
    model: &mut Model,
    response: HttpResult,
) -> (HttpRequest, Command<Effect, Event>) {
    let mut request = take_http_request(&mut cmd);
    let sent = request.operation.clone();
    request
        .resolve(response)
        .expect("request should resolve");
    let event = cmd.events().next().expect("response should produce an event");
    (sent, update::update(event, model))
}

fn scan_to_list(model: &mut Model, networks: serde_json::Value) {
    let cmd = update::update(Event::Scan(ScanEvent::Request), model);
    let _ = respond(
        cmd,
        model,
        HttpResult::Ok(HttpResponse::ok().json(networks).build()),
    );
}

fn connect_body(request: &HttpRequest) -> serde_json::Value {
    serde_json::from_slice(&request.body).expect("connect body should be JSON")
}

#[test]
fn test_initialize_resets_to_idle() {
    let mut model = Model {
        state: ProvisioningState::Failed {
            ssid: "HomeNet".to_string(),
            message: "Some error".to_string(),
        },
        error_message: Some("Some error".to_string()),
        ..Default::default()
    };

    let _ = update::update(Event::Initialize, &mut model);

    assert_eq!(model.state, ProvisioningState::Idle);
    assert_eq!(model.error_message, None);
}

#[test]
fn test_initialize_during_scan_keeps_single_request_in_flight() {
    let mut model = Model::default();

    let first = update::update(Event::Scan(ScanEvent::Request), &mut model);
    let _ = update::update(Event::Initialize, &mut model);
    assert_eq!(model.state, ProvisioningState::Scanning);

    let mut second = update::update(Event::Scan(ScanEvent::Request), &mut model);
    assert!(second.effects().next().is_none());

    let _ = respond(
        first,
        &mut model,
        HttpResult::Ok(
            HttpResponse::ok()
                .json(json!([{"ssid": "HomeNet", "rssi": -45}]))
                .build(),
        ),
    );
    assert!(matches!(
        model.state,
        ProvisioningState::NetworksListed { ref networks } if networks.len() == 1
    ));
}

#[test]
fn test_scan_uses_configured_profile() {
    let mut model = Model::default();
    let _ = update::update(
        Event::Configure(ProvisioningConfig {
            device_api: DeviceApi::legacy(),
            ..Default::default()
        }),
        &mut model,
    );

    let mut cmd = update::update(Event::Scan(ScanEvent::Request), &mut model);
    let request = take_http_request(&mut cmd);

    assert_eq!(request.operation.method, "GET");
    assert_eq!(request.operation.url, "https://relative/api/wifi-scan");
}

#[test]
fn test_happy_path_ends_in_succeeded() {
    let mut model = Model::default();

    let cmd = update::update(Event::Scan(ScanEvent::Request), &mut model);
    assert_eq!(model.state, ProvisioningState::Scanning);

    let (scan_request, _) = respond(
        cmd,
        &mut model,
        HttpResult::Ok(
            HttpResponse::ok()
                .json(json!([{"ssid": "HomeNet", "rssi": -45, "secured": true}]))
                .build(),
        ),
    );
    assert_eq!(scan_request.method, "POST");
    assert_eq!(scan_request.url, "https://relative/scan");
    assert_eq!(
        model.state,
        ProvisioningState::NetworksListed {
            networks: vec![NetworkRecord {
                ssid: "HomeNet".to_string(),
                rssi: -45,
                secured: true,
            }]
        }
    );

    let _ = update::update(
        Event::Connect(ConnectEvent::SelectNetwork { index: 0 }),
        &mut model,
    );
    let cmd = update::update(
        Event::Connect(ConnectEvent::Submit {
            password: "secret123".to_string(),
        }),
        &mut model,
    );
    assert_eq!(
        model.state,
        ProvisioningState::Connecting {
            ssid: "HomeNet".to_string()
        }
    );

    let (connect_request, _) = respond(
        cmd,
        &mut model,
        HttpResult::Ok(HttpResponse::ok().json(json!({"success": true})).build()),
    );

    assert_eq!(connect_request.method, "POST");
    assert_eq!(connect_request.url, "https://relative/connect");
    assert_eq!(
        connect_body(&connect_request),
        json!({"ssid": "HomeNet", "password": "secret123"})
    );
    assert_eq!(
        model.state,
        ProvisioningState::Succeeded {
            ssid: "HomeNet".to_string()
        }
    );
}

#[test]
fn test_connect_carries_selected_ssid_not_previous_cycle() {
    let mut model = Model::default();

    // First cycle fails against "OldNet"
    scan_to_list(
        &mut model,
        json!([{"ssid": "OldNet", "rssi": -50, "auth": true}]),
    );
    let _ = update::update(
        Event::Connect(ConnectEvent::SelectNetwork { index: 0 }),
        &mut model,
    );
    let cmd = update::update(
        Event::Connect(ConnectEvent::Submit {
            password: "wrong".to_string(),
        }),
        &mut model,
    );
    let _ = respond(
        cmd,
        &mut model,
        HttpResult::Ok(HttpResponse::ok().json(json!({"success": false})).build()),
    );
    assert!(matches!(model.state, ProvisioningState::Failed { .. }));

    // Second cycle picks the third entry of a longer list
    let _ = update::update(Event::Ui(UiEvent::Restart), &mut model);
    scan_to_list(
        &mut model,
        json!([
            {"ssid": "OldNet", "rssi": -50, "auth": true},
            {"ssid": "Neighbour", "rssi": -80, "auth": true},
            {"ssid": "NewNet", "rssi": -41, "auth": true}
        ]),
    );
    let _ = update::update(
        Event::Connect(ConnectEvent::SelectNetwork { index: 2 }),
        &mut model,
    );
    let mut cmd = update::update(
        Event::Connect(ConnectEvent::Submit {
            password: "right".to_string(),
        }),
        &mut model,
    );

    let requests: Vec<HttpRequest> = cmd
        .effects()
        .filter_map(|effect| match effect {
            Effect::Http(request) => Some(request.operation),
            _ => None,
        })
        .collect();

    assert_eq!(requests.len(), 1);
    assert_eq!(
        connect_body(&requests[0]),
        json!({"ssid": "NewNet", "password": "right"})
    );
}

#[test]
fn test_scan_http_500_returns_to_idle_with_message() {
    let mut model = Model::default();

    let cmd = update::update(Event::Scan(ScanEvent::Request), &mut model);
    let _ = respond(
        cmd,
        &mut model,
        HttpResult::Ok(HttpResponse::status(500).build()),
    );

    assert_eq!(model.state, ProvisioningState::Idle);
    let message = model.error_message.expect("scan failure should be visible");
    assert!(message.contains("500"));
    assert!(message.contains("server error"));
}

#[test]
fn test_scan_http_404_reports_client_error() {
    let mut model = Model::default();

    let cmd = update::update(Event::Scan(ScanEvent::Request), &mut model);
    let _ = respond(
        cmd,
        &mut model,
        HttpResult::Ok(HttpResponse::status(404).build()),
    );

    assert_eq!(model.state, ProvisioningState::Idle);
    assert_eq!(
        model.error_message.as_deref(),
        Some("Error scanning for networks: the device responded with HTTP 404 (client error)")
    );
}

#[test]
fn test_connect_http_503_is_status_error_not_restart() {
    let mut model = Model {
        state: ProvisioningState::AwaitingCredentials {
            ssid: "HomeNet".to_string(),
            secured: true,
        },
        ..Default::default()
    };

    let cmd = update::update(
        Event::Connect(ConnectEvent::Submit {
            password: "secret123".to_string(),
        }),
        &mut model,
    );
    let _ = respond(
        cmd,
        &mut model,
        HttpResult::Ok(HttpResponse::status(503).build()),
    );

    let ProvisioningState::Failed { ssid, message } = &model.state else {
        panic!("expected Failed, got {:?}", model.state);
    };
    assert_eq!(ssid, "HomeNet");
    assert!(message.starts_with("Connection error"));
    assert!(message.contains("HTTP 503 (server error)"));
    assert!(!message.contains("restarting"));
}

#[test]
fn test_scan_empty_list_returns_to_idle_with_info() {
    let mut model = Model::default();

    scan_to_list(&mut model, json!([]));

    assert_eq!(model.state, ProvisioningState::Idle);
    assert_eq!(model.info_message, Some("No networks found.".to_string()));
    assert_eq!(model.error_message, None);
}

#[test]
fn test_scan_malformed_json_returns_to_idle() {
    let mut model = Model::default();

    scan_to_list(&mut model, json!({"networks": "none"}));

    assert_eq!(model.state, ProvisioningState::Idle);
    assert!(model.error_message.is_some());
}

#[test]
fn test_connect_unreachable_fails() {
    let mut model = Model {
        state: ProvisioningState::AwaitingCredentials {
            ssid: "HomeNet".to_string(),
            secured: true,
        },
        ..Default::default()
    };

    let cmd = update::update(
        Event::Connect(ConnectEvent::Submit {
            password: "secret123".to_string(),
        }),
        &mut model,
    );
    let _ = respond(
        cmd,
        &mut model,
        HttpResult::Err(crux_http::HttpError::Io("Failed to fetch".to_string())),
    );

    assert!(matches!(
        model.state,
        ProvisioningState::Failed { ref ssid, .. } if ssid == "HomeNet"
    ));
    assert!(model
        .error_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Connection error")));

    let _ = update::update(Event::Ui(UiEvent::Restart), &mut model);
    assert_eq!(model.state, ProvisioningState::Idle);
}
