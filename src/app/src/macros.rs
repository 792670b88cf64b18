/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.error_message, None;
///     model.info_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for device API requests expecting a JSON response.
///
/// Renders first (so the shell shows the in-flight state), then sends the
/// request and classifies the outcome with `process_json_response` into
/// `Result<$response_type, TransportError>`, which `then` turns into the
/// response event.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// device_request!(HttpCmd::get(url), "Scan",
///     expect_json: Vec<NetworkRecord>,
///     then: |result| Event::Scan(ScanEvent::Response(result)))
/// ```
#[macro_export]
macro_rules! device_request {
    ($builder:expr, $action:expr, expect_json: $response_type:ty, then: $to_event:expr) => {{
        let to_event = $to_event;
        crux_core::Command::all([
            crux_core::render::render(),
            $builder.build().then_send(move |result| {
                let event_result: Result<$response_type, $crate::types::TransportError> =
                    $crate::transport::process_json_response($action, result);
                to_event(event_result)
            }),
        ])
    }};
}
