use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

use crate::engine::animation::{
    ActiveTimeline, AnimateRequestEvent, advance_timeline, start_animation_on_request,
};
use crate::engine::core::app_state::AppState;
use crate::engine::parameters::{ColorTarget, ParticleParameters};
use crate::engine::systems::fps_tracking::smoothed_fps;

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .before(start_animation_on_request),
            )
            .add_systems(
                Update,
                (progress_notification_system, send_outgoing_messages)
                    .chain()
                    .after(advance_timeline),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Attempt JSON parsing to validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    app_state: Res<State<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut animate_events: EventWriter<AnimateRequestEvent>,
    mut params: ResMut<ParticleParameters>,
    mut clear_color: ResMut<ClearColor>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                debug!("Processing RPC method: {}", request.method);
                if let Some(response) = handle_rpc_request(
                    &request,
                    &diagnostics,
                    *app_state.get() == AppState::Running,
                    &mut animate_events,
                    &mut params,
                    &mut clear_color,
                ) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Ignoring malformed RPC message: {}", parse_error);
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    running: bool,
    animate_events: &mut EventWriter<AnimateRequestEvent>,
    params: &mut ResMut<ParticleParameters>,
    clear_color: &mut ResMut<ClearColor>,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "animate" => handle_animate(running, animate_events),
        "set_progress" => parse_progress_params(&request.params).map(|value| {
            params.progress = value;
            serde_json::json!({ "success": true, "progress": value })
        }),
        "set_color" => parse_color_params(&request.params).map(|(target, colour)| {
            target.set(colour, params, clear_color);
            serde_json::json!({ "success": true, "target": target.label(), "value": colour.to_hex() })
        }),
        "get_parameters" => Ok(parameters_json(params, clear_color)),
        "get_fps" => handle_get_fps(diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            Err(RpcError::method_not_found(&request.method))
        }
    };

    if let Err(error) = &result {
        if request.id.is_none() {
            warn!("RPC notification '{}' failed: {}", request.method, error.message);
        }
    }

    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(create_error_response(id, error)),
    }
}

/// Particles only exist once loading has finished, so earlier requests are refused.
fn handle_animate(
    running: bool,
    animate_events: &mut EventWriter<AnimateRequestEvent>,
) -> Result<serde_json::Value, RpcError> {
    if !running {
        return Err(RpcError::not_ready("Particles are still loading"));
    }
    animate_events.write(AnimateRequestEvent);
    info!("Animate requested over RPC");

    Ok(serde_json::json!({
        "success": true
    }))
}

/// Parse `{ "value": number }` for `set_progress`.
fn parse_progress_params(params: &serde_json::Value) -> Result<f32, RpcError> {
    #[derive(serde::Deserialize)]
    struct ProgressParams {
        value: f32,
    }

    let parsed = serde_json::from_value::<ProgressParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected numeric 'value' parameter"))?;

    if !parsed.value.is_finite() {
        return Err(RpcError::invalid_params("'value' must be finite"));
    }
    Ok(parsed.value)
}

/// Parse `{ "target": "clearColor" | "colorA" | "colorB", "value": "#rrggbb" }`.
fn parse_color_params(params: &serde_json::Value) -> Result<(ColorTarget, Srgba), RpcError> {
    #[derive(serde::Deserialize)]
    struct ColorParams {
        target: String,
        value: String,
    }

    let parsed = serde_json::from_value::<ColorParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'target' and 'value' parameters"))?;

    let target = parsed
        .target
        .parse::<ColorTarget>()
        .map_err(|err| RpcError::invalid_params(&err.to_string()))?;
    let colour = Srgba::hex(&parsed.value).map_err(|err| {
        RpcError::invalid_params(&format!("Invalid colour '{}': {}", parsed.value, err))
    })?;

    Ok((target, colour))
}

/// Snapshot of the shader parameter set for `get_parameters`.
fn parameters_json(params: &ParticleParameters, clear_color: &ClearColor) -> serde_json::Value {
    serde_json::json!({
        "size": params.size,
        "progress": params.progress,
        "resolution": [params.resolution.x, params.resolution.y],
        "clearColor": ColorTarget::Clear.get(params, clear_color).to_hex(),
        "colorA": params.color_a.to_hex(),
        "colorB": params.color_b.to_hex(),
    })
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = smoothed_fps(diagnostics).unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Stream progress to the host page while the morph sequence plays, including the frame
/// that finishes it.
fn progress_notification_system(
    active: Res<ActiveTimeline>,
    params: Res<ParticleParameters>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if active.timeline.is_none() || !active.is_changed() || !params.is_changed() {
        return;
    }
    rpc_interface.send_notification(
        "progress_update",
        serde_json::json!({
            "progress": params.progress
        }),
    );
}

/// Create standardized error response with optional data payload.
fn create_error_response(id: serde_json::Value, error: RpcError) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(error),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    /// Server error range; the request is valid but cannot run yet.
    pub fn not_ready(message: &str) -> Self {
        Self {
            code: -32000,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }
}
