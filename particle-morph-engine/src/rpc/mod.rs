//! JSON-RPC 2.0 bridge between the viewer and its host page.
//!
//! Messages travel as JSON strings over `postMessage`. Requests with an `id` get a
//! response; requests without one are handled silently.
//!
//! ## Methods
//!
//! - `animate`: start the morph sequence, restarting it if it is already playing.
//!   Refused with `-32000` until the particles exist.
//! - `set_progress`: set the shader morph progress (`{ "value": number }`)
//! - `set_color`: set `clearColor`, `colorA` or `colorB` from a `#rrggbb` string
//! - `get_parameters`: current size, progress, resolution and colours
//! - `get_fps`: smoothed frame rate
//!
//! ## Notifications
//!
//! - `fps_update`: smoothed frame rate, every 0.5 s
//! - `progress_update`: morph progress on every frame the sequence moves it
//! - `loading_failed`: the model could not be loaded or turned into particles
//!
//! ## Errors
//!
//! - `-32000`: not ready yet
//! - `-32601`: method not found
//! - `-32602`: invalid params

/// Message queue, request dispatch and outgoing notifications.
pub mod web_rpc;
