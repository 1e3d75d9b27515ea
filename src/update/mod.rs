//! Update functions for the Elm-style architecture
//!
//! All state transformations of an editor instance flow through these
//! functions.

mod input;
mod sync;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

#[cfg(debug_assertions)]
use crate::tracing::SurfaceSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use input::{update_surface, update_tag};
pub use sync::update_sync;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Sync(m) => sync::update_sync(model, m),
        Msg::Surface(m) => input::update_surface(model, m),
        Msg::Tag(m) => input::update_tag(model, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SurfaceSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SurfaceSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "surface", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Sync::SetValue("Hi {{name}}")`
/// - `Surface::ContentChanged`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Sync(m) => format!("Sync::{:?}", m),
        Msg::Surface(m) => format!("Surface::{:?}", m),
        Msg::Tag(m) => format!("Tag::{:?}", m),
    }
}
