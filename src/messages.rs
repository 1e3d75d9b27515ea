//! Message types for the Elm-style architecture
//!
//! All state changes of an editor instance flow through these message types.

use crate::keys::KeyPress;
use crate::surface::Caret;
use crate::widget::{FallbackMap, LabelMap, WidgetId};

/// Messages from the caller that owns the canonical value
#[derive(Debug, Clone)]
pub enum SyncMsg {
    /// A new canonical value was pushed in
    SetValue(String),
    /// Replace the fallback map
    SetFallbacks(FallbackMap),
    /// Replace the label mapping
    SetLabels(LabelMap),
    /// The render pass for `generation` has settled (next event-loop turn)
    Settled { generation: u64 },
    /// Tear everything down; the editor stops reacting
    Dispose,
}

/// Raw signals from the editable surface
#[derive(Debug, Clone)]
pub enum SurfaceMsg {
    /// The surface content was edited (fires after every user edit)
    ContentChanged,
    /// A key went down, before any default behaviour ran
    KeyDown(KeyPress),
    /// A tag anchor received keyboard focus
    FocusWidget(WidgetId),
    /// Keyboard focus moved back to the text at `caret`
    SetCaret(Caret),
}

/// Events raised by a mounted tag widget
#[derive(Debug, Clone, Copy)]
pub enum TagMsg {
    /// The tag body was clicked
    Click(WidgetId),
    /// The close control was clicked
    Close(WidgetId),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Sync(SyncMsg),
    Surface(SurfaceMsg),
    Tag(TagMsg),
}

impl From<SyncMsg> for Msg {
    fn from(msg: SyncMsg) -> Self {
        Msg::Sync(msg)
    }
}

impl From<SurfaceMsg> for Msg {
    fn from(msg: SurfaceMsg) -> Self {
        Msg::Surface(msg)
    }
}

impl From<TagMsg> for Msg {
    fn from(msg: TagMsg) -> Self {
        Msg::Tag(msg)
    }
}
