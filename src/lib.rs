//! tagfield - template editing with inline tags
//!
//! This crate keeps a canonical template string such as
//! `"Hi {{firstName}}"` in sync with an editable surface where every
//! placeholder is shown as a clickable, closable tag. It follows the Elm
//! Architecture: messages go through [`update`](update::update), which
//! returns commands the [`TemplateEditor`] runtime executes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keys;
pub mod lifecycle;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod surface;
pub mod template;
pub mod tracing;
pub mod update;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use commands::{Cmd, EditorEvent};
pub use config::EditorConfig;
pub use keys::{Key, KeyOutcome, KeyPress};
pub use messages::Msg;
pub use model::{EditorModel, Phase};
pub use runtime::{EditorHandle, SubscriptionId, TemplateEditor};
pub use template::{parse, serialize, RenderedNode, Segment};
pub use widget::{FallbackMap, LabelMap, WidgetId};
