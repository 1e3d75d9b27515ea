//! Inline tag widgets for variable tokens.
//!
//! - [`LabelMap`]: variable name -> human label lookup
//! - [`TagWidget`]: the presentation-only widget mounted at each anchor
//! - [`WidgetRegistry`]: tracks every mounted instance so a render pass or
//!   disposal can tear all of them down

mod labels;
mod registry;
mod tag;

pub use labels::{to_title_case, LabelMap};
pub use registry::WidgetRegistry;
pub use tag::{TagConfig, TagWidget, WidgetState, CLOSE_GLYPH};

/// Opaque handle to a mounted widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Fallback values keyed by variable name
pub type FallbackMap = std::collections::HashMap<String, String>;
