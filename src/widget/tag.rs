//! The tag widget shown in place of a `{{name}}` token.

use super::WidgetId;

/// Glyph drawn for the close control of a closable tag
pub const CLOSE_GLYPH: char = '×';

/// Everything a tag needs at mount time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagConfig {
    /// Variable name the tag represents
    pub name: String,
    /// Resolved display label
    pub label: String,
    /// Fallback value, if the caller configured one
    pub fallback: Option<String>,
    /// Whether a close control is shown
    pub closable: bool,
}

/// Lifecycle of a mounted widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Mounted,
    Destroyed,
}

/// A mounted tag instance.
///
/// Tags are presentation only: they never edit the canonical value
/// themselves. Click and close are reported to the editor, which decides
/// what happens.
#[derive(Debug, Clone)]
pub struct TagWidget {
    id: WidgetId,
    config: TagConfig,
    state: WidgetState,
}

impl TagWidget {
    pub(crate) fn mount(id: WidgetId, config: TagConfig) -> Self {
        Self {
            id,
            config,
            state: WidgetState::Mounted,
        }
    }

    pub(crate) fn destroy(&mut self) {
        self.state = WidgetState::Destroyed;
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.state == WidgetState::Mounted
    }

    pub fn is_closable(&self) -> bool {
        self.config.closable
    }

    /// Fallback value, ignoring empty strings
    pub fn fallback(&self) -> Option<&str> {
        self.config.fallback.as_deref().filter(|f| !f.is_empty())
    }

    /// Text shown inside the tag: `label` or `label | fallback`
    pub fn display_text(&self) -> String {
        match self.fallback() {
            Some(fallback) => format!("{} | {}", self.config.label, fallback),
            None => self.config.label.clone(),
        }
    }
}
