//! Editor model - the complete state of one template editor instance
//!
//! The canonical value is owned by the caller; the model keeps the last value
//! the caller pushed in, plus everything derived from it: the surface, the
//! mounted widgets, and the reentrancy flag that guards programmatic renders.

use crate::lifecycle;
use crate::surface::Surface;
use crate::template::contains_token;
use crate::widget::{FallbackMap, LabelMap, WidgetRegistry};

/// Per-instance state machine: `Idle -> Reconciling -> Idle`, then `Disposed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The surface reflects the last accepted value; user edits are read
    Idle,
    /// A programmatic render is in flight; surface edits are not read back
    Reconciling,
    /// Torn down; nothing reacts any more
    Disposed,
}

/// State of one editor instance
#[derive(Debug)]
pub struct EditorModel {
    /// Last canonical value pushed in by the caller
    pub value: String,
    /// Fallback values passed down to tags (read-only input)
    pub fallbacks: FallbackMap,
    /// Label lookup passed down to tags (read-only input)
    pub labels: LabelMap,
    /// The mount point
    pub surface: Surface,
    /// Widgets mounted on the surface
    pub widgets: WidgetRegistry,
    /// Reentrancy flag: set while this instance rewrites its own surface
    pub(crate) updating: bool,
    /// A value arrived while `updating` and has not been rendered yet
    pub(crate) value_pending: bool,
    pub(crate) disposed: bool,
    /// Completed full render passes; also the settle generation
    pub(crate) render_count: u64,
}

impl EditorModel {
    /// Build the model and its initial surface.
    ///
    /// A value with tokens gets a full render right away. Plain text is
    /// placed on the surface as-is.
    pub fn new(value: impl Into<String>, fallbacks: FallbackMap, labels: LabelMap) -> Self {
        let value = value.into();
        let mut model = Self {
            value,
            fallbacks,
            labels,
            surface: Surface::new(),
            widgets: WidgetRegistry::new(),
            updating: false,
            value_pending: false,
            disposed: false,
            render_count: 0,
        };

        if contains_token(&model.value) {
            model.render();
        } else {
            model.surface = Surface::with_text(&model.value);
        }
        model
    }

    pub fn phase(&self) -> Phase {
        if self.disposed {
            Phase::Disposed
        } else if self.updating {
            Phase::Reconciling
        } else {
            Phase::Idle
        }
    }

    pub fn is_reconciling(&self) -> bool {
        self.updating
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Full render of the stored value; returns the new generation
    pub(crate) fn render(&mut self) -> u64 {
        lifecycle::render(
            &mut self.surface,
            &mut self.widgets,
            &self.value,
            &self.fallbacks,
            &self.labels,
        );
        self.render_count += 1;
        self.render_count
    }

    /// Non-empty fallback for `name`
    pub fn fallback_for(&self, name: &str) -> Option<&str> {
        effective_fallback(&self.fallbacks, name)
    }

    /// Names of the variables currently anchored on the surface
    pub fn rendered_names(&self) -> Vec<&str> {
        self.surface
            .nodes()
            .iter()
            .filter_map(|node| node.variable_name())
            .collect()
    }
}

/// Empty fallback strings count as unset
pub(crate) fn effective_fallback<'a>(fallbacks: &'a FallbackMap, name: &str) -> Option<&'a str> {
    fallbacks
        .get(name)
        .map(String::as_str)
        .filter(|f| !f.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_tokens_renders_once() {
        let model = EditorModel::new("Hi {{name}}", FallbackMap::new(), LabelMap::new());
        assert_eq!(model.render_count(), 1);
        assert_eq!(model.widgets.live_count(), 1);
        assert_eq!(model.phase(), Phase::Idle);
    }

    #[test]
    fn test_new_plain_text_mounts_nothing() {
        let model = EditorModel::new("hello world", FallbackMap::new(), LabelMap::new());
        assert_eq!(model.render_count(), 0);
        assert_eq!(model.widgets.mounted_total(), 0);
        assert_eq!(model.surface.text_content(), "hello world");
    }

    #[test]
    fn test_fallback_for_ignores_empty() {
        let mut fallbacks = FallbackMap::new();
        fallbacks.insert("a".to_string(), String::new());
        fallbacks.insert("b".to_string(), "x".to_string());
        let model = EditorModel::new("", fallbacks, LabelMap::new());
        assert_eq!(model.fallback_for("a"), None);
        assert_eq!(model.fallback_for("b"), Some("x"));
    }
}
