//! Caret and focus types for the surface.

use crate::widget::WidgetId;

/// Gap index over surface atoms (chars of text nodes, whole anchors)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Caret(pub usize);

/// Current keyboard target inside the surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    /// Editable text at the caret
    #[default]
    Text,
    /// A tag widget anchor
    Widget(WidgetId),
}

impl Focus {
    pub fn is_widget(&self) -> bool {
        matches!(self, Focus::Widget(_))
    }
}
