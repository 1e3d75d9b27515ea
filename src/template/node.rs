//! Rendered nodes and the serializer that turns them back into a canonical string.

use super::segment::{token_for, Segment};
use crate::widget::WidgetId;

/// A node held by the editable surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedNode {
    /// Plain editable text
    Text(String),
    /// Non-editable anchor for a mounted tag widget
    Anchor {
        /// Variable name this anchor stands for
        name: String,
        /// Widget instance mounted at this anchor
        widget: WidgetId,
    },
}

impl RenderedNode {
    pub fn text(content: impl Into<String>) -> Self {
        RenderedNode::Text(content.into())
    }

    pub fn anchor(name: impl Into<String>, widget: WidgetId) -> Self {
        RenderedNode::Anchor {
            name: name.into(),
            widget,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, RenderedNode::Anchor { .. })
    }

    /// Variable name for anchors, `None` for text
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            RenderedNode::Anchor { name, .. } => Some(name),
            RenderedNode::Text(_) => None,
        }
    }

    /// Widget mounted at this node, `None` for text
    pub fn widget(&self) -> Option<WidgetId> {
        match self {
            RenderedNode::Anchor { widget, .. } => Some(*widget),
            RenderedNode::Text(_) => None,
        }
    }
}

/// Rebuild a canonical string from nodes in document order.
///
/// Text contributes its content verbatim, anchors contribute `{{name}}`.
pub fn serialize(nodes: &[RenderedNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            RenderedNode::Text(content) => out.push_str(content),
            RenderedNode::Anchor { name, .. } => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
    }
    out
}

/// Segment view of the nodes as they sit on the surface.
///
/// Adjacent text nodes are merged and empty ones dropped. Text is NOT
/// re-parsed, so a literal `{{name}}` typed into a text node stays text here.
/// Comparing this against `parse(value)` tells whether the surface already
/// reflects a canonical value structurally.
pub fn segments_of(nodes: &[RenderedNode]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            RenderedNode::Text(content) if content.is_empty() => {}
            RenderedNode::Text(content) => match segments.last_mut() {
                Some(Segment::Text { content: prev }) => prev.push_str(content),
                _ => segments.push(Segment::text(content.as_str())),
            },
            RenderedNode::Anchor { name, .. } => segments.push(Segment::variable(name.as_str())),
        }
    }
    segments
}

/// Remove every `{{name}}` occurrence from `value`.
///
/// Surrounding whitespace is left untouched.
pub fn remove_token(value: &str, name: &str) -> String {
    value.replace(&token_for(name), "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse;

    fn anchor(name: &str, id: u64) -> RenderedNode {
        RenderedNode::anchor(name, WidgetId(id))
    }

    #[test]
    fn test_serialize_mixed_nodes() {
        let nodes = vec![
            RenderedNode::text("Hi "),
            anchor("firstName", 1),
            RenderedNode::text(", bye "),
            anchor("lastName", 2),
        ];
        assert_eq!(serialize(&nodes), "Hi {{firstName}}, bye {{lastName}}");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn test_segments_of_merges_split_text() {
        let nodes = vec![
            RenderedNode::text("ab"),
            RenderedNode::text(""),
            RenderedNode::text("c"),
            anchor("x", 1),
        ];
        assert_eq!(
            segments_of(&nodes),
            vec![Segment::text("abc"), Segment::variable("x")]
        );
    }

    #[test]
    fn test_segments_of_does_not_reparse_literal_token() {
        let nodes = vec![RenderedNode::text("hello {{name}}")];
        assert_ne!(segments_of(&nodes), parse("hello {{name}}"));
    }

    #[test]
    fn test_remove_token_is_global_and_keeps_spaces() {
        assert_eq!(
            remove_token("Hi {{firstName}} {{lastName}}", "firstName"),
            "Hi  {{lastName}}"
        );
        assert_eq!(remove_token("{{a}} and {{a}}", "a"), " and ");
    }

    #[test]
    fn test_remove_token_ignores_prefix_names() {
        assert_eq!(remove_token("{{ab}}{{a}}", "a"), "{{ab}}");
    }
}
