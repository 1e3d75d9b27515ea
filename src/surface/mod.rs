//! The editable surface: the mount point that tags are rendered into.
//!
//! The surface is an ordered list of [`RenderedNode`]s plus a caret and a
//! focus target. It knows how a content-editable region behaves by default
//! (typing, backspace, delete, caret movement) but nothing about canonical
//! values; the editor reads it back through the serializer.
//!
//! # Caret model
//!
//! The caret is a gap index over *atoms*: every character of a text node is
//! one atom and every anchor is one atom. Deleting the atom before the caret
//! therefore removes a whole anchor in one step, the same way a browser
//! removes a non-editable span.

mod caret;

pub use caret::{Caret, Focus};

use crate::keys::{Key, KeyPress};
use crate::template::{segments_of, serialize, RenderedNode, Segment};
use crate::widget::WidgetId;

/// Where an atom index lands inside the node list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// Inside (or at either edge of) a text node, as a char offset
    InText { node: usize, offset: usize },
    /// Between nodes, before node `index` (`index == len` means the end)
    Gap(usize),
}

/// An atom addressed by index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Char { node: usize, offset: usize },
    Anchor { node: usize },
}

/// Ordered node tree of one editor instance
#[derive(Debug, Clone, Default)]
pub struct Surface {
    nodes: Vec<RenderedNode>,
    caret: Caret,
    focus: Focus,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface holding a single text node (nothing for empty text)
    pub fn with_text(text: &str) -> Self {
        let mut surface = Self::new();
        surface.reset_text(text);
        surface
    }

    pub fn from_nodes(nodes: Vec<RenderedNode>) -> Self {
        let mut surface = Self {
            nodes,
            ..Self::default()
        };
        surface.normalize();
        surface
    }

    pub fn nodes(&self) -> &[RenderedNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn caret(&self) -> Caret {
        self.caret
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    // =========================================================================
    // Mount point operations (used by the render pass)
    // =========================================================================

    /// Detach every node; caret and focus go back to the start
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.caret = Caret::default();
        self.focus = Focus::Text;
    }

    /// Append a node in document order
    pub fn append(&mut self, node: RenderedNode) {
        self.nodes.push(node);
    }

    /// Replace everything with one plain text node
    pub fn reset_text(&mut self, text: &str) {
        self.clear();
        if !text.is_empty() {
            self.nodes.push(RenderedNode::text(text));
        }
        self.caret = Caret(self.atom_len());
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Whether any child is a widget anchor
    pub fn has_anchors(&self) -> bool {
        self.nodes.iter().any(RenderedNode::is_anchor)
    }

    /// Concatenated content of the text nodes only
    pub fn text_content(&self) -> String {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                RenderedNode::Text(content) => Some(content.as_str()),
                RenderedNode::Anchor { .. } => None,
            })
            .collect()
    }

    /// Canonical string for the current nodes
    pub fn serialize(&self) -> String {
        serialize(&self.nodes)
    }

    /// Structural segment view, see [`segments_of`]
    pub fn segments(&self) -> Vec<Segment> {
        segments_of(&self.nodes)
    }

    /// Index of the anchor holding `widget`
    pub fn anchor_index(&self, widget: WidgetId) -> Option<usize> {
        self.nodes.iter().position(|n| n.widget() == Some(widget))
    }

    /// Variable name of the anchor holding `widget`
    pub fn anchor_name(&self, widget: WidgetId) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.widget() == Some(widget))
            .and_then(RenderedNode::variable_name)
    }

    /// Widgets currently anchored, in document order
    pub fn anchored_widgets(&self) -> Vec<WidgetId> {
        self.nodes.iter().filter_map(RenderedNode::widget).collect()
    }

    /// Total number of caret-addressable atoms
    pub fn atom_len(&self) -> usize {
        self.nodes.iter().map(atom_width).sum()
    }

    /// The anchor that currently has keyboard focus, if any
    pub fn focused_anchor(&self) -> Option<(WidgetId, &str)> {
        match self.focus {
            Focus::Widget(id) => self.anchor_name(id).map(|name| (id, name)),
            Focus::Text => None,
        }
    }

    // =========================================================================
    // Focus and caret
    // =========================================================================

    /// Give keyboard focus to an anchored widget. Returns false if it is not
    /// on the surface.
    pub fn focus_widget(&mut self, widget: WidgetId) -> bool {
        if self.anchor_index(widget).is_none() {
            return false;
        }
        self.focus = Focus::Widget(widget);
        true
    }

    /// Return focus to the editable text
    pub fn focus_text(&mut self) {
        self.focus = Focus::Text;
    }

    /// Place the caret, clamped to the content
    pub fn set_caret(&mut self, caret: Caret) {
        self.caret = Caret(caret.0.min(self.atom_len()));
        self.focus = Focus::Text;
    }

    pub fn move_left(&mut self) {
        let target = match self.focus {
            Focus::Widget(id) => self.atom_start_of(id).unwrap_or(self.caret.0),
            Focus::Text => self.caret.0.saturating_sub(1),
        };
        self.set_caret(Caret(target));
    }

    pub fn move_right(&mut self) {
        let target = match self.focus {
            Focus::Widget(id) => self
                .atom_start_of(id)
                .map(|start| start + 1)
                .unwrap_or(self.caret.0),
            Focus::Text => self.caret.0 + 1,
        };
        self.set_caret(Caret(target));
    }

    pub fn move_to_start(&mut self) {
        self.set_caret(Caret(0));
    }

    pub fn move_to_end(&mut self) {
        self.set_caret(Caret(self.atom_len()));
    }

    // =========================================================================
    // Default editing behaviour
    // =========================================================================

    /// Apply what the editable region does on its own for `key`.
    ///
    /// Returns true if the content changed. Nothing is typed while an anchor
    /// holds focus, since anchors are not editable.
    pub fn apply_default_key(&mut self, press: &KeyPress) -> bool {
        match &press.key {
            Key::Left => {
                self.move_left();
                false
            }
            Key::Right => {
                self.move_right();
                false
            }
            Key::Home => {
                self.move_to_start();
                false
            }
            Key::End => {
                self.move_to_end();
                false
            }
            _ if self.focus != Focus::Text => false,
            Key::Char(ch) => self.insert_text(ch.encode_utf8(&mut [0; 4])),
            Key::Enter => self.insert_text("\n"),
            Key::Backspace => self.delete_backward(),
            Key::Delete => self.delete_forward(),
            Key::Escape | Key::Tab | Key::Other(_) => false,
        }
    }

    /// Insert `text` at the caret and move the caret past it
    pub fn insert_text(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.locate(self.caret.0) {
            Location::InText { node, offset } => {
                if let RenderedNode::Text(content) = &mut self.nodes[node] {
                    let byte = byte_offset(content, offset);
                    content.insert_str(byte, text);
                }
            }
            Location::Gap(index) => {
                self.nodes.insert(index, RenderedNode::text(text));
            }
        }
        self.caret = Caret(self.caret.0 + text.chars().count());
        self.focus = Focus::Text;
        self.normalize();
        true
    }

    /// Remove the atom before the caret (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.caret.0 == 0 {
            return false;
        }
        let removed = self.remove_atom(self.caret.0 - 1);
        if removed {
            self.caret = Caret(self.caret.0 - 1);
        }
        removed
    }

    /// Remove the atom after the caret (Delete)
    pub fn delete_forward(&mut self) -> bool {
        if self.caret.0 >= self.atom_len() {
            return false;
        }
        self.remove_atom(self.caret.0)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn remove_atom(&mut self, index: usize) -> bool {
        match self.atom_at(index) {
            Some(Atom::Char { node, offset }) => {
                if let RenderedNode::Text(content) = &mut self.nodes[node] {
                    let start = byte_offset(content, offset);
                    let end = byte_offset(content, offset + 1);
                    content.replace_range(start..end, "");
                }
            }
            Some(Atom::Anchor { node }) => {
                let removed = self.nodes.remove(node);
                tracing::debug!(
                    name = removed.variable_name().unwrap_or_default(),
                    "anchor removed by default deletion"
                );
                if let (Focus::Widget(focused), Some(widget)) = (self.focus, removed.widget()) {
                    if focused == widget {
                        self.focus = Focus::Text;
                    }
                }
            }
            None => return false,
        }
        self.normalize();
        true
    }

    /// Merge adjacent text nodes and drop empty ones
    fn normalize(&mut self) {
        let mut merged: Vec<RenderedNode> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.drain(..) {
            match node {
                RenderedNode::Text(content) if content.is_empty() => {}
                RenderedNode::Text(content) => match merged.last_mut() {
                    Some(RenderedNode::Text(prev)) => prev.push_str(&content),
                    _ => merged.push(RenderedNode::Text(content)),
                },
                anchor => merged.push(anchor),
            }
        }
        self.nodes = merged;
    }

    fn locate(&self, caret: usize) -> Location {
        let mut acc = 0;
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                RenderedNode::Text(content) => {
                    let len = content.chars().count();
                    if caret <= acc + len {
                        return Location::InText {
                            node: index,
                            offset: caret - acc,
                        };
                    }
                    acc += len;
                }
                RenderedNode::Anchor { .. } => {
                    if caret == acc {
                        return Location::Gap(index);
                    }
                    acc += 1;
                }
            }
        }
        Location::Gap(self.nodes.len())
    }

    fn atom_at(&self, index: usize) -> Option<Atom> {
        let mut acc = 0;
        for (node, item) in self.nodes.iter().enumerate() {
            let width = atom_width(item);
            if index < acc + width {
                return Some(match item {
                    RenderedNode::Text(_) => Atom::Char {
                        node,
                        offset: index - acc,
                    },
                    RenderedNode::Anchor { .. } => Atom::Anchor { node },
                });
            }
            acc += width;
        }
        None
    }

    /// Atom index of the anchor holding `widget`
    fn atom_start_of(&self, widget: WidgetId) -> Option<usize> {
        let node = self.anchor_index(widget)?;
        Some(self.nodes[..node].iter().map(atom_width).sum())
    }
}

/// True when the hint text should be shown for `value` (blank input)
pub fn placeholder_visible(value: &str) -> bool {
    value.trim().is_empty()
}

fn atom_width(node: &RenderedNode) -> usize {
    match node {
        RenderedNode::Text(content) => content.chars().count(),
        RenderedNode::Anchor { .. } => 1,
    }
}

fn byte_offset(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
