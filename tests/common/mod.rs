//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tagfield::template::{RenderedNode, Segment};
use tagfield::view::{render_surface, ViewOptions};
use tagfield::{TemplateEditor, WidgetId};

/// Events recorded by observers, shared with the test body
pub type Recorded = Rc<RefCell<Vec<String>>>;

/// Editor with `change` and `tokenClicked` recorders attached
pub fn recording_editor(value: &str) -> (TemplateEditor, Recorded, Recorded) {
    let mut editor = TemplateEditor::new(value);
    let changes: Recorded = Rc::default();
    let clicks: Recorded = Rc::default();

    let sink = Rc::clone(&changes);
    editor.on_change(move |v| sink.borrow_mut().push(v.to_string()));
    let sink = Rc::clone(&clicks);
    editor.on_token_clicked(move |name| sink.borrow_mut().push(name.to_string()));

    (editor, changes, clicks)
}

/// Play the caller: push every recorded change back in, then settle
pub fn feed_back(editor: &mut TemplateEditor, changes: &Recorded) {
    let pending: Vec<String> = changes.borrow().clone();
    for value in pending {
        editor.set_value(value);
    }
    editor.run_until_idle();
}

/// Last recorded value
pub fn last(recorded: &Recorded) -> Option<String> {
    recorded.borrow().last().cloned()
}

/// Surface drawn as text, tags in brackets
pub fn view(editor: &TemplateEditor) -> String {
    render_surface(editor.surface(), editor.widgets(), ViewOptions::default())
}

/// Rendered nodes for a segment list, with fresh widget ids
pub fn nodes_for(segments: &[Segment]) -> Vec<RenderedNode> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| match segment {
            Segment::Text { content } => RenderedNode::text(content.as_str()),
            Segment::Variable { name } => RenderedNode::anchor(name.as_str(), WidgetId(i as u64)),
        })
        .collect()
}

/// Widget anchored for `name`, panicking if absent
pub fn widget(editor: &TemplateEditor, name: &str) -> WidgetId {
    editor
        .widget_for(name)
        .unwrap_or_else(|| panic!("no tag for {name}"))
}
