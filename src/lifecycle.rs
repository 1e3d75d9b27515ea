//! Widget lifecycle: full teardown-and-rebuild of the surface from a value.
//!
//! Every render pass destroys all tracked widgets, clears the mount point,
//! and rebuilds it from a fresh parse. There is no incremental diffing, so a
//! widget can never survive into a render pass it was not created by.

use crate::surface::Surface;
use crate::template::{parse, RenderedNode, Segment};
use crate::widget::{FallbackMap, LabelMap, TagConfig, WidgetRegistry};

/// Rebuild `surface` from `value`, returning how many tags were mounted.
///
/// The caret ends up after the last node.
pub fn render(
    surface: &mut Surface,
    widgets: &mut WidgetRegistry,
    value: &str,
    fallbacks: &FallbackMap,
    labels: &LabelMap,
) -> usize {
    let destroyed = widgets.destroy_all();
    surface.clear();

    let mut mounted = 0;
    for segment in parse(value) {
        match segment {
            Segment::Text { content } => surface.append(RenderedNode::Text(content)),
            Segment::Variable { name } => {
                let id = widgets.mount(TagConfig {
                    label: labels.label_for(&name),
                    fallback: fallbacks.get(&name).cloned(),
                    closable: true,
                    name: name.clone(),
                });
                surface.append(RenderedNode::anchor(name, id));
                mounted += 1;
            }
        }
    }
    surface.move_to_end();

    tracing::debug!(destroyed, mounted, nodes = surface.len(), "surface rendered");
    mounted
}

/// Replace the surface with plain text, destroying any mounted tags
pub fn reset_plain(surface: &mut Surface, widgets: &mut WidgetRegistry, value: &str) {
    let destroyed = widgets.destroy_all();
    surface.reset_text(value);
    tracing::debug!(destroyed, "surface reset to plain text");
}

/// Destroy every tracked widget and detach all nodes
pub fn teardown(surface: &mut Surface, widgets: &mut WidgetRegistry) -> usize {
    let destroyed = widgets.destroy_all();
    surface.clear();
    destroyed
}
