//! Plain-text presentation of a surface.
//!
//! Text nodes are printed verbatim and each anchor is drawn as its tag,
//! e.g. `Hi [First Name | there ×]!`.

use crate::surface::{placeholder_visible, Focus, Surface};
use crate::template::RenderedNode;
use crate::widget::{WidgetRegistry, CLOSE_GLYPH};

/// Presentation switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Draw `|` at the caret when text has focus
    pub show_caret: bool,
}

/// Draw the surface as a single line of text
pub fn render_surface(surface: &Surface, widgets: &WidgetRegistry, options: ViewOptions) -> String {
    let caret = match surface.focus() {
        Focus::Text if options.show_caret => Some(surface.caret().0),
        _ => None,
    };

    let mut out = String::new();
    let mut atom = 0;
    for node in surface.nodes() {
        match node {
            RenderedNode::Text(content) => {
                for ch in content.chars() {
                    if caret == Some(atom) {
                        out.push('|');
                    }
                    out.push(ch);
                    atom += 1;
                }
            }
            RenderedNode::Anchor { name, widget } => {
                if caret == Some(atom) {
                    out.push('|');
                }
                let focused = surface.focus() == Focus::Widget(*widget);
                out.push_str(&render_tag(name, widgets.get(*widget), focused));
                atom += 1;
            }
        }
    }
    if caret == Some(atom) {
        out.push('|');
    }
    out
}

/// Like [`render_surface`], but shows `placeholder` for a blank value
pub fn render_with_placeholder(
    surface: &Surface,
    widgets: &WidgetRegistry,
    value: &str,
    placeholder: &str,
    options: ViewOptions,
) -> String {
    if placeholder_visible(value) && surface.serialize().trim().is_empty() {
        return format!("({})", placeholder);
    }
    render_surface(surface, widgets, options)
}

fn render_tag(name: &str, widget: Option<&crate::widget::TagWidget>, focused: bool) -> String {
    let (open, close) = if focused { ('<', '>') } else { ('[', ']') };
    match widget {
        Some(widget) if widget.is_closable() => {
            format!("{}{} {}{}", open, widget.display_text(), CLOSE_GLYPH, close)
        }
        Some(widget) => format!("{}{}{}", open, widget.display_text(), close),
        // Anchor whose widget is gone: show the raw token
        None => format!("{{{{{}}}}}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::render;
    use crate::surface::Caret;
    use crate::widget::{FallbackMap, LabelMap};

    fn rendered(value: &str, fallbacks: &FallbackMap) -> (Surface, WidgetRegistry) {
        let mut surface = Surface::new();
        let mut widgets = WidgetRegistry::new();
        render(&mut surface, &mut widgets, value, fallbacks, &LabelMap::new());
        (surface, widgets)
    }

    #[test]
    fn test_render_tags() {
        let mut fallbacks = FallbackMap::new();
        fallbacks.insert("firstName".to_string(), "there".to_string());
        let (surface, widgets) = rendered("Hi {{firstName}}!", &fallbacks);
        assert_eq!(
            render_surface(&surface, &widgets, ViewOptions::default()),
            "Hi [First Name | there ×]!"
        );
    }

    #[test]
    fn test_render_caret() {
        let (mut surface, widgets) = rendered("ab{{x}}", &FallbackMap::new());
        surface.set_caret(Caret(1));
        let options = ViewOptions { show_caret: true };
        assert_eq!(render_surface(&surface, &widgets, options), "a|b[X ×]");
    }

    #[test]
    fn test_render_focused_tag() {
        let (mut surface, widgets) = rendered("{{x}}", &FallbackMap::new());
        let id = surface.anchored_widgets()[0];
        surface.focus_widget(id);
        assert_eq!(
            render_surface(&surface, &widgets, ViewOptions { show_caret: true }),
            "<X ×>"
        );
    }

    #[test]
    fn test_placeholder_for_blank_value() {
        let surface = Surface::new();
        let widgets = WidgetRegistry::new();
        assert_eq!(
            render_with_placeholder(&surface, &widgets, "", "type here", ViewOptions::default()),
            "(type here)"
        );
    }
}
