//! Edit command handler: surface signals and tag events -> canonical changes

use crate::commands::Cmd;
use crate::keys::KeyPress;
use crate::messages::{SurfaceMsg, TagMsg};
use crate::model::EditorModel;
use crate::template::remove_token;
use crate::widget::WidgetId;

/// Handle raw signals from the editable surface
pub fn update_surface(model: &mut EditorModel, msg: SurfaceMsg) -> Option<Cmd> {
    if model.disposed {
        return None;
    }

    match msg {
        SurfaceMsg::ContentChanged => content_changed(model),
        SurfaceMsg::KeyDown(press) => key_down(model, &press),
        SurfaceMsg::FocusWidget(widget) => {
            if !model.surface.focus_widget(widget) {
                tracing::trace!(%widget, "focus request for widget not on surface");
            }
            None
        }
        SurfaceMsg::SetCaret(caret) => {
            model.surface.set_caret(caret);
            None
        }
    }
}

/// Handle events raised by tag widgets
pub fn update_tag(model: &mut EditorModel, msg: TagMsg) -> Option<Cmd> {
    if model.disposed {
        return None;
    }

    match msg {
        TagMsg::Click(widget) => {
            let name = widget_name(model, widget)?;
            tracing::debug!(%widget, name, "tag clicked");
            Some(Cmd::token_clicked(name))
        }
        TagMsg::Close(widget) => {
            let name = widget_name(model, widget)?.to_string();
            tracing::debug!(%widget, name, "tag closed");
            remove_variable(model, &name)
        }
    }
}

/// Read the surface back into a canonical value and report it if it differs
fn content_changed(model: &mut EditorModel) -> Option<Cmd> {
    if model.updating {
        tracing::trace!("content change during reconcile ignored");
        return None;
    }

    let new_value = if model.surface.has_anchors() {
        model.surface.serialize()
    } else {
        model.surface.text_content()
    };

    if new_value == model.value {
        return None;
    }
    tracing::trace!(value = %new_value, "surface edited");
    Some(Cmd::change(new_value))
}

/// Backspace/Delete on a focused tag removes that variable; everything else
/// passes through to the surface's default behaviour
fn key_down(model: &mut EditorModel, press: &KeyPress) -> Option<Cmd> {
    if !press.key.is_deletion() {
        return None;
    }
    let (_, name) = model.surface.focused_anchor()?;
    let name = name.to_string();

    let mut cmds = vec![Cmd::PreventDefault];
    cmds.extend(remove_variable(model, &name));
    Some(Cmd::Batch(cmds))
}

/// Remove every `{{name}}` from the stored value, emitting the result
fn remove_variable(model: &EditorModel, name: &str) -> Option<Cmd> {
    let new_value = remove_token(&model.value, name);
    if new_value == model.value {
        return None;
    }
    Some(Cmd::change(new_value))
}

/// Variable name for a widget that is still anchored on the surface
fn widget_name(model: &EditorModel, widget: WidgetId) -> Option<&str> {
    let name = model.surface.anchor_name(widget);
    if name.is_none() {
        tracing::trace!(%widget, "event from widget that is no longer anchored");
    }
    name
}
