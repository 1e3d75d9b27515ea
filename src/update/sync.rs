//! Surface synchronizer: canonical value changes -> surface renders

use crate::commands::Cmd;
use crate::lifecycle;
use crate::messages::SyncMsg;
use crate::model::{effective_fallback, EditorModel};
use crate::template::{contains_token, parse};
use crate::widget::{FallbackMap, LabelMap};

/// Handle caller-side messages
pub fn update_sync(model: &mut EditorModel, msg: SyncMsg) -> Option<Cmd> {
    if model.disposed {
        return None;
    }

    match msg {
        SyncMsg::SetValue(value) => set_value(model, value),
        SyncMsg::SetFallbacks(fallbacks) => set_fallbacks(model, fallbacks),
        SyncMsg::SetLabels(labels) => set_labels(model, labels),
        SyncMsg::Settled { generation } => {
            // A later render owns the flag until its own settle arrives
            if generation != model.render_count {
                return None;
            }
            model.updating = false;
            tracing::trace!(generation, "render settled");

            if std::mem::take(&mut model.value_pending) {
                tracing::debug!("rendering value that arrived during reconcile");
                return sync_surface(model);
            }
            None
        }
        SyncMsg::Dispose => {
            let destroyed = lifecycle::teardown(&mut model.surface, &mut model.widgets);
            model.updating = false;
            model.disposed = true;
            tracing::debug!(destroyed, "editor disposed");
            None
        }
    }
}

fn set_value(model: &mut EditorModel, value: String) -> Option<Cmd> {
    if value == model.value {
        return None;
    }
    model.value = value;

    if model.updating {
        tracing::debug!("value changed while reconciling, render deferred to settle");
        model.value_pending = true;
        return None;
    }

    sync_surface(model)
}

/// Bring the surface in line with the stored value, if it is not already
fn sync_surface(model: &mut EditorModel) -> Option<Cmd> {
    if model.surface.segments() == parse(&model.value) {
        tracing::trace!("surface already reflects value");
        return None;
    }

    if contains_token(&model.value) {
        return Some(reconcile(model));
    }

    // No tokens: only reached when the surface disagrees with the value, e.g.
    // the last tag was removed or the caller reset the text.
    model.updating = true;
    model.value_pending = false;
    lifecycle::reset_plain(&mut model.surface, &mut model.widgets, &model.value);
    Some(Cmd::DeferSettle {
        generation: model.render_count,
    })
}

fn set_fallbacks(model: &mut EditorModel, fallbacks: FallbackMap) -> Option<Cmd> {
    let changed = model.rendered_names().into_iter().any(|name| {
        effective_fallback(&model.fallbacks, name) != effective_fallback(&fallbacks, name)
    });
    model.fallbacks = fallbacks;

    if changed {
        tracing::debug!("fallback of a rendered tag changed");
        Some(reconcile(model))
    } else {
        None
    }
}

fn set_labels(model: &mut EditorModel, labels: LabelMap) -> Option<Cmd> {
    let changed = model
        .rendered_names()
        .into_iter()
        .any(|name| model.labels.label_for(name) != labels.label_for(name));
    model.labels = labels;

    if changed {
        tracing::debug!("label of a rendered tag changed");
        Some(reconcile(model))
    } else {
        None
    }
}

/// Programmatic full render guarded by the reentrancy flag.
///
/// The flag is cleared by the `Settled` message one event-loop turn later,
/// not here, so the render's own surface mutation is never read back as a
/// user edit.
fn reconcile(model: &mut EditorModel) -> Cmd {
    model.updating = true;
    model.value_pending = false;
    let generation = model.render();
    Cmd::DeferSettle { generation }
}
