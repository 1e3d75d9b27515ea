//! Caller-facing editor instance.
//!
//! [`TemplateEditor`] owns one [`EditorModel`], runs messages through
//! [`update`], and executes the resulting commands: events go to registered
//! observers, settle notifications are queued for the next event-loop turn.
//!
//! Everything is single-threaded. Messages are processed one at a time in
//! arrival order; [`TemplateEditor::tick`] is the "next turn" of the loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::commands::{Cmd, EditorEvent};
use crate::config::EditorConfig;
use crate::keys::{KeyOutcome, KeyPress};
use crate::messages::{Msg, SurfaceMsg, SyncMsg, TagMsg};
use crate::model::{EditorModel, Phase};
use crate::surface::{Caret, Surface};
use crate::update::update;
use crate::widget::{FallbackMap, LabelMap, WidgetId, WidgetRegistry};

/// Handle returned by observer registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Caller messages posted from inside an observer callback
type Posted = Rc<RefCell<VecDeque<Msg>>>;

/// Cloneable caller-side handle for use inside observer callbacks.
///
/// Observers run while the editor is borrowed, so they cannot call
/// [`TemplateEditor::set_value`] directly. Values posted here are applied as
/// soon as the signal that fired the callback has finished, before control
/// returns to the caller.
#[derive(Debug, Clone)]
pub struct EditorHandle {
    posted: Posted,
}

impl EditorHandle {
    pub fn set_value(&self, value: impl Into<String>) {
        self.posted
            .borrow_mut()
            .push_back(SyncMsg::SetValue(value.into()).into());
    }
}

type Callback = Box<dyn FnMut(&str)>;

/// Registered `change` / `tokenClicked` observers
#[derive(Default)]
struct Observers {
    next_id: u64,
    change: Vec<(SubscriptionId, Callback)>,
    token_clicked: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    fn next(&mut self) -> SubscriptionId {
        self.next_id += 1;
        SubscriptionId(self.next_id)
    }

    fn notify(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::Change(value) => {
                for (_, callback) in &mut self.change {
                    callback(value);
                }
            }
            EditorEvent::TokenClicked(name) => {
                for (_, callback) in &mut self.token_clicked {
                    callback(name);
                }
            }
        }
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.change.len() + self.token_clicked.len();
        self.change.retain(|(sub, _)| *sub != id);
        self.token_clicked.retain(|(sub, _)| *sub != id);
        before != self.change.len() + self.token_clicked.len()
    }

    fn clear(&mut self) {
        self.change.clear();
        self.token_clicked.clear();
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("change", &self.change.len())
            .field("token_clicked", &self.token_clicked.len())
            .finish()
    }
}

/// One template editor bound to its own surface
#[derive(Debug)]
pub struct TemplateEditor {
    model: EditorModel,
    observers: Observers,
    /// Messages for the next event-loop turn
    deferred: VecDeque<Msg>,
    /// Messages posted through an [`EditorHandle`] during the current signal
    posted: Posted,
}

impl TemplateEditor {
    /// Editor with no fallbacks and default labels
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_options(value, FallbackMap::new(), LabelMap::new())
    }

    pub fn with_options(value: impl Into<String>, fallbacks: FallbackMap, labels: LabelMap) -> Self {
        Self {
            model: EditorModel::new(value, fallbacks, labels),
            observers: Observers::default(),
            deferred: VecDeque::new(),
            posted: Posted::default(),
        }
    }

    /// Editor seeded with the labels and default fallbacks from `config`
    pub fn from_config(value: impl Into<String>, config: &EditorConfig) -> Self {
        Self::with_options(value, config.fallbacks.clone(), config.labels.clone())
    }

    // =========================================================================
    // Caller -> core
    // =========================================================================

    /// Push a new canonical value in
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.dispatch(SyncMsg::SetValue(value.into()));
    }

    /// Last canonical value pushed in by the caller
    pub fn value(&self) -> &str {
        &self.model.value
    }

    pub fn set_fallbacks(&mut self, fallbacks: FallbackMap) {
        self.dispatch(SyncMsg::SetFallbacks(fallbacks));
    }

    pub fn set_labels(&mut self, labels: LabelMap) {
        self.dispatch(SyncMsg::SetLabels(labels));
    }

    /// Observe accepted edits; the callback receives the new canonical value
    pub fn on_change(&mut self, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = self.observers.next();
        self.observers.change.push((id, Box::new(callback)));
        id
    }

    /// Observe tag clicks; the callback receives the variable name
    pub fn on_token_clicked(&mut self, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = self.observers.next();
        self.observers.token_clicked.push((id, Box::new(callback)));
        id
    }

    /// Handle that observer callbacks can use to push a value back in
    pub fn handle(&self) -> EditorHandle {
        EditorHandle {
            posted: Rc::clone(&self.posted),
        }
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Tear down all widgets and stop emitting events
    pub fn dispose(&mut self) {
        if self.model.is_disposed() {
            return;
        }
        self.dispatch(SyncMsg::Dispose);
        self.observers.clear();
        self.deferred.clear();
        self.posted.borrow_mut().clear();
    }

    // =========================================================================
    // Surface -> core
    // =========================================================================

    /// The surface content was edited by the user
    pub fn content_changed(&mut self) {
        self.dispatch(SurfaceMsg::ContentChanged);
    }

    /// Raw key-down signal. `Handled` means the default must not run.
    pub fn key_down(&mut self, press: KeyPress) -> KeyOutcome {
        if self.dispatch(SurfaceMsg::KeyDown(press)) {
            KeyOutcome::Handled
        } else {
            KeyOutcome::PassThrough
        }
    }

    /// Full key press: key-down, then default behaviour if not suppressed,
    /// then a content-changed signal if the surface was edited
    pub fn press_key(&mut self, press: KeyPress) -> KeyOutcome {
        let outcome = self.key_down(press.clone());
        if outcome == KeyOutcome::PassThrough
            && !self.model.is_disposed()
            && self.model.surface.apply_default_key(&press)
        {
            self.content_changed();
        }
        outcome
    }

    /// Type `text` at the caret (as if entered or pasted)
    pub fn type_text(&mut self, text: &str) {
        if self.model.is_disposed() || self.model.surface.focus().is_widget() {
            return;
        }
        if self.model.surface.insert_text(text) {
            self.content_changed();
        }
    }

    pub fn focus_widget(&mut self, widget: WidgetId) {
        self.dispatch(SurfaceMsg::FocusWidget(widget));
    }

    pub fn set_caret(&mut self, caret: Caret) {
        self.dispatch(SurfaceMsg::SetCaret(caret));
    }

    /// A tag body was clicked
    pub fn click_token(&mut self, widget: WidgetId) {
        self.dispatch(TagMsg::Click(widget));
    }

    /// A tag's close control was clicked
    pub fn close_token(&mut self, widget: WidgetId) {
        self.dispatch(TagMsg::Close(widget));
    }

    /// Direct access to the mount point for hosts that apply their own edits.
    /// Call [`TemplateEditor::content_changed`] afterwards.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.model.surface
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// Run one event-loop turn: process the messages queued before this call.
    /// Returns how many were processed.
    pub fn tick(&mut self) -> usize {
        let pending: Vec<Msg> = self.deferred.drain(..).collect();
        let count = pending.len();
        for msg in pending {
            self.dispatch(msg);
        }
        count
    }

    /// Tick until nothing is queued
    pub fn run_until_idle(&mut self) {
        while !self.deferred.is_empty() {
            self.tick();
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.deferred.is_empty()
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn surface(&self) -> &Surface {
        &self.model.surface
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.model.widgets
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn fallbacks(&self) -> &FallbackMap {
        &self.model.fallbacks
    }

    pub fn labels(&self) -> &LabelMap {
        &self.model.labels
    }

    pub fn phase(&self) -> Phase {
        self.model.phase()
    }

    pub fn is_reconciling(&self) -> bool {
        self.model.is_reconciling()
    }

    pub fn is_disposed(&self) -> bool {
        self.model.is_disposed()
    }

    pub fn render_count(&self) -> u64 {
        self.model.render_count()
    }

    pub fn live_widget_count(&self) -> usize {
        self.model.widgets.live_count()
    }

    /// Widget anchored at the `index`-th anchor of the surface
    pub fn widget_at(&self, index: usize) -> Option<WidgetId> {
        self.model.surface.anchored_widgets().get(index).copied()
    }

    /// First anchored widget for variable `name`
    pub fn widget_for(&self, name: &str) -> Option<WidgetId> {
        self.model
            .surface
            .nodes()
            .iter()
            .find(|node| node.variable_name() == Some(name))
            .and_then(|node| node.widget())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Run one message through `update`, execute the result, then apply
    /// anything observers posted meanwhile. Returns true if the default
    /// behaviour was prevented.
    fn dispatch(&mut self, msg: impl Into<Msg>) -> bool {
        let prevented = self.run(msg.into());
        loop {
            let next = self.posted.borrow_mut().pop_front();
            match next {
                Some(msg) => {
                    self.run(msg);
                }
                None => break,
            }
        }
        prevented
    }

    fn run(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => self.execute(cmd),
            None => false,
        }
    }

    fn execute(&mut self, cmd: Cmd) -> bool {
        match cmd {
            Cmd::None => false,
            Cmd::Emit(event) => {
                if !self.model.is_disposed() {
                    self.observers.notify(&event);
                }
                false
            }
            Cmd::DeferSettle { generation } => {
                self.deferred
                    .push_back(Msg::Sync(SyncMsg::Settled { generation }));
                false
            }
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds
                .into_iter()
                .fold(false, |prevented, cmd| self.execute(cmd) || prevented),
        }
    }
}

impl Drop for TemplateEditor {
    fn drop(&mut self) {
        self.dispose();
    }
}
