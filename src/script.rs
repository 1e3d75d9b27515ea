//! Scripted interaction replay.
//!
//! A script is a YAML (or JSON) list of steps applied to a [`TemplateEditor`]
//! in order. The runner plays the caller's part too: every emitted `change`
//! is pushed back in with `set_value`, the way an application shell would
//! store the new value and re-render the editor with it.
//!
//! ```yaml
//! - type: "Hi {{firstName}}"
//! - tick
//! - click: firstName
//! - key: Backspace
//! - close: 0
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::commands::EditorEvent;
use crate::keys::{Key, KeyPress};
use crate::runtime::TemplateEditor;
use crate::surface::Caret;
use crate::view::{render_surface, ViewOptions};
use crate::widget::WidgetId;

/// Reference to a tag on the surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenRef {
    /// n-th anchor in document order
    Index(usize),
    /// First anchor for this variable name
    Name(String),
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenRef::Index(i) => write!(f, "#{}", i),
            TokenRef::Name(name) => write!(f, "{}", name),
        }
    }
}

/// One scripted interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Type text at the caret
    Type(String),
    /// Press a key (default behaviour applies unless suppressed)
    Key(Key),
    /// Click a tag body
    Click(TokenRef),
    /// Click a tag's close control
    Close(TokenRef),
    /// Give a tag keyboard focus
    Focus(TokenRef),
    /// Move the caret to an atom index
    Caret(usize),
    /// Push a value in from the caller side
    SetValue(String),
    /// Set one fallback value
    Fallback { name: String, value: String },
    /// Advance the event loop one turn
    Tick,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Type(text) => write!(f, "type {:?}", text),
            Step::Key(key) => write!(f, "key {}", key),
            Step::Click(token) => write!(f, "click {}", token),
            Step::Close(token) => write!(f, "close {}", token),
            Step::Focus(token) => write!(f, "focus {}", token),
            Step::Caret(at) => write!(f, "caret {}", at),
            Step::SetValue(value) => write!(f, "set_value {:?}", value),
            Step::Fallback { name, value } => write!(f, "fallback {}={:?}", name, value),
            Step::Tick => write!(f, "tick"),
        }
    }
}

/// What happened during one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: String,
    pub changes: Vec<String>,
    pub clicked: Vec<String>,
    pub value: String,
    pub view: String,
}

/// Parse a script from YAML (JSON is valid YAML)
pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    serde_yaml::from_str(source).context("Failed to parse script")
}

/// Runs steps against one editor, acting as its caller
pub struct ScriptRunner {
    editor: TemplateEditor,
    events: Rc<RefCell<Vec<EditorEvent>>>,
    feedback: bool,
}

impl fmt::Debug for ScriptRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptRunner")
            .field("editor", &self.editor)
            .field("feedback", &self.feedback)
            .finish()
    }
}

impl ScriptRunner {
    pub fn new(mut editor: TemplateEditor) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&events);
        editor.on_change(move |value| {
            sink.borrow_mut()
                .push(EditorEvent::Change(value.to_string()))
        });
        let sink = Rc::clone(&events);
        editor.on_token_clicked(move |name| {
            sink.borrow_mut()
                .push(EditorEvent::TokenClicked(name.to_string()))
        });

        Self {
            editor,
            events,
            feedback: true,
        }
    }

    /// Whether emitted changes are pushed back with `set_value` (default on)
    pub fn with_feedback(mut self, feedback: bool) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn editor(&self) -> &TemplateEditor {
        &self.editor
    }

    /// Apply every step, collecting a report per step
    pub fn run(&mut self, steps: &[Step]) -> Result<Vec<StepReport>> {
        steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                self.apply(step)
                    .with_context(|| format!("Step {} ({}) failed", i + 1, step))
            })
            .collect()
    }

    /// Apply a single step
    pub fn apply(&mut self, step: &Step) -> Result<StepReport> {
        tracing::debug!(%step, "applying script step");
        match step {
            Step::Type(text) => self.editor.type_text(text),
            Step::Key(key) => {
                self.editor.press_key(KeyPress::new(key.clone()));
            }
            Step::Click(token) => {
                let widget = self.resolve(token)?;
                self.editor.click_token(widget);
            }
            Step::Close(token) => {
                let widget = self.resolve(token)?;
                self.editor.close_token(widget);
            }
            Step::Focus(token) => {
                let widget = self.resolve(token)?;
                self.editor.focus_widget(widget);
            }
            Step::Caret(at) => self.editor.set_caret(Caret(*at)),
            Step::SetValue(value) => self.editor.set_value(value.as_str()),
            Step::Fallback { name, value } => {
                let mut fallbacks = self.editor.fallbacks().clone();
                fallbacks.insert(name.clone(), value.clone());
                self.editor.set_fallbacks(fallbacks);
            }
            Step::Tick => {
                self.editor.tick();
            }
        }

        let emitted: Vec<EditorEvent> = self.events.borrow_mut().drain(..).collect();
        let mut report = StepReport {
            step: step.to_string(),
            changes: Vec::new(),
            clicked: Vec::new(),
            value: String::new(),
            view: String::new(),
        };
        for event in emitted {
            match event {
                EditorEvent::Change(value) => {
                    if self.feedback {
                        self.editor.set_value(value.as_str());
                    }
                    report.changes.push(value);
                }
                EditorEvent::TokenClicked(name) => report.clicked.push(name),
            }
        }

        report.value = self.editor.value().to_string();
        report.view = render_surface(
            self.editor.surface(),
            self.editor.widgets(),
            ViewOptions { show_caret: true },
        );
        Ok(report)
    }

    fn resolve(&self, token: &TokenRef) -> Result<WidgetId> {
        let widget = match token {
            TokenRef::Index(i) => self.editor.widget_at(*i),
            TokenRef::Name(name) => self.editor.widget_for(name),
        };
        match widget {
            Some(widget) => Ok(widget),
            None => bail!("No tag {} on the surface", token),
        }
    }
}
