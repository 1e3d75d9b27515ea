//! Human labels for variable names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only mapping from variable name to display label.
///
/// Names without an entry are rendered with [`to_title_case`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap {
    labels: HashMap<String, String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a label, builder style
    pub fn with(mut self, name: impl Into<String>, label: impl Into<String>) -> Self {
        self.insert(name, label);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(name.into(), label.into());
    }

    /// Explicit label for `name`, if one was configured
    pub fn get(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    /// Display label for `name`
    pub fn label_for(&self, name: &str) -> String {
        match self.get(name) {
            Some(label) => label.to_string(),
            None => to_title_case(name),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<HashMap<String, String>> for LabelMap {
    fn from(labels: HashMap<String, String>) -> Self {
        Self { labels }
    }
}

/// Convert a camelCase name to "Title Case".
///
/// A space goes before every uppercase ASCII letter, the first character is
/// uppercased, and the result is trimmed.
pub fn to_title_case(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.chars();
    let titled = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    titled.trim().to_string()
}
