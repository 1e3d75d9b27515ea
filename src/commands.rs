//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them: events go to observers, deferred messages go
//! to the next event-loop turn.

/// Notifications delivered to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// An edit was accepted; carries the new canonical value
    Change(String),
    /// A tag was clicked; carries its variable name
    TokenClicked(String),
}

/// Side effects produced by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Deliver an event to registered observers
    Emit(EditorEvent),
    /// Send `Settled { generation }` on the next event-loop turn
    DeferSettle { generation: u64 },
    /// Suppress the surface's default behaviour for the current key
    PreventDefault,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn change(value: impl Into<String>) -> Self {
        Cmd::Emit(EditorEvent::Change(value.into()))
    }

    pub fn token_clicked(name: impl Into<String>) -> Self {
        Cmd::Emit(EditorEvent::TokenClicked(name.into()))
    }

    /// Whether this command (or any batched child) prevents the default
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::prevents_default),
            _ => false,
        }
    }

    /// Events carried by this command, in order
    pub fn events(&self) -> Vec<&EditorEvent> {
        match self {
            Cmd::Emit(event) => vec![event],
            Cmd::Batch(cmds) => cmds.iter().flat_map(Cmd::events).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prevents_default_in_batch() {
        let cmd = Cmd::Batch(vec![Cmd::PreventDefault, Cmd::change("x")]);
        assert!(cmd.prevents_default());
        assert!(!Cmd::change("x").prevents_default());
    }

    #[test]
    fn test_events_flatten_batches() {
        let cmd = Cmd::Batch(vec![
            Cmd::change("a"),
            Cmd::Batch(vec![Cmd::token_clicked("b")]),
            Cmd::DeferSettle { generation: 1 },
        ]);
        assert_eq!(
            cmd.events(),
            vec![
                &EditorEvent::Change("a".to_string()),
                &EditorEvent::TokenClicked("b".to_string()),
            ]
        );
    }
}
