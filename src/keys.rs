//! Key input types delivered to the surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A logical key, independent of any windowing backend
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// Printable character
    Char(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Left,
    Right,
    Home,
    End,
    /// Anything else, by name (passed through untouched)
    Other(String),
}

impl Key {
    /// Backspace or Delete
    pub fn is_deletion(&self) -> bool {
        matches!(self, Key::Backspace | Key::Delete)
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Ok(Key::Char(ch));
        }

        let key = match s.to_ascii_lowercase().as_str() {
            "" => return Err("empty key name".to_string()),
            "backspace" => Key::Backspace,
            "delete" | "del" => Key::Delete,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "space" => Key::Char(' '),
            _ => Key::Other(s.to_string()),
        };
        Ok(key)
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "Space"),
            Key::Char(ch) => write!(f, "{}", ch),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Escape => write!(f, "Escape"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
            Key::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A key press as seen by the surface
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// What the editor did with a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Default behaviour was suppressed and the key was consumed
    Handled,
    /// The surface should apply its default behaviour
    PassThrough,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!("Backspace".parse::<Key>(), Ok(Key::Backspace));
        assert_eq!("delete".parse::<Key>(), Ok(Key::Delete));
        assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::Left));
        assert_eq!("space".parse::<Key>(), Ok(Key::Char(' ')));
    }

    #[test]
    fn test_parse_single_char() {
        assert_eq!("x".parse::<Key>(), Ok(Key::Char('x')));
        assert_eq!("é".parse::<Key>(), Ok(Key::Char('é')));
    }

    #[test]
    fn test_parse_unknown_is_other() {
        assert_eq!("F5".parse::<Key>(), Ok(Key::Other("F5".to_string())));
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_is_deletion() {
        assert!(Key::Backspace.is_deletion());
        assert!(Key::Delete.is_deletion());
        assert!(!Key::Char('d').is_deletion());
    }

    #[test]
    fn test_display_round_trips() {
        for key in [Key::Backspace, Key::Char(' '), Key::Char('q'), Key::End] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }
}
