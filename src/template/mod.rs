//! Canonical template handling.
//!
//! A canonical value is a plain string where `{{name}}` marks a placeholder.
//! This module converts between that string and two structured views:
//!
//! - [`Segment`]: the parsed form (literal text or a variable reference)
//! - [`RenderedNode`]: the form held by the editable surface (text or widget anchor)
//!
//! Parsing never fails. Anything that is not a well-formed `{{word}}` token
//! stays literal text.

mod node;
mod segment;

pub use node::{remove_token, segments_of, serialize, RenderedNode};
pub use segment::{contains_token, find_tokens, parse, token_for, Segment, TokenMatch};
