//! Discourse Engine — context-aware English narration for games.
//!
//! Turns structured game events into grammatically correct sentences,
//! deciding per referent whether to use a name, an article-bearing noun
//! phrase, a possessive, or a pronoun based on what the audience
//! already knows and what was said most recently.

pub mod core;
pub mod schema;
