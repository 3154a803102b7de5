//! # astrid-core
//!
//! Core types for the astrid life organizer: transcript [`ChatMessage`] and [`Sender`],
//! the per-session [`ConversationContext`], error types, and tracing initialization.
//! Transport-agnostic; used by the responder, the records stores, and the app shell.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{AstridError, Result};
pub use logger::init_tracing;
pub use types::{ChatMessage, ConversationContext, Sender};
