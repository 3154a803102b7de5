//! # responder
//!
//! Rule-based reply selection for the astrid chat. A user message and a small
//! conversation context go in; a supportive reply comes out, optionally with
//! self-help tips and the fixed emergency resource text. Rules are an ordered
//! decision list with first-match-wins semantics; randomized pools draw from
//! an injected seedable RNG so behavior can be pinned in tests.
//!
//! No I/O anywhere in this crate. The caller owns the transcript and the
//! context lifecycle.

pub mod crisis;
pub mod engine;
pub mod replies;
pub mod rules;
pub mod tips;

pub use engine::{Responder, Response};
pub use tips::{TipCategory, GENERAL_TIPS, MAX_TIPS, TIP_CATEGORIES};
