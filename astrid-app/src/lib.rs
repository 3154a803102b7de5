//! # astrid-app
//!
//! Application shell for the astrid life organizer: env config, component
//! assembly (which records backend to build), the per-user [`ChatSession`],
//! and the interactive chat loop. The CLI crate drives everything in here.

pub mod components;
pub mod config;
pub mod runner;
pub mod session;

pub use components::{build_components, AppComponents};
pub use config::{AppConfig, StoreKind};
pub use runner::run_chat;
pub use session::ChatSession;
