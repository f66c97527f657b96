//! Terminal client for the derelict turn engine.
//!
//! # Architecture
//!
//! ```text
//! main (composition root: env, logging, content loading)
//!   └─→ Session (input layer: Command → Action → do_action + simulate)
//!         └─→ game_core::World (turn engine)
//! ```
//!
//! The view module prints a diagnostic text dump; it is not a renderer.

mod builder;
mod command;
mod config;
mod session;
pub mod view;

pub use builder::SessionBuilder;
pub use command::Command;
pub use config::ClientConfig;
pub use session::{Outcome, Session};
