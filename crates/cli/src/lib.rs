//! `pantry` command-line front end.
//!
//! Owns everything the domain crates leave out: configuration, turning
//! text into command objects, per-session state, and formatting.

pub mod command;
pub mod config;
pub mod render;
pub mod run;
pub mod session;

pub use command::{CommandParseError, Invocation, SessionCommand};
pub use config::Config;
pub use session::{Outcome, Session};
