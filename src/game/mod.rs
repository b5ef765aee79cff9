//! Game Session Module
//!
//! ## Module Structure
//!
//! - `label`: Open-ended stage labels
//! - `state`: The session state container
//! - `command`: Named mutations, scripts and replay

pub mod command;
pub mod label;
pub mod state;

// Re-export key types
pub use command::{replay, Command, CommandError, Script, ScriptError};
pub use label::StageLabel;
pub use state::GameState;
