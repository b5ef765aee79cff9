//! # Narrative State
//!
//! In-memory session state for an interactive narrative or simple game.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    NARRATIVE STATE                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Supporting primitives                     │
//! │  └── hash.rs     - State fingerprinting (SHA-256)            │
//! │                                                              │
//! │  game/           - Session state                             │
//! │  ├── label.rs    - Open-ended stage labels                   │
//! │  ├── state.rs    - GameState container                       │
//! │  └── command.rs  - Named mutations, scripts, replay          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//!
//! A [`GameState`] holds three fields: the current stage label, a progress
//! counter and a signed bias accumulator. Every operation is total. Labels
//! are never validated; `"finished"` is the only label with a special
//! meaning, checked by [`GameState::is_game_finished`].
//!
//! There is no global instance. Whoever constructs a `GameState` owns it,
//! and shared access across threads is the owner's business.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::hash::{StateHash, StateHasher};
pub use crate::game::command::{Command, CommandError, Script, ScriptError};
pub use crate::game::label::StageLabel;
pub use crate::game::state::GameState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label every fresh session starts in.
pub const INITIAL_STATE: &str = "Introduction";

/// The terminal label. Matched exactly, case-sensitive.
pub const FINISHED_STATE: &str = "finished";
