//! Core primitives shared by the game modules.

pub mod hash;

// Re-export core types
pub use hash::{compute_state_hash, StateHash, StateHasher};
