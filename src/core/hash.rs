//! State Hashing
//!
//! Deterministic fingerprints of session state, so collaborators can tell
//! whether two states (or one state at two points in time) differ without
//! comparing field by field.

use sha2::{Digest, Sha256};

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Domain separator for game state fingerprints.
pub const GAME_STATE_DOMAIN: &[u8] = b"NARRATIVE_STATE_V1";

/// Deterministic hasher for session state.
///
/// Wraps SHA-256 with typed update helpers.
/// Order of updates is part of the hash.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for game state.
    pub fn for_game_state() -> Self {
        Self::new(GAME_STATE_DOMAIN)
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i128 value (little-endian).
    #[inline]
    pub fn update_i128(&mut self, value: i128) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a string, length-prefixed.
    pub fn update_str(&mut self, value: &str) {
        self.update_u64(value.len() as u64);
        self.hasher.update(value.as_bytes());
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Compute the fingerprint of a game state.
///
/// Called by `GameState::compute_hash()`.
pub fn compute_state_hash(current_state: &str, player_progress: u64, bias_level: i128) -> StateHash {
    let mut hasher = StateHasher::for_game_state();
    hasher.update_str(current_state);
    hasher.update_u64(player_progress);
    hasher.update_i128(bias_level);
    hasher.finalize()
}

// =============================================================================
// TESTS
// =============================================================================
