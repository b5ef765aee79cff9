//! Game State
//!
//! The session state container: a current stage label, a progress counter
//! and a bias accumulator. Every operation is total.

use tracing::{debug, info};

use crate::core::hash::{compute_state_hash, StateHash};
use crate::game::label::StageLabel;

// =============================================================================
// GAME STATE
// =============================================================================

/// Mutable state of one narrative session.
///
/// Fields are read through accessors. Each mutator changes exactly one
/// field, so `player_progress` can only ever grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Current stage label
    current_state: StageLabel,

    /// Completed steps
    player_progress: u64,

    /// Signed bias accumulator, wider than the amounts added to it
    bias_level: i128,
}

impl GameState {
    /// Create a fresh session: `"Introduction"`, progress 0, bias 0.
    pub fn new() -> Self {
        Self {
            current_state: StageLabel::introduction(),
            player_progress: 0,
            bias_level: 0,
        }
    }

    /// Current stage label.
    #[inline]
    pub fn current_state(&self) -> &StageLabel {
        &self.current_state
    }

    /// Number of completed steps.
    #[inline]
    pub fn player_progress(&self) -> u64 {
        self.player_progress
    }

    /// Accumulated bias.
    #[inline]
    pub fn bias_level(&self) -> i128 {
        self.bias_level
    }

    /// Replace the current stage label. Any label is accepted and the
    /// previous one is dropped.
    pub fn update_state(&mut self, new_state: impl Into<StageLabel>) {
        let new_state = new_state.into();
        debug!(from = %self.current_state, to = %new_state, "stage updated");
        if new_state.is_finished() && !self.current_state.is_finished() {
            info!(progress = self.player_progress, bias = self.bias_level, "session finished");
        }
        self.current_state = new_state;
    }

    /// Advance progress by one step.
    pub fn increase_progress(&mut self) {
        self.player_progress = self.player_progress.saturating_add(1);
        debug!(progress = self.player_progress, "progress increased");
    }

    /// Add a signed amount to the bias level.
    pub fn adjust_bias(&mut self, amount: i64) {
        self.bias_level = self.bias_level.saturating_add(i128::from(amount));
        debug!(amount, bias = self.bias_level, "bias adjusted");
    }

    /// Check if the session has reached the exact `"finished"` label.
    #[inline]
    pub fn is_game_finished(&self) -> bool {
        self.current_state.is_finished()
    }

    /// Compute a fingerprint of the current state.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(
            self.current_state.as_str(),
            self.player_progress,
            self.bias_level,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
