//! Player trait and associated types for game agents.
//!
//! This module provides the core abstraction for entities that can choose
//! actions. The orchestrator only talks to `dyn Player`, so search-based AIs
//! and the random fallback player are interchangeable.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction.
//! Different player implementations need different initialization
//! parameters (a difficulty, a seed, ...), so each provides its own
//! constructor and the trait defines none.
//!
//! # Synchronous Design
//!
//! `choose_action()` is blocking. The game is turn-based and single-threaded:
//! the orchestrator asks, waits for the answer, validates it and applies it.

use std::fmt;

use crate::game_repr::{Action, GameError, GameState, PlayerId};

/// Why a game ended without a winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    /// The ply limit was reached
    MaxPlies,
    /// The side to move had no pawn move and no wall to place
    NoLegalActions(PlayerId),
}

/// Result of a completed game.
///
/// Passed to players via `game_ended()` and stored in the game record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw(DrawReason),
}

impl GameOutcome {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::Winner(id) => Some(*id),
            GameOutcome::Draw(_) => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw(_))
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(id) => write!(f, "player {} wins", id),
            GameOutcome::Draw(DrawReason::MaxPlies) => f.write_str("draw (ply limit)"),
            GameOutcome::Draw(DrawReason::NoLegalActions(id)) => {
                write!(f, "draw (player {} has no legal action)", id)
            }
        }
    }
}

/// Trait for entities that can choose actions.
///
/// # Required Methods
///
/// Only `choose_action()` must be implemented. `name()` and `game_ended()`
/// have default implementations.
///
/// ## `choose_action()`
/// - Called with the current position when the player is to move
/// - Must not assume the returned action is applied: the orchestrator
///   validates it and may fall back to a random legal action
/// - Returns `Err(GameError::NoLegalActions)` when nothing is playable
///
/// ## `game_ended()`
/// - Default: Does nothing
/// - Override: To record statistics or reset per-game state
///
/// ## `name()`
/// - Default: Returns `"Player"`
pub trait Player {
    /// Choose the next action for the side to move in `state`.
    fn choose_action(&mut self, state: &GameState) -> Result<Action, GameError>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _outcome: GameOutcome) {
        // Default: do nothing
    }

    /// Display name used in logs and reports
    fn name(&self) -> &str {
        "Player"
    }
}
