//! MinimaxPlayer - search-based AI player
//!
//! Implements the [`Player`] trait on top of [`choose_action`]. The player
//! owns its random number generator, so two players built with the same seed
//! and difficulty make the same decisions in the same positions.
//!
//! # Examples
//!
//! ```
//! use quoridor_engine::agent::ai::{Difficulty, MinimaxPlayer};
//! use quoridor_engine::agent::Player;
//! use quoridor_engine::game_repr::GameState;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut ai = MinimaxPlayer::with_difficulty(StdRng::seed_from_u64(1), Difficulty::Easy);
//! let action = ai.choose_action(&GameState::new()).unwrap();
//! assert!(GameState::new().apply_action(action).is_ok());
//! ```

use log::debug;
use rand::Rng;

use crate::agent::player::{GameOutcome, Player};
use crate::game_repr::{Action, GameError, GameState};
use super::difficulty::Difficulty;
use super::search::{choose_action, SearchResult};

/// AI player backed by the minimax search
pub struct MinimaxPlayer<R: Rng> {
    rng: R,
    difficulty: Difficulty,
    name: String,
    /// Statistics of the most recent decision
    last_search: Option<SearchResult>,
}

impl<R: Rng> MinimaxPlayer<R> {
    pub fn new(rng: R, difficulty: Difficulty, name: String) -> Self {
        Self {
            rng,
            difficulty,
            name,
            last_search: None,
        }
    }

    /// Player named "AI (difficulty)"
    pub fn with_difficulty(rng: R, difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(rng, difficulty, name)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl<R: Rng> Player for MinimaxPlayer<R> {
    fn choose_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        let result = choose_action(state, self.difficulty, &mut self.rng)?;
        self.last_search = Some(result);
        Ok(result.action)
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        debug!("{}: game ended, {}", self.name, outcome);
        self.last_search = None;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
