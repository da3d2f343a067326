use rand::seq::SliceRandom;
use rand::Rng;

use crate::agent::player::Player;
use crate::game_repr::{legal_actions, Action, GameError, GameState};

/// Plays a uniformly random legal action.
///
/// Used as an opponent for batch runs and as the fallback when another
/// player's choice is rejected.
pub struct RandomPlayer<R: Rng> {
    rng: R,
    name: String,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            name: "Random".to_string(),
        }
    }

    pub fn with_name(rng: R, name: impl Into<String>) -> Self {
        Self {
            rng,
            name: name.into(),
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn choose_action(&mut self, state: &GameState) -> Result<Action, GameError> {
        if state.is_game_over() {
            return Err(GameError::GameOver);
        }
        let actions = legal_actions(state);
        actions
            .choose(&mut self.rng)
            .copied()
            .ok_or(GameError::NoLegalActions(state.to_move()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
