//! Engine facade
//!
//! Value-in, value-out entry points for front ends that do not want to deal
//! with the module layout. Every function here is a thin wrapper; the rules
//! live in [`crate::game_repr`] and the search in [`crate::agent::ai`].

use rand::Rng;
use smallvec::SmallVec;

use crate::agent::ai::{choose_action, Difficulty};
use crate::game_repr::{self, wall_keeps_paths_open, Action, Cell, GameError, GameState, PlayerId, Wall};

/// Starting position: pawns on (0,4) and (8,4), ten walls each, player one to move
pub fn new_game() -> GameState {
    GameState::new()
}

/// Pawn destinations for `player`
pub fn legal_moves(state: &GameState, player: PlayerId) -> SmallVec<[Cell; 4]> {
    game_repr::legal_moves(state, player)
}

/// Bounds and overlap only, connectivity is not checked
pub fn legal_wall_candidate(state: &GameState, wall: Wall) -> bool {
    game_repr::legal_wall_placement(&wall, state.walls())
}

/// Whether both players can still reach their goal row with `wall` added
pub fn wall_keeps_both_paths_open(state: &GameState, wall: Wall) -> bool {
    wall_keeps_paths_open(state, wall)
}

/// Validate `action` for the side to move and return the resulting position.
/// `state` is left untouched.
pub fn apply_action(state: &GameState, action: Action) -> Result<GameState, GameError> {
    let mut next = state.clone();
    next.apply_action(action)?;
    Ok(next)
}

/// Let the AI choose for `ai_player`, who must be the side to move
pub fn choose_ai_action<R: Rng>(
    state: &GameState,
    ai_player: PlayerId,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Action, GameError> {
    if state.to_move() != ai_player {
        return Err(GameError::NotPlayersTurn(ai_player));
    }
    choose_action(state, difficulty, rng).map(|result| result.action)
}

/// The winner, if the game is over
pub fn is_game_over(state: &GameState) -> Option<PlayerId> {
    state.winner()
}
