// Root search
//
// Scores every candidate action for the side to move: all pawn moves, plus the
// selected wall candidates when the profile's coin flip says to consider walls.
// Each candidate is searched with `minimax` at the profile depth, opponent to
// move, and the highest score wins. Ties go to the first candidate seen, and
// pawn moves are listed before walls.

use crate::game_repr::{legal_walls, path_distance, Action, GameError, GameState, PlayerId};
use log::debug;
use rand::Rng;
use std::time::Instant;
use super::difficulty::{Difficulty, SearchProfile};
use super::minimax::{minimax, SearchContext, MAX_SCORE, MIN_SCORE};
use super::move_ordering::ordered_moves;
use super::wall_candidates::select_wall_candidates;

/// Result of one decision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub action: Action,
    pub score: i32,
    pub nodes_searched: u64,
    pub candidates_evaluated: usize,
    /// Whether wall placements were among the candidates
    pub considered_walls: bool,
    pub time_ms: u64,
}

/// Pick an action for the side to move at the given difficulty.
///
/// `state` is never modified; the search runs on a private copy. All
/// randomness comes from `rng`, so a seeded generator makes the choice
/// reproducible.
///
/// # Errors
///
/// `GameOver` if the game is already decided, `NoLegalActions` if the side to
/// move can neither move its pawn nor place a wall.
pub fn choose_action<R: Rng>(
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<SearchResult, GameError> {
    choose_action_with_profile(state, &difficulty.profile(), rng)
}

/// [`choose_action`] with explicit search parameters
pub fn choose_action_with_profile<R: Rng>(
    state: &GameState,
    profile: &SearchProfile,
    rng: &mut R,
) -> Result<SearchResult, GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }

    let start_time = Instant::now();
    let player = state.to_move();
    let moves = ordered_moves(state, player);

    let considered_walls = state.walls_remaining(player) > 0
        && (moves.is_empty() || rng.gen_bool(wall_probability(state, player, profile)));

    let mut candidates: Vec<Action> = moves.iter().map(|&cell| Action::Move(cell)).collect();
    if considered_walls {
        let walls = select_wall_candidates(state, player, profile);
        candidates.extend(walls.iter().map(|c| Action::PlaceWall(c.wall)));

        // A stalled pawn must place a wall even if none looks useful
        if candidates.is_empty() {
            candidates.extend(legal_walls(state, player).into_iter().map(Action::PlaceWall));
        }
    }

    if candidates.is_empty() {
        return Err(GameError::NoLegalActions(player));
    }

    let mut scratch = state.clone();
    let mut ctx = SearchContext::new(player, profile, rng);
    let mut best: Option<(Action, i32)> = None;

    for &action in &candidates {
        let alpha = best.map_or(MIN_SCORE, |(_, score)| score);
        let undo = scratch.make_action_undoable(action);
        let score = minimax(&mut ctx, &mut scratch, profile.depth, alpha, MAX_SCORE, false);
        scratch.unmake_action(action, undo);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((action, score));
        }
    }

    let Some((action, score)) = best else {
        return Err(GameError::NoLegalActions(player));
    };

    let result = SearchResult {
        action,
        score,
        nodes_searched: ctx.nodes(),
        candidates_evaluated: candidates.len(),
        considered_walls,
        time_ms: start_time.elapsed().as_millis() as u64,
    };

    debug!(
        "Player {} chose {} (score {}, {} candidates, {} nodes, walls {}, {}ms)",
        player,
        result.action,
        result.score,
        result.candidates_evaluated,
        result.nodes_searched,
        if considered_walls { "on" } else { "off" },
        result.time_ms
    );

    Ok(result)
}

/// Chance of considering walls this turn. Raised while the opponent is
/// within the profile's urgency distance of its goal.
fn wall_probability(state: &GameState, player: PlayerId, profile: &SearchProfile) -> f64 {
    let opponent = state.player(player.opponent());
    let distance = path_distance(opponent.cell, opponent.goal_row, state.walls());

    let probability = match distance {
        Some(d) if d <= profile.urgency_distance => profile.urgent_wall_probability,
        _ => profile.wall_probability,
    };
    probability.clamp(0.0, 1.0)
}
