// Minimax Search with Alpha-Beta Pruning
//
// Scores are always from the principal's point of view: the principal's plies
// maximize and the opponent's plies minimize. Interior nodes only expand pawn
// moves; wall placements are considered at the root (see `search`).
//
// The state is searched in place with make/unmake, so the caller hands in a
// scratch copy.

use crate::game_repr::{Action, GameState, PlayerId};
use rand::Rng;
use super::difficulty::SearchProfile;
use super::evaluation::{Evaluator, WIN_SCORE};
use super::move_ordering::{ordered_moves, sampled_moves};

/// Bounds for the alpha-beta window
pub const MIN_SCORE: i32 = -WIN_SCORE - 1_000;
pub const MAX_SCORE: i32 = WIN_SCORE + 1_000;

/// Everything one decision's search needs besides the position
pub struct SearchContext<'a, R: Rng> {
    principal: PlayerId,
    profile: &'a SearchProfile,
    evaluator: Evaluator,
    rng: &'a mut R,
    nodes: u64,
}

impl<'a, R: Rng> SearchContext<'a, R> {
    pub fn new(principal: PlayerId, profile: &'a SearchProfile, rng: &'a mut R) -> Self {
        Self {
            principal,
            profile,
            evaluator: Evaluator::for_profile(profile),
            rng,
            nodes: 0,
        }
    }

    pub fn principal(&self) -> PlayerId {
        self.principal
    }

    /// Nodes visited so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn budget_exhausted(&self) -> bool {
        self.profile.node_budget.is_some_and(|budget| self.nodes >= budget)
    }

    fn cut_early(&mut self) -> bool {
        let probability = self.profile.early_cutoff_probability;
        probability > 0.0 && self.rng.gen_bool(probability.min(1.0))
    }

    /// Static score plus the profile's noise
    fn leaf_score(&mut self, state: &GameState) -> i32 {
        let score = self.evaluator.evaluate(state, self.principal);
        let noise = self.profile.evaluation_noise;
        if noise > 0 {
            score + self.rng.gen_range(-noise..=noise)
        } else {
            score
        }
    }
}

/// Minimax search with alpha-beta pruning
///
/// # Arguments
///
/// * `ctx` - Principal, profile, RNG and node counter
/// * `state` - Position to search, restored before returning
/// * `depth` - Remaining plies
/// * `alpha` - Score the maximizer can already guarantee
/// * `beta` - Score the minimizer can already guarantee
/// * `maximizing` - Whether the side to move is the principal
///
/// # Returns
///
/// The score of `state` for the principal. Wins found with more depth left
/// score higher, so the search prefers quick wins and slow losses.
pub fn minimax<R: Rng>(
    ctx: &mut SearchContext<'_, R>,
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    ctx.nodes += 1;

    if let Some(winner) = state.winner() {
        let score = WIN_SCORE + depth as i32;
        return if winner == ctx.principal { score } else { -score };
    }

    if depth == 0 || ctx.budget_exhausted() || ctx.cut_early() {
        return ctx.leaf_score(state);
    }

    let mover = state.to_move();
    let moves = match ctx.profile.move_sample {
        Some(sample) => sampled_moves(state, mover, sample, &mut *ctx.rng),
        None => ordered_moves(state, mover),
    };

    // Stalled pawn: the turn passes
    if moves.is_empty() {
        state.toggle_turn();
        let score = minimax(ctx, state, depth - 1, alpha, beta, !maximizing);
        state.toggle_turn();
        return score;
    }

    if maximizing {
        let mut best = MIN_SCORE;
        for target in moves {
            let action = Action::Move(target);
            let undo = state.make_action_undoable(action);
            let score = minimax(ctx, state, depth - 1, alpha, beta, false);
            state.unmake_action(action, undo);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = MAX_SCORE;
        for target in moves {
            let action = Action::Move(target);
            let undo = state.make_action_undoable(action);
            let score = minimax(ctx, state, depth - 1, alpha, beta, true);
            state.unmake_action(action, undo);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
