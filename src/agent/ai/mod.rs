// AI Agent - Minimax with Alpha-Beta Pruning
//
// Depth-limited minimax over pawn moves, with wall placements considered at
// the root from a small set of heuristic candidates.
//
// Key features:
// - Three difficulty levels, each a fixed search profile
// - Path-distance based evaluation in three tiers
// - Move ordering by resulting path distance
// - All randomness drawn from a caller-supplied RNG

mod difficulty;
mod evaluation;
mod minimax;
mod minimax_player;
mod move_ordering;
mod search;
mod wall_candidates;

#[cfg(test)]
mod tests;

pub use difficulty::{Difficulty, EvaluationTier, ParseDifficultyError, SearchProfile};
pub use evaluation::{evaluate, Evaluator, WIN_SCORE};
pub use minimax::{minimax, SearchContext, MAX_SCORE, MIN_SCORE};
pub use minimax_player::MinimaxPlayer;
pub use move_ordering::ordered_moves;
pub use search::{choose_action, choose_action_with_profile, SearchResult};
pub use wall_candidates::{select_wall_candidates, slots_across, WallCandidate};
