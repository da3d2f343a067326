// Position evaluation
// Returns a score from the principal player's point of view (positive = good
// for the principal). Shortest-path distances are the backbone of every tier;
// the other terms only break ties between similar races.

use crate::game_repr::{
    count_alternate_paths, path_distance, GameState, PlayerId, PlayerState, BOARD_SIZE, CENTER_COL,
    WALLS_PER_PLAYER,
};
use super::difficulty::{EvaluationTier, SearchProfile};

/// Score of a won position. Search adds the remaining depth on top so that
/// faster wins rank higher.
pub const WIN_SCORE: i32 = 10_000;

/// Stand-in for an infinite distance. Unreachable goals cannot occur in legal
/// positions, this only keeps the arithmetic finite.
const UNREACHABLE_DISTANCE: i32 = 64;

/// Distances at or below this count as the endgame
const ENDGAME_DISTANCE: i32 = 3;

// Base tier weights
const BASE_DISTANCE_WEIGHT: i32 = 100;
const BASE_PROGRESS_WEIGHT: i32 = 10;
const BASE_CENTER_WEIGHT: i32 = 5;
const BASE_WALL_WEIGHT: i32 = 15;

// Blocking tier weights
const BLOCK_OPPONENT_DISTANCE_WEIGHT: i32 = 140;
const BLOCK_OWN_DISTANCE_WEIGHT: i32 = 90;
const BLOCK_PROXIMITY_BONUS: i32 = 30;
const BLOCK_PROXIMITY_RANGE: u32 = 2;
/// The proximity bonus only applies while the opponent is further than this from its goal
const BLOCK_PROXIMITY_MIN_OPPONENT_DISTANCE: i32 = 2;
const BLOCK_DRIFT_PENALTY: i32 = 8;
const BLOCK_WALL_WEIGHT: i32 = 10;

// Advanced tier weights
const ADV_DISTANCE_WEIGHT: i32 = 120;
const ADV_PROGRESS_WEIGHT: i32 = 8;
const ADV_CENTER_WEIGHT: i32 = 3;
const ADV_FLEXIBILITY_WEIGHT: i32 = 4;
const ADV_FLEXIBILITY_CAP: u32 = 15;
const ADV_OPENING_WALLS_PLACED: u8 = 4;
const ADV_OPENING_WALL_WEIGHT: i32 = 20;
const ADV_MIDGAME_WALL_WEIGHT: i32 = 8;
const ADV_HOARD_WEIGHT: i32 = 25;
const ADV_THREAT_WEIGHT: i32 = 15;
const ADV_UNSPENT_PENALTY: i32 = 10;

/// Default detour depth when an advanced evaluator is built without a profile
pub const DEFAULT_FLEXIBILITY_DEPTH: u8 = 4;

/// Scoring function for one evaluation tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    tier: EvaluationTier,
    flexibility_depth: u8,
}

impl Evaluator {
    pub fn new(tier: EvaluationTier) -> Self {
        Self {
            tier,
            flexibility_depth: DEFAULT_FLEXIBILITY_DEPTH,
        }
    }

    pub fn for_profile(profile: &SearchProfile) -> Self {
        Self {
            tier: profile.evaluation,
            flexibility_depth: profile.flexibility_depth.max(1),
        }
    }

    pub fn tier(&self) -> EvaluationTier {
        self.tier
    }

    /// Score `state` for `principal`. Won and lost positions are `±WIN_SCORE`.
    pub fn evaluate(&self, state: &GameState, principal: PlayerId) -> i32 {
        if let Some(winner) = state.winner() {
            return if winner == principal { WIN_SCORE } else { -WIN_SCORE };
        }

        let race = Race::new(state, principal);
        match self.tier {
            EvaluationTier::Base => evaluate_base(&race),
            EvaluationTier::Blocking => evaluate_blocking(&race),
            EvaluationTier::Advanced => evaluate_advanced(state, &race, self.flexibility_depth),
        }
    }
}

/// Convenience for one-off evaluations with default settings
pub fn evaluate(state: &GameState, principal: PlayerId, tier: EvaluationTier) -> i32 {
    Evaluator::new(tier).evaluate(state, principal)
}

/// Shortest-path distances and player records for both sides
struct Race<'a> {
    me: &'a PlayerState,
    them: &'a PlayerState,
    my_distance: i32,
    their_distance: i32,
}

impl<'a> Race<'a> {
    fn new(state: &'a GameState, principal: PlayerId) -> Self {
        let me = state.player(principal);
        let them = state.player(principal.opponent());
        Self {
            me,
            them,
            my_distance: distance_to_goal(state, me),
            their_distance: distance_to_goal(state, them),
        }
    }

    fn endgame(&self) -> bool {
        self.my_distance <= ENDGAME_DISTANCE || self.their_distance <= ENDGAME_DISTANCE
    }

    fn wall_difference(&self) -> i32 {
        self.me.walls_remaining as i32 - self.them.walls_remaining as i32
    }
}

fn distance_to_goal(state: &GameState, player: &PlayerState) -> i32 {
    path_distance(player.cell, player.goal_row, state.walls())
        .map(|d| d as i32)
        .unwrap_or(UNREACHABLE_DISTANCE)
}

/// Rows covered since the start row
fn progress(player: &PlayerState) -> i32 {
    (BOARD_SIZE - 1) as i32 - player.rows_to_goal() as i32
}

/// 4 on the centre column down to 0 on the edges
fn centrality(player: &PlayerState) -> i32 {
    CENTER_COL as i32 - player.cell.col.abs_diff(CENTER_COL) as i32
}

fn evaluate_base(race: &Race) -> i32 {
    let mut score = (race.their_distance - race.my_distance) * BASE_DISTANCE_WEIGHT;
    score += progress(race.me) * BASE_PROGRESS_WEIGHT;
    score += centrality(race.me) * BASE_CENTER_WEIGHT;

    // Walls only matter once somebody is close
    if race.endgame() {
        score += race.wall_difference() * BASE_WALL_WEIGHT;
    }
    score
}

fn evaluate_blocking(race: &Race) -> i32 {
    let mut score = race.their_distance * BLOCK_OPPONENT_DISTANCE_WEIGHT
        - race.my_distance * BLOCK_OWN_DISTANCE_WEIGHT;

    // Standing next to an opponent that still has ground to cover keeps wall
    // placements in front of it within reach
    let close = race.me.cell.manhattan(race.them.cell) <= BLOCK_PROXIMITY_RANGE;
    if close && race.their_distance > BLOCK_PROXIMITY_MIN_OPPONENT_DISTANCE && race.me.walls_remaining > 0 {
        score += BLOCK_PROXIMITY_BONUS;
    }

    score -= race.me.cell.col.abs_diff(CENTER_COL) as i32 * BLOCK_DRIFT_PENALTY;
    score += race.wall_difference() * BLOCK_WALL_WEIGHT;
    score
}

fn evaluate_advanced(state: &GameState, race: &Race, flexibility_depth: u8) -> i32 {
    let mut score = (race.their_distance - race.my_distance) * ADV_DISTANCE_WEIGHT;
    score += progress(race.me) * ADV_PROGRESS_WEIGHT;
    score += centrality(race.me) * ADV_CENTER_WEIGHT;

    let walls = state.walls();
    let my_routes = count_alternate_paths(race.me.cell, race.me.goal_row, walls, flexibility_depth)
        .min(ADV_FLEXIBILITY_CAP) as i32;
    let their_routes = count_alternate_paths(race.them.cell, race.them.goal_row, walls, flexibility_depth)
        .min(ADV_FLEXIBILITY_CAP) as i32;
    score += (my_routes - their_routes) * ADV_FLEXIBILITY_WEIGHT;

    score += wall_phase_term(race);
    score
}

/// Opening: keep walls. Middle game: mild preference for having more.
/// Endgame: hoard when ahead, and fear the opponent's walls; when behind,
/// unspent walls are wasted.
fn wall_phase_term(race: &Race) -> i32 {
    let mine = race.me.walls_remaining as i32;
    let theirs = race.them.walls_remaining as i32;
    let placed = 2 * WALLS_PER_PLAYER - race.me.walls_remaining - race.them.walls_remaining;

    if race.endgame() {
        if race.my_distance < race.their_distance {
            mine * ADV_HOARD_WEIGHT - theirs * ADV_THREAT_WEIGHT
        } else {
            -mine * ADV_UNSPENT_PENALTY
        }
    } else if placed < ADV_OPENING_WALLS_PLACED {
        race.wall_difference() * ADV_OPENING_WALL_WEIGHT
    } else {
        race.wall_difference() * ADV_MIDGAME_WALL_WEIGHT
    }
}
