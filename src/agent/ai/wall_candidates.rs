// Wall candidate selection
// Instead of searching all 128 wall slots, the AI only looks at walls lying
// across the first steps of the opponent's shortest route, scored by how much
// they lengthen that route.

use log::debug;
use smallvec::SmallVec;

use crate::game_repr::{
    count_alternate_paths, path_distance, shortest_path, Cell, GameState, PlayerId, Wall, WALL_SLOTS,
};
use super::difficulty::{EvaluationTier, SearchProfile};

const DISTANCE_WEIGHT: i32 = 10;
const FLEXIBILITY_WEIGHT: i32 = 3;

/// A wall worth searching, with the heuristic that picked it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallCandidate {
    pub wall: Wall,
    /// Steps the wall adds to the opponent's shortest route
    pub opponent_gain: i32,
    /// Steps the wall adds to our own route
    pub own_loss: i32,
    pub score: i32,
}

/// Best wall placements for `player`, highest score first.
///
/// Only walls that pass every placement rule (budget, bounds, overlap and
/// connectivity for both players) and have a positive score are returned.
pub fn select_wall_candidates(
    state: &GameState,
    player: PlayerId,
    profile: &SearchProfile,
) -> SmallVec<[WallCandidate; 8]> {
    if state.walls_remaining(player) == 0 || profile.max_wall_candidates == 0 {
        return SmallVec::new();
    }

    let me = state.player(player);
    let them = state.player(player.opponent());
    let walls = state.walls();

    let Some(route) = shortest_path(them.cell, them.goal_row, walls) else {
        return SmallVec::new();
    };
    let Some(own_distance) = path_distance(me.cell, me.goal_row, walls) else {
        return SmallVec::new();
    };

    let measure_flexibility =
        profile.evaluation == EvaluationTier::Advanced && profile.flexibility_depth > 0;
    let their_routes = if measure_flexibility {
        count_alternate_paths(them.cell, them.goal_row, walls, profile.flexibility_depth) as i32
    } else {
        0
    };

    let mut proposals: Vec<Wall> = Vec::new();
    for step in route.path.windows(2).take(profile.path_segments) {
        for wall in slots_across(step[0], step[1]) {
            if !proposals.contains(&wall) {
                proposals.push(wall);
            }
        }
    }

    let mut candidates: Vec<WallCandidate> = Vec::new();
    for wall in proposals.iter().copied() {
        if state.validate_wall(player, wall).is_err() {
            continue;
        }

        let after = walls.with(wall);
        let (Some(their_after), Some(own_after)) = (
            path_distance(them.cell, them.goal_row, &after),
            path_distance(me.cell, me.goal_row, &after),
        ) else {
            continue;
        };

        let opponent_gain = their_after as i32 - route.distance as i32;
        let own_loss = own_after as i32 - own_distance as i32;
        let mut score = opponent_gain * DISTANCE_WEIGHT - own_loss * DISTANCE_WEIGHT;

        if measure_flexibility {
            let routes_after =
                count_alternate_paths(them.cell, them.goal_row, &after, profile.flexibility_depth) as i32;
            score += (their_routes - routes_after).max(0) * FLEXIBILITY_WEIGHT;
        }

        if score > 0 {
            candidates.push(WallCandidate {
                wall,
                opponent_gain,
                own_loss,
                score,
            });
        }
    }

    // Stable: equal scores keep route order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(profile.max_wall_candidates);

    debug!(
        "Player {}: {} wall slots on the opponent's route, {} candidates kept{}",
        player,
        proposals.len(),
        candidates.len(),
        candidates.first().map(|c| format!(", best {} (+{})", c.wall, c.opponent_gain)).unwrap_or_default()
    );

    candidates.into_iter().collect()
}

/// The wall slots lying across the step `from -> to`.
///
/// A step between rows `r` and `r + 1` in column `c` is crossed by the
/// horizontal walls at `y = r` starting at `x = c - 1` or `x = c`. A step
/// between columns `c` and `c + 1` in row `r` is crossed by the vertical walls
/// at `x = c` starting at `y = r - 1` or `y = r`.
pub fn slots_across(from: Cell, to: Cell) -> SmallVec<[Wall; 2]> {
    let mut slots = SmallVec::new();
    if !from.in_bounds() || !to.in_bounds() || from.manhattan(to) != 1 {
        return slots;
    }

    let spans = |line: u8| {
        [line.checked_sub(1), Some(line)]
            .into_iter()
            .flatten()
            .filter(|&start| start < WALL_SLOTS)
    };

    if from.col == to.col {
        let y = from.row.min(to.row);
        slots.extend(spans(from.col).map(|x| Wall::horizontal(x, y)));
    } else {
        let x = from.col.min(to.col);
        slots.extend(spans(from.row).map(|y| Wall::vertical(x, y)));
    }

    slots
}
