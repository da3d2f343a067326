// Reachability checks behind the rule that a wall may never fully block a
// player. Pawns are ignored: only walls cut edges.

use std::collections::VecDeque;

use super::cell::{Cell, Direction, PlayerId, BOARD_SIZE};
use super::state::GameState;
use super::wall::{Wall, WallSet};

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Breadth-first search from `start`; true iff any cell on `target_row` is
/// reachable through unblocked orthogonal steps.
pub fn has_path(start: Cell, target_row: u8, walls: &WallSet) -> bool {
    if !start.in_bounds() {
        return false;
    }
    if start.row == target_row {
        return true;
    }

    let mut visited = [false; CELLS];
    let mut queue = VecDeque::with_capacity(CELLS);
    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = cell.step(dir) else {
                continue;
            };
            if visited[next.index()] || walls.blocks_step(cell, next) {
                continue;
            }
            if next.row == target_row {
                return true;
            }
            visited[next.index()] = true;
            queue.push_back(next);
        }
    }

    false
}

/// Whether both players could still reach their goal rows if `wall` were
/// added to the state's walls. Overlap is not checked here; an out of bounds
/// wall is never accepted.
pub fn wall_keeps_paths_open(state: &GameState, wall: Wall) -> bool {
    if !wall.in_bounds() {
        return false;
    }
    let hypothetical = state.walls().with(wall);
    PlayerId::BOTH.iter().all(|&id| {
        let player = state.player(id);
        has_path(player.cell, player.goal_row, &hypothetical)
    })
}
