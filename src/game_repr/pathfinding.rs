// A* shortest paths to a goal row, plus a bounded estimate of how many
// near-optimal alternative routes exist.
//
// Only single pawn steps are modelled: jumps over the opponent and the
// opponent's pawn itself are ignored, the same way connectivity ignores them.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::cell::{Cell, Direction, BOARD_SIZE};
use super::wall::WallSet;

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Extra steps, over the optimal length, a route may take and still count
/// as an alternative.
pub const DETOUR_PENALTY: u32 = 2;

/// An optimal route. `path[0]` is the start, the last cell is on the target row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    pub distance: u32,
    pub path: Vec<Cell>,
}

/// A* with `h(cell) = |cell.row - target_row|`.
///
/// Returns `None` when the target row cannot be reached, which callers treat
/// as an infinite distance.
pub fn shortest_path(start: Cell, target_row: u8, walls: &WallSet) -> Option<ShortestPath> {
    if !start.in_bounds() || target_row >= BOARD_SIZE {
        return None;
    }

    let heuristic = |cell: Cell| cell.row.abs_diff(target_row) as u32;

    let mut best_cost = [u32::MAX; CELLS];
    let mut came_from: [Option<Cell>; CELLS] = [None; CELLS];
    let mut closed = [false; CELLS];
    // (f, h, insertion order, cell): lowest f first, then closest to the goal.
    let mut open = BinaryHeap::new();
    let mut pushed = 0u32;

    best_cost[start.index()] = 0;
    open.push(Reverse((heuristic(start), heuristic(start), pushed, start)));

    while let Some(Reverse((_, _, _, cell))) = open.pop() {
        if closed[cell.index()] {
            continue;
        }
        closed[cell.index()] = true;

        if cell.row == target_row {
            return Some(reconstruct(cell, &came_from, best_cost[cell.index()]));
        }

        let cost = best_cost[cell.index()] + 1;
        for dir in Direction::ALL {
            let Some(next) = cell.step(dir) else {
                continue;
            };
            if closed[next.index()] || walls.blocks_step(cell, next) {
                continue;
            }
            if cost < best_cost[next.index()] {
                best_cost[next.index()] = cost;
                came_from[next.index()] = Some(cell);
                pushed += 1;
                let h = heuristic(next);
                open.push(Reverse((cost + h, h, pushed, next)));
            }
        }
    }

    None
}

fn reconstruct(goal: Cell, came_from: &[Option<Cell>; CELLS], distance: u32) -> ShortestPath {
    let mut path = Vec::with_capacity(distance as usize + 1);
    let mut cursor = Some(goal);
    while let Some(cell) = cursor {
        path.push(cell);
        cursor = came_from[cell.index()];
    }
    path.reverse();
    ShortestPath { distance, path }
}

/// Length of the shortest route, `None` if there is none.
pub fn path_distance(start: Cell, target_row: u8, walls: &WallSet) -> Option<u32> {
    shortest_path(start, target_row, walls).map(|p| p.distance)
}

/// Rough count of alternative routes to `target_row`.
///
/// Walks the A* path and, from every cell on it but the last, enumerates
/// simple detours of at most `max_depth` steps that leave the path and either
/// rejoin it further along or reach the target row on their own, with the
/// whole route at most [`DETOUR_PENALTY`] steps longer than optimal. Returns
/// the number of detours found, or 0 if the row is unreachable.
///
/// This is a flexibility signal, not an exact count of paths.
pub fn count_alternate_paths(start: Cell, target_row: u8, walls: &WallSet, max_depth: u8) -> u32 {
    let Some(best) = shortest_path(start, target_row, walls) else {
        return 0;
    };

    let mut path_index = [None; CELLS];
    for (i, cell) in best.path.iter().enumerate() {
        path_index[cell.index()] = Some(i as u32);
    }

    let mut walker = DetourWalker {
        walls,
        target_row,
        path_index,
        optimal: best.distance,
        max_depth: max_depth as u32,
        visited: [false; CELLS],
        found: 0,
    };

    for (origin_idx, &origin) in best.path.iter().enumerate().take(best.path.len().saturating_sub(1)) {
        for dir in Direction::ALL {
            let Some(next) = origin.step(dir) else {
                continue;
            };
            if walls.blocks_step(origin, next) || path_index[next.index()].is_some() {
                continue;
            }
            if walker.max_depth == 0 {
                continue;
            }
            walker.visited[next.index()] = true;
            walker.extend(next, origin_idx as u32, 1);
            walker.visited[next.index()] = false;
        }
    }

    walker.found
}

struct DetourWalker<'a> {
    walls: &'a WallSet,
    target_row: u8,
    path_index: [Option<u32>; CELLS],
    optimal: u32,
    max_depth: u32,
    visited: [bool; CELLS],
    found: u32,
}

impl DetourWalker<'_> {
    /// `cell` is off the path, `len` steps away from path cell `origin`.
    fn extend(&mut self, cell: Cell, origin: u32, len: u32) {
        if cell.row == self.target_row {
            if origin + len <= self.optimal + DETOUR_PENALTY {
                self.found += 1;
            }
            return;
        }
        if origin + len >= self.optimal + DETOUR_PENALTY {
            return;
        }

        for dir in Direction::ALL {
            let Some(next) = cell.step(dir) else {
                continue;
            };
            if self.visited[next.index()] || self.walls.blocks_step(cell, next) {
                continue;
            }
            let steps = len + 1;
            if steps > self.max_depth {
                continue;
            }

            match self.path_index[next.index()] {
                Some(rejoin) => {
                    if rejoin > origin && steps <= rejoin - origin + DETOUR_PENALTY {
                        self.found += 1;
                    }
                }
                None => {
                    self.visited[next.index()] = true;
                    self.extend(next, origin, steps);
                    self.visited[next.index()] = false;
                }
            }
        }
    }
}
