use std::fmt;

use smallvec::SmallVec;

use super::cell::{Cell, Direction, PlayerId};
use super::connectivity::wall_keeps_paths_open;
use super::state::GameState;
use super::wall::{Wall, WallSet};

/// Something a player does on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Cell),
    PlaceWall(Wall),
}

impl Action {
    pub fn is_wall(&self) -> bool {
        matches!(self, Action::PlaceWall(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move {}", cell),
            Action::PlaceWall(wall) => write!(f, "wall {}", wall),
        }
    }
}

/// Pawn destinations for `player`, tried up, down, left, right.
///
/// A free neighbour is a step. A neighbour holding the opponent can be jumped
/// straight over when neither step crosses a wall and the landing cell is on
/// the board and empty. There are no diagonal side-steps when that straight
/// jump is blocked.
pub fn legal_moves(state: &GameState, player: PlayerId) -> SmallVec<[Cell; 4]> {
    let mut moves = SmallVec::new();
    let from = state.cell_of(player);
    let walls = state.walls();

    for dir in Direction::ALL {
        let Some(next) = from.step(dir) else {
            continue;
        };
        if walls.blocks_step(from, next) {
            continue;
        }

        match state.occupant(next) {
            None => moves.push(next),
            Some(other) if other != player => {
                if let Some(landing) = next.step(dir) {
                    if !walls.blocks_step(next, landing) && state.is_empty(landing) {
                        moves.push(landing);
                    }
                }
            }
            Some(_) => {}
        }
    }

    moves
}

/// Bounds and overlap only. Connectivity for both players must be checked
/// separately (see [`wall_keeps_paths_open`]) before a wall is committed.
pub fn legal_wall_placement(wall: &Wall, walls: &WallSet) -> bool {
    wall.in_bounds() && walls.conflicting(wall).is_none()
}

/// Every wall `player` could place right now: budget left, in bounds, no
/// overlap, and both players keep a route to their goal.
pub fn legal_walls(state: &GameState, player: PlayerId) -> Vec<Wall> {
    if state.walls_remaining(player) == 0 {
        return Vec::new();
    }
    Wall::all_slots()
        .filter(|wall| legal_wall_placement(wall, state.walls()))
        .filter(|&wall| wall_keeps_paths_open(state, wall))
        .collect()
}

/// Pawn moves followed by wall placements for the side to move. Empty once
/// the game is over.
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.is_game_over() {
        return Vec::new();
    }
    let player = state.to_move();
    legal_moves(state, player)
        .into_iter()
        .map(Action::Move)
        .chain(legal_walls(state, player).into_iter().map(Action::PlaceWall))
        .collect()
}
