use crate::game_repr::*;
use super::{board_with, corridor_walls};

#[test]
fn test_open_board_connected() {
    let walls = WallSet::new();
    assert!(has_path(Cell::new(0, 4), 8, &walls));
    assert!(has_path(Cell::new(8, 4), 0, &walls));
    assert!(has_path(Cell::new(8, 0), 8, &walls), "Already on the target row");
}

#[test]
fn test_single_wall_near_start_never_traps() {
    let state = GameState::new().with_walls(&[Wall::horizontal(4, 0)]).unwrap();
    assert!(has_path(Cell::new(0, 4), 8, state.walls()));
}

#[test]
fn test_sealed_corridor_has_no_path() {
    let mut walls = WallSet::new();
    for wall in corridor_walls(4) {
        walls.insert(wall);
    }
    assert!(has_path(Cell::new(0, 4), 8, &walls));

    walls.insert(Wall::horizontal(4, 6));
    assert!(!has_path(Cell::new(0, 4), 8, &walls));
    // The outside of the corridor is unaffected
    assert!(has_path(Cell::new(0, 0), 8, &walls));
}

#[test]
fn test_full_row_barrier_disconnects() {
    // Four horizontal walls span columns 0..=7 below row 3, column 8 stays open
    let mut walls = WallSet::new();
    for x in [0, 2, 4, 6] {
        walls.insert(Wall::horizontal(x, 3));
    }
    assert!(has_path(Cell::new(0, 0), 8, &walls), "Column 8 is still open");

    // Fence column 8 off for rows 0..=3
    walls.insert(Wall::vertical(7, 0));
    walls.insert(Wall::vertical(7, 2));
    assert!(!has_path(Cell::new(0, 0), 8, &walls));
    assert!(has_path(Cell::new(0, 8), 8, &walls));
}

#[test]
fn test_pawns_do_not_block_connectivity() {
    // Player two sits on the only exit of player one's corridor
    let state = board_with((0, 4), (8, 4), PlayerId::One)
        .with_walls(&corridor_walls(4))
        .unwrap();
    assert!(has_path(state.cell_of(PlayerId::One), 8, state.walls()));
}

#[test]
fn test_wall_keeps_paths_open_checks_both_players() {
    // Player two in a corridor closed at the bottom; a wall at the top seals it
    let mut walls = corridor_walls(4);
    walls.push(Wall::horizontal(4, 7));
    let state = board_with((0, 0), (7, 4), PlayerId::One).with_walls(&walls).unwrap();

    let sealing = Wall::horizontal(3, 0);
    assert!(!wall_keeps_paths_open(&state, sealing));
    assert!(wall_keeps_paths_open(&state, Wall::horizontal(0, 0)));
    assert!(!wall_keeps_paths_open(&state, Wall::horizontal(8, 0)));

    let err = state.validate_wall(PlayerId::One, sealing).unwrap_err();
    assert_eq!(
        err,
        GameError::IllegalWall { wall: sealing, reason: WallRejection::BlocksPath(PlayerId::Two) }
    );
}
