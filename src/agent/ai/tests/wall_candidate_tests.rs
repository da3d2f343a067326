// Tests for wall candidate selection

use crate::agent::ai::{select_wall_candidates, slots_across, Difficulty};
use crate::game_repr::{shortest_path, Cell, GameState, PlayerId, Wall, WallSet};
use super::board_with;

#[test]
fn test_slots_across_vertical_step() {
    let slots = slots_across(Cell::new(3, 4), Cell::new(4, 4));
    assert_eq!(slots.as_slice(), &[Wall::horizontal(3, 3), Wall::horizontal(4, 3)]);

    // Direction does not matter
    let reversed = slots_across(Cell::new(4, 4), Cell::new(3, 4));
    assert_eq!(slots, reversed);
}

#[test]
fn test_slots_across_horizontal_step() {
    let slots = slots_across(Cell::new(2, 0), Cell::new(2, 1));
    assert_eq!(slots.as_slice(), &[Wall::vertical(0, 1), Wall::vertical(0, 2)]);
}

#[test]
fn test_slots_across_board_edges() {
    // Left edge: no slot starts at x = -1
    assert_eq!(slots_across(Cell::new(0, 0), Cell::new(1, 0)).as_slice(), &[Wall::horizontal(0, 0)]);
    // Right edge: no slot starts at x = 8
    assert_eq!(slots_across(Cell::new(4, 8), Cell::new(5, 8)).as_slice(), &[Wall::horizontal(7, 4)]);
    // Top edge for vertical walls
    assert_eq!(slots_across(Cell::new(0, 3), Cell::new(0, 4)).as_slice(), &[Wall::vertical(3, 0)]);
}

#[test]
fn test_slots_across_rejects_non_steps() {
    assert!(slots_across(Cell::new(0, 0), Cell::new(2, 0)).is_empty());
    assert!(slots_across(Cell::new(0, 0), Cell::new(1, 1)).is_empty());
    assert!(slots_across(Cell::new(3, 3), Cell::new(3, 3)).is_empty());
}

#[test]
fn test_slots_across_off_board_cells() {
    assert!(slots_across(Cell::new(200, 0), Cell::new(0, 200)).is_empty());
    assert!(slots_across(Cell::new(255, 255), Cell::new(0, 0)).is_empty());
    assert!(slots_across(Cell::new(8, 8), Cell::new(9, 8)).is_empty());
}

#[test]
fn test_candidates_are_legal_positive_and_sorted() {
    // Separate columns, so walls in front of player two cost player one nothing
    let state = board_with((0, 0), (8, 4), PlayerId::One);

    for &difficulty in Difficulty::all() {
        let profile = difficulty.profile();
        let candidates = select_wall_candidates(&state, PlayerId::One, &profile);

        assert!(!candidates.is_empty(), "{}: the open board has useful walls", difficulty);
        assert!(candidates.len() <= profile.max_wall_candidates);
        for candidate in &candidates {
            assert!(candidate.score > 0);
            assert!(state.validate_wall(PlayerId::One, candidate.wall).is_ok(), "{}", candidate.wall);
        }
        assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));
    }
}

#[test]
fn test_candidates_block_the_opponent_route() {
    let state = board_with((2, 2), (6, 6), PlayerId::One);
    let profile = Difficulty::Medium.profile();
    let them = state.player(PlayerId::Two);
    let route = shortest_path(them.cell, them.goal_row, state.walls()).unwrap();

    let candidates = select_wall_candidates(&state, PlayerId::One, &profile);
    assert!(!candidates.is_empty());

    for candidate in &candidates {
        let alone = WallSet::new().with(candidate.wall);
        let on_route = route
            .path
            .windows(2)
            .take(profile.path_segments)
            .any(|step| alone.blocks_step(step[0], step[1]));
        assert!(on_route, "{} is not on the opponent's route", candidate.wall);
        assert!(candidate.opponent_gain >= 0);
    }
}

#[test]
fn test_best_candidate_slows_opponent() {
    let state = board_with((0, 0), (8, 4), PlayerId::One);
    let candidates = select_wall_candidates(&state, PlayerId::One, &Difficulty::Hard.profile());
    assert!(candidates[0].opponent_gain >= 1);
}

#[test]
fn test_shared_column_walls_are_not_worth_it() {
    // On the opening board every wall across column 4 slows both pawns alike
    let state = GameState::new();
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let candidates = select_wall_candidates(&state, PlayerId::One, &difficulty.profile());
        assert!(candidates.is_empty(), "{}: {:?}", difficulty, candidates);
    }
}

#[test]
fn test_no_candidates_without_budget() {
    let state = GameState::new().with_walls_remaining(PlayerId::One, 0);
    for &difficulty in Difficulty::all() {
        assert!(select_wall_candidates(&state, PlayerId::One, &difficulty.profile()).is_empty());
    }
}

#[test]
fn test_candidates_never_seal_a_player() {
    // Player two's column is nearly closed off; sealing walls must be filtered
    let mut walls = Vec::new();
    for y in [2, 4, 6] {
        walls.push(Wall::vertical(3, y));
        walls.push(Wall::vertical(4, y));
    }
    let state = board_with((0, 0), (8, 4), PlayerId::One).with_walls(&walls).unwrap();

    for &difficulty in Difficulty::all() {
        for candidate in select_wall_candidates(&state, PlayerId::One, &difficulty.profile()) {
            assert!(
                state.validate_wall(PlayerId::One, candidate.wall).is_ok(),
                "{} offered illegal {}",
                difficulty,
                candidate.wall
            );
        }
    }
}
