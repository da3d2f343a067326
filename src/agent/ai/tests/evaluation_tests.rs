// Tests for the three evaluation tiers

use crate::agent::ai::{evaluate, EvaluationTier, Evaluator, WIN_SCORE};
use crate::game_repr::{GameState, PlayerId, Wall};
use super::board_with;

const ALL_TIERS: [EvaluationTier; 3] =
    [EvaluationTier::Base, EvaluationTier::Blocking, EvaluationTier::Advanced];

#[test]
fn test_terminal_positions() {
    let won = board_with((8, 4), (4, 4), PlayerId::Two);

    for tier in ALL_TIERS {
        assert_eq!(evaluate(&won, PlayerId::One, tier), WIN_SCORE, "{:?}", tier);
        assert_eq!(evaluate(&won, PlayerId::Two, tier), -WIN_SCORE, "{:?}", tier);
    }
}

#[test]
fn test_shorter_route_scores_higher() {
    let ahead = board_with((4, 4), (6, 0), PlayerId::Two);
    let behind = board_with((2, 4), (6, 0), PlayerId::Two);

    for tier in ALL_TIERS {
        let a = evaluate(&ahead, PlayerId::One, tier);
        let b = evaluate(&behind, PlayerId::One, tier);
        assert!(a > b, "{:?}: {} should beat {}", tier, a, b);
    }
}

#[test]
fn test_lengthening_opponent_route_helps() {
    let open = board_with((0, 4), (8, 0), PlayerId::One);
    // Right in front of player two's pawn and far from player one's column,
    // budgets untouched
    let blocked = open.clone().with_walls(&[Wall::horizontal(0, 7)]).unwrap();

    for tier in ALL_TIERS {
        let before = evaluate(&open, PlayerId::One, tier);
        let after = evaluate(&blocked, PlayerId::One, tier);
        assert!(after > before, "{:?}: {} should beat {}", tier, after, before);

        // And it hurts player two
        assert!(evaluate(&blocked, PlayerId::Two, tier) < evaluate(&open, PlayerId::Two, tier));
    }
}

#[test]
fn test_blocking_weighs_opponent_distance_more() {
    // One more step for player two is worth more than one step less for us
    let evaluator = Evaluator::new(EvaluationTier::Blocking);
    let base = board_with((2, 4), (6, 0), PlayerId::One);
    let we_advance = board_with((3, 4), (6, 0), PlayerId::One);
    let they_retreat = board_with((2, 4), (7, 0), PlayerId::One);

    let start = evaluator.evaluate(&base, PlayerId::One);
    let advance_gain = evaluator.evaluate(&we_advance, PlayerId::One) - start;
    let retreat_gain = evaluator.evaluate(&they_retreat, PlayerId::One) - start;
    assert!(retreat_gain > advance_gain, "{} vs {}", retreat_gain, advance_gain);
}

#[test]
fn test_blocking_proximity_bonus_needs_distant_opponent() {
    // Score gained by holding one wall instead of none, pawns fixed
    let evaluator = Evaluator::new(EvaluationTier::Blocking);
    let wall_gain = |p1: (u8, u8), p2: (u8, u8)| {
        let with_wall = board_with(p1, p2, PlayerId::One).with_walls_remaining(PlayerId::One, 1);
        let without = board_with(p1, p2, PlayerId::One).with_walls_remaining(PlayerId::One, 0);
        evaluator.evaluate(&with_wall, PlayerId::One) - evaluator.evaluate(&without, PlayerId::One)
    };

    // Opponent 5 and 3 steps from row 0: the bonus applies
    let far = wall_gain((4, 4), (5, 4));
    let boundary = wall_gain((2, 4), (3, 4));
    // Opponent 2 steps from row 0: wall economy only
    let near = wall_gain((1, 4), (2, 4));

    assert_eq!(far, boundary);
    assert_eq!(far - near, 30, "far {} near {}", far, near);
}

#[test]
fn test_advanced_conserves_walls_in_opening() {
    let evaluator = Evaluator::new(EvaluationTier::Advanced);
    let full = GameState::new();
    let spent = GameState::new().with_walls_remaining(PlayerId::One, 9);

    assert!(evaluator.evaluate(&full, PlayerId::One) > evaluator.evaluate(&spent, PlayerId::One));
}

#[test]
fn test_advanced_endgame_wall_economy() {
    let evaluator = Evaluator::new(EvaluationTier::Advanced);

    // Behind in the race: walls left unspent are worth less than walls used
    let behind = board_with((2, 4), (2, 0), PlayerId::One);
    let hoarding = behind.clone().with_walls_remaining(PlayerId::One, 10);
    let spending = behind.with_walls_remaining(PlayerId::One, 2);
    assert!(evaluator.evaluate(&spending, PlayerId::One) > evaluator.evaluate(&hoarding, PlayerId::One));

    // Ahead in the race: keep them
    let ahead = board_with((6, 4), (6, 0), PlayerId::One);
    let hoarding = ahead.clone().with_walls_remaining(PlayerId::One, 10);
    let spending = ahead.with_walls_remaining(PlayerId::One, 2);
    assert!(evaluator.evaluate(&hoarding, PlayerId::One) > evaluator.evaluate(&spending, PlayerId::One));
}

#[test]
fn test_evaluation_is_deterministic() {
    let state = GameState::new()
        .with_walls(&[Wall::horizontal(3, 2), Wall::vertical(5, 5)])
        .unwrap();

    for tier in ALL_TIERS {
        let evaluator = Evaluator::new(tier);
        assert_eq!(
            evaluator.evaluate(&state, PlayerId::Two),
            evaluator.evaluate(&state, PlayerId::Two)
        );
    }
}
