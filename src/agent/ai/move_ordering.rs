// Pawn move ordering
// Moves that shorten the mover's route come first so alpha-beta sees the
// strongest replies early.

use crate::game_repr::{legal_moves, path_distance, Cell, GameState, PlayerId};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Distance used for a destination with no route. Never happens in legal
/// positions since walls keep both players connected.
const NO_ROUTE: u32 = u32::MAX;

/// Pawn moves of `player`, best first. Ties keep generation order
/// (up, down, left, right).
pub fn ordered_moves(state: &GameState, player: PlayerId) -> SmallVec<[Cell; 4]> {
    let mut moves = legal_moves(state, player);
    order_by_distance(state, player, &mut moves);
    moves
}

/// A random subset of at most `sample` moves, ordered like [`ordered_moves`].
pub fn sampled_moves<R: Rng>(
    state: &GameState,
    player: PlayerId,
    sample: usize,
    rng: &mut R,
) -> SmallVec<[Cell; 4]> {
    let all = legal_moves(state, player);
    if all.len() <= sample {
        let mut moves = all;
        order_by_distance(state, player, &mut moves);
        return moves;
    }

    let mut moves: SmallVec<[Cell; 4]> = all.choose_multiple(rng, sample).copied().collect();
    order_by_distance(state, player, &mut moves);
    moves
}

fn order_by_distance(state: &GameState, player: PlayerId, moves: &mut [Cell]) {
    let goal_row = state.player(player).goal_row;
    let mut scored: SmallVec<[(u32, Cell); 4]> = moves
        .iter()
        .map(|&cell| {
            let distance = path_distance(cell, goal_row, state.walls()).unwrap_or(NO_ROUTE);
            (distance, cell)
        })
        .collect();

    // Stable sort on distance only
    scored.sort_by_key(|&(distance, _)| distance);

    for (slot, (_, cell)) in moves.iter_mut().zip(scored) {
        *slot = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Wall;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forward_move_first_on_open_board() {
        let state = GameState::new();
        let moves = ordered_moves(&state, PlayerId::One);
        assert_eq!(moves[0], Cell::new(1, 4));
        // Sideways moves tie and keep left-before-right order
        assert_eq!(&moves[1..], &[Cell::new(0, 3), Cell::new(0, 5)]);
    }

    #[test]
    fn test_wall_pushes_forward_move_back() {
        // (1,4) is boxed in on three sides, stepping down leads into a pocket
        let state = GameState::new()
            .with_walls(&[Wall::vertical(3, 1), Wall::vertical(4, 1), Wall::horizontal(4, 1)])
            .unwrap();
        let moves = ordered_moves(&state, PlayerId::One);
        assert_eq!(moves.as_slice(), &[Cell::new(0, 3), Cell::new(0, 5), Cell::new(1, 4)]);
    }

    #[test]
    fn test_sample_is_subset() {
        let state = GameState::custom(Cell::new(4, 4), Cell::new(8, 8), PlayerId::One).unwrap();
        let all = legal_moves(&state, PlayerId::One);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let sample = sampled_moves(&state, PlayerId::One, 2, &mut rng);
            assert_eq!(sample.len(), 2);
            assert!(sample.iter().all(|cell| all.contains(cell)));
            assert_ne!(sample[0], sample[1]);
        }
    }
}
