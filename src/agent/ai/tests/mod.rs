use crate::game_repr::{Cell, GameState, PlayerId, Wall};

// ==================== HELPER FUNCTIONS ====================

/// Position with both pawns placed by hand, no walls, `to_move` on turn
pub fn board_with(p1: (u8, u8), p2: (u8, u8), to_move: PlayerId) -> GameState {
    GameState::custom(Cell::new(p1.0, p1.1), Cell::new(p2.0, p2.1), to_move)
        .expect("test position should be valid")
}

/// Player one at (1,4) boxed in by walls with player two right below it and a
/// wall behind player two: player one has no pawn move.
pub fn stalled_player_one() -> GameState {
    board_with((1, 4), (2, 4), PlayerId::One)
        .with_walls(&[
            Wall::vertical(3, 0),
            Wall::vertical(4, 0),
            Wall::horizontal(4, 0),
            Wall::horizontal(4, 2),
        ])
        .expect("test walls should be legal")
}

// ==================== TEST MODULES ====================

mod evaluation_tests;
mod wall_candidate_tests;
