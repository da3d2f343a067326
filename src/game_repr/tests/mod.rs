use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Position with both pawns placed by hand, no walls, `to_move` on turn
pub fn board_with(p1: (u8, u8), p2: (u8, u8), to_move: PlayerId) -> GameState {
    GameState::custom(Cell::new(p1.0, p1.1), Cell::new(p2.0, p2.1), to_move)
        .expect("test position should be valid")
}

/// Same as [`board_with`] plus pre-placed walls
pub fn board_with_walls(p1: (u8, u8), p2: (u8, u8), to_move: PlayerId, walls: &[Wall]) -> GameState {
    board_with(p1, p2, to_move)
        .with_walls(walls)
        .expect("test walls should be legal")
}

/// Helper function to check if a destination exists in the move list
pub fn has_move(moves: &[Cell], row: u8, col: u8) -> bool {
    moves.contains(&Cell::new(row, col))
}

/// Vertical walls on both sides of `col`, covering rows 0..=7
pub fn corridor_walls(col: u8) -> Vec<Wall> {
    let mut walls = Vec::new();
    for y in [0, 2, 4, 6] {
        walls.push(Wall::vertical(col - 1, y));
        walls.push(Wall::vertical(col, y));
    }
    walls
}

// ==================== TEST MODULES ====================

mod connectivity;
