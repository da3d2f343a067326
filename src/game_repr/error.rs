use std::fmt;

use super::cell::{Cell, PlayerId};
use super::wall::Wall;

/// Why a wall placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallRejection {
    OutOfBounds,
    /// Overlaps the given, already placed wall.
    Conflict(Wall),
    AlreadyPlaced,
    NoWallsRemaining,
    /// Would leave this player without any route to its goal row.
    BlocksPath(PlayerId),
}

impl fmt::Display for WallRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallRejection::OutOfBounds => write!(f, "out of bounds"),
            WallRejection::Conflict(other) => write!(f, "overlaps {}", other),
            WallRejection::AlreadyPlaced => write!(f, "already placed"),
            WallRejection::NoWallsRemaining => write!(f, "no walls remaining"),
            WallRejection::BlocksPath(player) => write!(f, "cuts off player {}", player),
        }
    }
}

/// Errors returned by the rules engine. All of them are recoverable: re-prompt
/// the player, fall back to a random legal move, or score the game as a draw.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move for player {player} to {target}")]
    IllegalMove { player: PlayerId, target: Cell },

    #[error("illegal wall {wall}: {reason}")]
    IllegalWall { wall: Wall, reason: WallRejection },

    #[error("player {0} has no legal actions")]
    NoLegalActions(PlayerId),

    #[error("game is already over")]
    GameOver,

    #[error("it is not player {0}'s turn")]
    NotPlayersTurn(PlayerId),
}
