use std::fmt;

use super::cell::{Cell, PlayerId, BOARD_SIZE};
use super::connectivity::has_path;
use super::error::{GameError, WallRejection};
use super::moves::{legal_moves, Action};
use super::wall::{Wall, WallSet, WALLS_PER_PLAYER};

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND STATE TRANSITIONS
 */

const CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub id: PlayerId,
    pub cell: Cell,
    pub walls_remaining: u8,
    pub goal_row: u8,
}

impl PlayerState {
    fn new(id: PlayerId, cell: Cell) -> Self {
        Self {
            id,
            cell,
            walls_remaining: WALLS_PER_PLAYER,
            goal_row: id.goal_row(),
        }
    }

    pub fn at_goal(&self) -> bool {
        self.cell.row == self.goal_row
    }

    /// Rows still to cover, ignoring walls.
    pub fn rows_to_goal(&self) -> u32 {
        self.cell.row.abs_diff(self.goal_row) as u32
    }
}

/// Board, walls, both players and the side to move.
///
/// `apply_action` is the validated entry point. The search uses the trusted
/// `make_action_undoable` / `unmake_action` pair instead and must keep every
/// make matched by an unmake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Occupancy, row-major. Kept in sync with `players`.
    grid: [Option<PlayerId>; CELLS],
    walls: WallSet,
    players: [PlayerState; 2],
    to_move: PlayerId,
    ply: u32,
}

/// What `unmake_action` needs to roll an action back.
#[derive(Debug, Clone, Copy)]
pub struct UndoInfo {
    mover: PlayerId,
    previous_cell: Cell,
    previous_walls_remaining: u8,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Start position: pawns on (0,4) and (8,4), ten walls each, player one to move.
    pub fn new() -> Self {
        let one = PlayerState::new(PlayerId::One, PlayerId::One.start_cell());
        let two = PlayerState::new(PlayerId::Two, PlayerId::Two.start_cell());
        let mut grid = [None; CELLS];
        grid[one.cell.index()] = Some(PlayerId::One);
        grid[two.cell.index()] = Some(PlayerId::Two);

        Self {
            grid,
            walls: WallSet::new(),
            players: [one, two],
            to_move: PlayerId::One,
            ply: 0,
        }
    }

    /// Position with both pawns placed by hand and no walls.
    pub fn custom(player_one: Cell, player_two: Cell, to_move: PlayerId) -> Result<Self, GameError> {
        if !player_one.in_bounds() {
            return Err(GameError::IllegalMove { player: PlayerId::One, target: player_one });
        }
        if !player_two.in_bounds() || player_two == player_one {
            return Err(GameError::IllegalMove { player: PlayerId::Two, target: player_two });
        }

        let mut state = Self::new();
        state.grid = [None; CELLS];
        state.players[0].cell = player_one;
        state.players[1].cell = player_two;
        state.grid[player_one.index()] = Some(PlayerId::One);
        state.grid[player_two.index()] = Some(PlayerId::Two);
        state.to_move = to_move;
        Ok(state)
    }

    /// Adds pre-placed walls. Bounds, overlap and connectivity are checked;
    /// no player's budget is charged.
    pub fn with_walls(mut self, walls: &[Wall]) -> Result<Self, GameError> {
        for &wall in walls {
            self.check_wall_geometry(wall)?;
            self.walls.insert(wall);
        }
        Ok(self)
    }

    pub fn with_walls_remaining(mut self, player: PlayerId, walls_remaining: u8) -> Self {
        self.players[player.index()].walls_remaining = walls_remaining;
        self
    }

    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    pub fn cell_of(&self, id: PlayerId) -> Cell {
        self.players[id.index()].cell
    }

    pub fn walls_remaining(&self, id: PlayerId) -> u8 {
        self.players[id.index()].walls_remaining
    }

    pub fn occupant(&self, cell: Cell) -> Option<PlayerId> {
        if cell.in_bounds() {
            self.grid[cell.index()]
        } else {
            None
        }
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.grid[cell.index()].is_none()
    }

    /// Player standing on its goal row, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.at_goal()).map(|p| p.id)
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Validates `action` for the side to move and applies it.
    pub fn apply_action(&mut self, action: Action) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let player = self.to_move;
        match action {
            Action::Move(target) => {
                if !self.is_empty(target) || !legal_moves(self, player).contains(&target) {
                    return Err(GameError::IllegalMove { player, target });
                }
            }
            Action::PlaceWall(wall) => self.validate_wall(player, wall)?,
        }

        self.make_action_undoable(action);
        Ok(())
    }

    /// Full legality check for `player` placing `wall`, including budget and
    /// connectivity for both players.
    pub fn validate_wall(&self, player: PlayerId, wall: Wall) -> Result<(), GameError> {
        if wall.in_bounds() && self.walls_remaining(player) == 0 {
            return Err(GameError::IllegalWall { wall, reason: WallRejection::NoWallsRemaining });
        }
        self.check_wall_geometry(wall)
    }

    fn check_wall_geometry(&self, wall: Wall) -> Result<(), GameError> {
        let reject = |reason| Err(GameError::IllegalWall { wall, reason });

        if !wall.in_bounds() {
            return reject(WallRejection::OutOfBounds);
        }
        if self.walls.contains(&wall) {
            return reject(WallRejection::AlreadyPlaced);
        }
        if let Some(other) = self.walls.conflicting(&wall) {
            return reject(WallRejection::Conflict(other));
        }

        let hypothetical = self.walls.with(wall);
        for player in &self.players {
            if !has_path(player.cell, player.goal_row, &hypothetical) {
                return reject(WallRejection::BlocksPath(player.id));
            }
        }
        Ok(())
    }

    /// Applies a trusted action and returns what is needed to take it back.
    pub fn make_action_undoable(&mut self, action: Action) -> UndoInfo {
        let mover = self.to_move;
        let previous_cell = self.cell_of(mover);
        let previous_walls_remaining = self.walls_remaining(mover);

        match action {
            Action::Move(target) => {
                self.grid[previous_cell.index()] = None;
                self.grid[target.index()] = Some(mover);
                self.players[mover.index()].cell = target;
            }
            Action::PlaceWall(wall) => {
                self.walls.insert(wall);
                let remaining = &mut self.players[mover.index()].walls_remaining;
                *remaining = remaining.saturating_sub(1);
            }
        }

        self.to_move = mover.opponent();
        self.ply += 1;
        UndoInfo {
            mover,
            previous_cell,
            previous_walls_remaining,
        }
    }

    pub fn unmake_action(&mut self, action: Action, undo: UndoInfo) {
        let mover = undo.mover;

        match action {
            Action::Move(target) => {
                self.grid[target.index()] = None;
                self.grid[undo.previous_cell.index()] = Some(mover);
                self.players[mover.index()].cell = undo.previous_cell;
            }
            Action::PlaceWall(wall) => {
                self.walls.remove(&wall);
                self.players[mover.index()].walls_remaining = undo.previous_walls_remaining;
            }
        }

        self.to_move = mover;
        self.ply -= 1;
    }

    /// Hands the turn over without acting. Search only, for a pawn with no
    /// move; undone by calling it again.
    pub(crate) fn toggle_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new(row, col);
                let symbol = match self.occupant(cell) {
                    Some(PlayerId::One) => '1',
                    Some(PlayerId::Two) => '2',
                    None => '.',
                };
                write!(f, "{}", symbol)?;
                if col + 1 < BOARD_SIZE {
                    let blocked = self.walls.blocks_step(cell, Cell::new(row, col + 1));
                    write!(f, "{}", if blocked { '|' } else { ' ' })?;
                }
            }
            writeln!(f)?;

            if row + 1 < BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let blocked = self.walls.blocks_step(Cell::new(row, col), Cell::new(row + 1, col));
                    write!(f, "{} ", if blocked { '-' } else { ' ' })?;
                }
                writeln!(f)?;
            }
        }
        write!(
            f,
            "to move: {}  walls: {}/{}",
            self.to_move,
            self.walls_remaining(PlayerId::One),
            self.walls_remaining(PlayerId::Two)
        )
    }
}
