use std::fmt;

use super::cell::{Cell, BOARD_SIZE};

/// Walls are anchored on the 8x8 lattice of interior grid intersections.
pub const WALL_SLOTS: u8 = BOARD_SIZE - 1;

/// Budget each player starts with.
pub const WALLS_PER_PLAYER: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Lies along a row boundary; blocks vertical steps.
    Horizontal,
    /// Lies along a column boundary; blocks horizontal steps.
    Vertical,
}

/// A two-cell wall. `x` is the column coordinate, `y` the row coordinate.
///
/// A horizontal wall at `(x, y)` sits below row `y`, spanning columns `x` and
/// `x + 1`. A vertical wall at `(x, y)` sits right of column `x`, spanning rows
/// `y` and `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wall {
    pub x: u8,
    pub y: u8,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(x: u8, y: u8, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    pub const fn vertical(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    pub fn in_bounds(&self) -> bool {
        self.x < WALL_SLOTS && self.y < WALL_SLOTS
    }

    /// Same orientation and overlapping two-cell span.
    pub fn conflicts_with(&self, other: &Wall) -> bool {
        if self.orientation != other.orientation {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.y == other.y && self.x.abs_diff(other.x) <= 1,
            Orientation::Vertical => self.x == other.x && self.y.abs_diff(other.y) <= 1,
        }
    }

    /// Every in-bounds wall slot, horizontal ones first.
    pub fn all_slots() -> impl Iterator<Item = Wall> {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(|orientation| {
                (0..WALL_SLOTS).flat_map(move |y| (0..WALL_SLOTS).map(move |x| Wall::new(x, y, orientation)))
            })
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        };
        write!(f, "{}[x={},y={}]", tag, self.x, self.y)
    }
}

/// Placed walls in insertion order, mirrored into a slot table so that
/// [`WallSet::blocks_step`] does not scan the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WallSet {
    placed: Vec<Wall>,
    /// Indexed `[y][x]`.
    horizontal: [[bool; WALL_SLOTS as usize]; WALL_SLOTS as usize],
    /// Indexed `[y][x]`.
    vertical: [[bool; WALL_SLOTS as usize]; WALL_SLOTS as usize],
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.placed.iter()
    }

    pub fn contains(&self, wall: &Wall) -> bool {
        wall.in_bounds() && self.slot(wall.orientation, wall.x, wall.y)
    }

    /// First placed wall that `wall` conflicts with.
    pub fn conflicting(&self, wall: &Wall) -> Option<Wall> {
        self.placed.iter().copied().find(|placed| wall.conflicts_with(placed))
    }

    /// Copy of this set with `wall` added, for "what if" checks.
    pub fn with(&self, wall: Wall) -> WallSet {
        let mut walls = self.clone();
        walls.insert(wall);
        walls
    }

    /// Adds a wall without legality checks. Callers validate first.
    pub(crate) fn insert(&mut self, wall: Wall) {
        debug_assert!(wall.in_bounds(), "wall out of bounds: {}", wall);
        *self.slot_mut(wall.orientation, wall.x, wall.y) = true;
        self.placed.push(wall);
    }

    pub(crate) fn remove(&mut self, wall: &Wall) -> bool {
        match self.placed.iter().rposition(|placed| placed == wall) {
            Some(idx) => {
                self.placed.remove(idx);
                *self.slot_mut(wall.orientation, wall.x, wall.y) = false;
                true
            }
            None => false,
        }
    }

    /// Whether a single orthogonal step between `from` and `to` crosses a wall.
    ///
    /// A horizontal step `(i,j) -> (i,j±1)` is cut by a vertical wall with
    /// `x = min(j, j±1)` and `y <= i <= y+1`. A vertical step `(i,j) -> (i±1,j)`
    /// is cut by a horizontal wall with `y = min(i, i±1)` and `x <= j <= x+1`.
    /// Cells that are not orthogonal neighbours are never reported as blocked.
    pub fn blocks_step(&self, from: Cell, to: Cell) -> bool {
        if from.row == to.row && from.col.abs_diff(to.col) == 1 {
            let x = from.col.min(to.col);
            self.any_span(Orientation::Vertical, x, from.row)
        } else if from.col == to.col && from.row.abs_diff(to.row) == 1 {
            let y = from.row.min(to.row);
            self.any_span(Orientation::Horizontal, y, from.col)
        } else {
            false
        }
    }

    /// Checks the two slots along `fixed` whose span covers `along`.
    fn any_span(&self, orientation: Orientation, fixed: u8, along: u8) -> bool {
        if fixed >= WALL_SLOTS {
            return false;
        }
        let lo = along.saturating_sub(1);
        let hi = along.min(WALL_SLOTS - 1);
        (lo..=hi).any(|start| match orientation {
            Orientation::Vertical => self.slot(orientation, fixed, start),
            Orientation::Horizontal => self.slot(orientation, start, fixed),
        })
    }

    fn slot(&self, orientation: Orientation, x: u8, y: u8) -> bool {
        match orientation {
            Orientation::Horizontal => self.horizontal[y as usize][x as usize],
            Orientation::Vertical => self.vertical[y as usize][x as usize],
        }
    }

    fn slot_mut(&mut self, orientation: Orientation, x: u8, y: u8) -> &mut bool {
        match orientation {
            Orientation::Horizontal => &mut self.horizontal[y as usize][x as usize],
            Orientation::Vertical => &mut self.vertical[y as usize][x as usize],
        }
    }
}

impl<'a> IntoIterator for &'a WallSet {
    type Item = &'a Wall;
    type IntoIter = std::slice::Iter<'a, Wall>;

    fn into_iter(self) -> Self::IntoIter {
        self.placed.iter()
    }
}
