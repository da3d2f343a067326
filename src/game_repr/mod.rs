mod cell;
mod connectivity;
mod error;
mod moves;
mod pathfinding;
mod state;
mod wall;

#[cfg(test)]
mod tests;

pub use cell::*;
pub use connectivity::*;
pub use error::*;
pub use moves::*;
pub use pathfinding::*;
pub use state::*;
pub use wall::*;
