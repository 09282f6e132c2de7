//! Types for cells, digits, regions and the puzzle grid itself.

mod cell;
mod digit;
mod puzzle;
mod region;

pub use self::cell::Cell;
pub use self::digit::Digit;
pub use self::puzzle::{FancyGrid, GridParseError, Puzzle};
pub use self::region::{Pos, Region, RegionKind};
