//! The three-in-a-row predicate.
//!
//! One fixed table of the eight winning lines of a 3×3 grid, and one
//! superset test against it. The predicate knows nothing about what the
//! nine positions represent, so the same function decides a sub-board win
//! (over cells) and a whole-game win (over sub-boards).

use super::grid::GridSet;

/// The eight winning lines of a 3×3 grid, row-major indices.
///
/// Bit `i` of each mask is position `i`:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
pub const LINES: [GridSet; 8] = [
    GridSet::from_bits(0b000_000_111), // row 0,1,2
    GridSet::from_bits(0b000_111_000), // row 3,4,5
    GridSet::from_bits(0b111_000_000), // row 6,7,8
    GridSet::from_bits(0b001_001_001), // column 0,3,6
    GridSet::from_bits(0b010_010_010), // column 1,4,7
    GridSet::from_bits(0b100_100_100), // column 2,5,8
    GridSet::from_bits(0b100_010_001), // diagonal 0,4,8
    GridSet::from_bits(0b001_010_100), // diagonal 2,4,6
];

/// Check whether `set` contains a complete line.
///
/// True iff `set` is a superset of one of the eight [`LINES`]. Extra
/// positions beyond the line never hurt.
///
/// ```
/// use rust_uttt::{has_line, GridSet};
///
/// let diagonal = GridSet::single(0).with(4).with(8);
/// assert!(has_line(diagonal));
/// assert!(has_line(diagonal.with(1)));
/// assert!(!has_line(GridSet::single(0).with(4)));
/// ```
#[must_use]
pub fn has_line(set: GridSet) -> bool {
    LINES.iter().any(|&line| set.contains_all(line))
}
