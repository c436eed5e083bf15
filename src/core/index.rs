//! Index newtypes for the two grid levels.
//!
//! The whole board is a 3×3 grid of sub-boards, each itself a 3×3 grid of
//! cells. Both levels use row-major indices 0..=8:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! `SubBoardId` and `CellId` keep the two levels apart in signatures. The
//! one deliberate crossing point is [`CellId::sub_board`]: the cell just
//! played names the sub-board the opponent is sent to next.

use serde::{Deserialize, Serialize};

/// Index of one of the nine sub-boards, 0..=8 row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubBoardId(pub u8);

impl SubBoardId {
    /// Create a sub-board index. Panics if `id` is not in 0..=8.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 9, "sub-board index must be in 0..=8");
        Self(id)
    }

    /// Get the raw index as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all nine sub-board indices in row-major order.
    pub fn all() -> impl Iterator<Item = SubBoardId> {
        (0..9).map(SubBoardId)
    }
}

impl std::fmt::Display for SubBoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubBoard({})", self.0)
    }
}

/// Index of a cell within a sub-board, 0..=8 row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u8);

impl CellId {
    /// Create a cell index. Panics if `id` is not in 0..=8.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 9, "cell index must be in 0..=8");
        Self(id)
    }

    /// Get the raw index as a `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all nine cell indices in row-major order.
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..9).map(CellId)
    }

    /// The sub-board this cell position forwards the opponent to.
    ///
    /// Playing cell `k` of any sub-board obliges the opponent to answer in
    /// sub-board `k` (unless that sub-board is already closed).
    ///
    /// ```
    /// use rust_uttt::{CellId, SubBoardId};
    ///
    /// assert_eq!(CellId::new(4).sub_board(), SubBoardId::new(4));
    /// ```
    #[must_use]
    pub const fn sub_board(self) -> SubBoardId {
        SubBoardId(self.0)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}
