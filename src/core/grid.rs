//! Nine-bit position sets over a 3×3 grid.
//!
//! `GridSet` is deliberately level-agnostic: the same type describes which
//! cells of a sub-board a player occupies and which sub-boards of the whole
//! board are won or closed. That sharing is what lets one win predicate
//! serve both levels (see [`crate::core::lines`]).

use serde::{Deserialize, Serialize};

/// A set of positions 0..=8 on a 3×3 grid, stored as the low nine bits of
/// a `u16`. Bit `i` set means position `i` is in the set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSet(u16);

impl GridSet {
    /// Mask of all nine valid bits.
    const MASK: u16 = 0b1_1111_1111;

    /// The empty set.
    pub const EMPTY: GridSet = GridSet(0);

    /// The set of all nine positions.
    pub const ALL: GridSet = GridSet(Self::MASK);

    /// Build a set from raw bits. Bits above the ninth are discarded.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    /// Get the raw nine-bit value.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// The singleton set containing only `index`.
    #[must_use]
    pub const fn single(index: u8) -> Self {
        assert!(index < 9, "grid position must be in 0..=8");
        Self(1 << index)
    }

    /// Return this set with `index` added.
    #[must_use]
    pub const fn with(self, index: u8) -> Self {
        assert!(index < 9, "grid position must be in 0..=8");
        Self(self.0 | (1 << index))
    }

    /// Add `index` to the set in place.
    pub fn insert(&mut self, index: u8) {
        *self = self.with(index);
    }

    /// Check whether `index` is in the set.
    #[must_use]
    pub const fn contains(self, index: u8) -> bool {
        index < 9 && (self.0 >> index) & 1 == 1
    }

    /// Check whether every position of `other` is also in `self`.
    #[must_use]
    pub const fn contains_all(self, other: GridSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// The positions not in this set.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    /// Number of positions in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Check whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether the set holds all nine positions.
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == Self::MASK
    }

    /// Iterate over the positions in the set, ascending.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..9).filter(move |&i| self.contains(i))
    }
}

impl std::ops::BitOr for GridSet {
    type Output = GridSet;

    fn bitor(self, rhs: GridSet) -> GridSet {
        GridSet(self.0 | rhs.0)
    }
}

impl std::fmt::Display for GridSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (n, i) in self.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            write!(f, "{i}")?;
        }
        write!(f, "}}")
    }
}
