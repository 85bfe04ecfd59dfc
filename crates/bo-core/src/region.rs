use core::fmt;

use crate::{BoError, BoResult};

/// Compact PVT region index stored per evaluation point.
///
/// - `u16` keeps the per-cell footprint small
/// - the public API speaks `usize`; conversion is checked once at the boundary
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionIdx(u16);

impl RegionIdx {
    /// Largest number of PVT regions a run may declare.
    pub const MAX_REGIONS: usize = u16::MAX as usize + 1;

    /// Create a region index, rejecting values that do not fit the compact storage.
    pub fn from_index(index: usize) -> BoResult<Self> {
        u16::try_from(index)
            .map(Self)
            .map_err(|_| BoError::IndexOob {
                what: "pvt region",
                index,
                len: Self::MAX_REGIONS,
            })
    }

    /// Truncating constructor for hot paths where the index is already known to be valid.
    #[inline]
    pub fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::MAX_REGIONS, "pvt region index {index} too large");
        Self(index as u16)
    }

    /// Recover the 0-based index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for RegionIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionIdx({})", self.0)
    }
}

impl fmt::Display for RegionIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
