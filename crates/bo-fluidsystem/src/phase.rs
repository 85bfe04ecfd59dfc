//! Canonical phases and the mapping onto the active subset of a run.

use std::fmt;

use bo_core::{BoError, BoResult};
use serde::{Deserialize, Serialize};

/// Fluid phase in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Water = 0,
    Oil = 1,
    Gas = 2,
}

impl Phase {
    pub const COUNT: usize = 3;
    pub const ALL: [Phase; Phase::COUNT] = [Phase::Water, Phase::Oil, Phase::Gas];

    #[inline]
    pub fn canonical_index(self) -> usize {
        self as usize
    }

    pub fn from_canonical_index(index: usize) -> Option<Phase> {
        Phase::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Water => "water",
            Phase::Oil => "oil",
            Phase::Gas => "gas",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pseudo-component of the black-oil model (stock tank oil, surface gas, water).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Water,
    Oil,
    Gas,
}

/// Which phases take part in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivePhases {
    pub water: bool,
    pub oil: bool,
    pub gas: bool,
}

impl ActivePhases {
    pub fn all() -> Self {
        Self {
            water: true,
            oil: true,
            gas: true,
        }
    }

    pub fn contains(&self, phase: Phase) -> bool {
        match phase {
            Phase::Water => self.water,
            Phase::Oil => self.oil,
            Phase::Gas => self.gas,
        }
    }

    pub fn count(&self) -> usize {
        Phase::ALL.iter().filter(|&&p| self.contains(p)).count()
    }
}

const INACTIVE: usize = usize::MAX;

/// Bijection between canonical phases and compact active (storage) indices.
///
/// Active indices follow canonical order, so with all three phases active
/// the map is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseIndices {
    to_active: [usize; Phase::COUNT],
    to_canonical: [Phase; Phase::COUNT],
    num_active: usize,
}

impl PhaseIndices {
    pub fn new(active: ActivePhases) -> BoResult<Self> {
        let mut to_active = [INACTIVE; Phase::COUNT];
        let mut to_canonical = [Phase::Water; Phase::COUNT];
        let mut num_active = 0;
        for phase in Phase::ALL {
            if active.contains(phase) {
                to_active[phase.canonical_index()] = num_active;
                to_canonical[num_active] = phase;
                num_active += 1;
            }
        }
        if num_active == 0 {
            return Err(BoError::InvalidArg {
                what: "at least one phase must be active",
            });
        }
        Ok(Self {
            to_active,
            to_canonical,
            num_active,
        })
    }

    #[inline]
    pub fn is_active(&self, phase: Phase) -> bool {
        self.to_active[phase.canonical_index()] != INACTIVE
    }

    #[inline]
    pub fn num_active(&self) -> usize {
        self.num_active
    }

    /// Storage index of an active phase.
    #[inline]
    pub fn canonical_to_active(&self, phase: Phase) -> usize {
        debug_assert!(self.is_active(phase), "{phase} phase is not active");
        self.to_active[phase.canonical_index()]
    }

    /// Phase stored at `index`.
    #[inline]
    pub fn active_to_canonical(&self, index: usize) -> Phase {
        debug_assert!(
            index < self.num_active,
            "active index {index} out of range (num_active={})",
            self.num_active
        );
        self.to_canonical[index]
    }

    /// Active phases in storage order.
    pub fn active_phases(&self) -> impl Iterator<Item = Phase> + '_ {
        self.to_canonical[..self.num_active].iter().copied()
    }

    pub fn active_set(&self) -> ActivePhases {
        ActivePhases {
            water: self.is_active(Phase::Water),
            oil: self.is_active(Phase::Oil),
            gas: self.is_active(Phase::Gas),
        }
    }
}
