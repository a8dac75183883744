//! The four-node settlement chain and the bicycle corridor.
//!
//! ```text
//! Vancouver ──(ferry)── Gibsons ──(corridor)── Roberts Creek ──(road)── Sechelt
//! ```
//!
//! The ferry lands at Gibsons, so every coast settlement is reached by riding
//! up the coast road from the Gibsons end.  A corridor is described by how far
//! it extends along that road.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Settlement ────────────────────────────────────────────────────────────────

/// One of the four settlements in the model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Settlement {
    Vancouver,
    Gibsons,
    RobertsCreek,
    Sechelt,
}

impl Settlement {
    pub const ALL: [Settlement; 4] = [
        Settlement::Vancouver,
        Settlement::Gibsons,
        Settlement::RobertsCreek,
        Settlement::Sechelt,
    ];

    /// The three settlements on the far side of the ferry, in road order.
    pub const COAST: [Settlement; 3] = [
        Settlement::Gibsons,
        Settlement::RobertsCreek,
        Settlement::Sechelt,
    ];

    /// `true` for the three settlements across the ferry from Vancouver.
    #[inline]
    pub fn is_coast(self) -> bool {
        !matches!(self, Settlement::Vancouver)
    }

    /// Road position counted from the ferry terminal (Gibsons = 1).
    /// `None` for Vancouver.
    #[inline]
    pub fn coast_position(self) -> Option<u8> {
        match self {
            Settlement::Vancouver    => None,
            Settlement::Gibsons      => Some(1),
            Settlement::RobertsCreek => Some(2),
            Settlement::Sechelt      => Some(3),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Settlement::Vancouver    => "vancouver",
            Settlement::Gibsons      => "gibsons",
            Settlement::RobertsCreek => "roberts_creek",
            Settlement::Sechelt      => "sechelt",
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Corridor ──────────────────────────────────────────────────────────────────

/// How far the bicycle corridor extends from the Gibsons ferry terminal.
///
/// Fixed before the simulation starts and read-only throughout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corridor {
    /// No path at all.
    #[default]
    None,
    /// Paved from Gibsons through Roberts Creek.
    ToRobertsCreek,
    /// Paved all the way to Sechelt.
    ToSechelt,
}

impl Corridor {
    pub const ALL: [Corridor; 3] = [Corridor::None, Corridor::ToRobertsCreek, Corridor::ToSechelt];

    /// Furthest road position the corridor reaches (0 = nothing paved).
    #[inline]
    pub fn reach(self) -> u8 {
        match self {
            Corridor::None           => 0,
            Corridor::ToRobertsCreek => 2,
            Corridor::ToSechelt      => 3,
        }
    }

    /// `true` if a cyclist can ride the corridor between the ferry and
    /// `settlement`.  Vancouver is never covered.
    #[inline]
    pub fn covers(self, settlement: Settlement) -> bool {
        settlement
            .coast_position()
            .is_some_and(|pos| pos <= self.reach())
    }

    /// Parse the single-letter prompt code (`n`, `r`, `s`; case-sensitive).
    pub fn from_code(code: char) -> Option<Corridor> {
        match code {
            'n' => Some(Corridor::None),
            'r' => Some(Corridor::ToRobertsCreek),
            's' => Some(Corridor::ToSechelt),
            _   => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Corridor::None           => 'n',
            Corridor::ToRobertsCreek => 'r',
            Corridor::ToSechelt      => 's',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corridor::None           => "none",
            Corridor::ToRobertsCreek => "to_roberts_creek",
            Corridor::ToSechelt      => "to_sechelt",
        }
    }
}

impl fmt::Display for Corridor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Corridor {
    type Err = CoreError;

    /// Accepts the prompt codes (`n`, `r`, `s`) or the long names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(corridor) = Corridor::from_code(c) {
                return Ok(corridor);
            }
        }
        Corridor::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::Parse(format!("unknown corridor extent '{s}'")))
    }
}
