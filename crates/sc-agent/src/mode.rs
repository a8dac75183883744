//! Bicycle-mode preference.

use std::fmt;

/// Whether an agent takes a bike instead of a car across the ferry.
///
/// Assigned once at population creation and never mutated.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModePreference {
    /// Always drives.
    #[default]
    NeverBikes,
    /// Bikes whether or not there is a corridor.
    AlwaysBikes,
    /// Bikes only when the corridor covers the coast-side leg.
    BikesIfPathAvailable,
}

impl ModePreference {
    pub const ALL: [ModePreference; 3] = [
        ModePreference::NeverBikes,
        ModePreference::AlwaysBikes,
        ModePreference::BikesIfPathAvailable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ModePreference::NeverBikes           => "never_bikes",
            ModePreference::AlwaysBikes          => "always_bikes",
            ModePreference::BikesIfPathAvailable => "bikes_if_path",
        }
    }
}

impl fmt::Display for ModePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
