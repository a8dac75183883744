//! Ferry queue keys shared by the classifier, scheduler, and output crates.
//!
//! There are four independent FIFO queues, one per (mode, direction) pair.
//! Direction is the direction of the sailing, not of the agent's trip: a
//! coast resident leaving for Vancouver rides a `Return` sailing.

use std::fmt;

/// How an agent crosses on the ferry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Car,
    Bike,
}

/// Which way a sailing goes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FerryDirection {
    /// Vancouver → Gibsons (to the coast).
    Outbound,
    /// Gibsons → Vancouver.
    Return,
}

/// One of the four ferry queues.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueKey {
    CarOutbound,
    BikeOutbound,
    CarReturn,
    BikeReturn,
}

impl QueueKey {
    /// All four keys, in [`index`](Self::index) order.
    pub const ALL: [QueueKey; 4] = [
        QueueKey::CarOutbound,
        QueueKey::BikeOutbound,
        QueueKey::CarReturn,
        QueueKey::BikeReturn,
    ];

    pub fn new(mode: Mode, direction: FerryDirection) -> Self {
        match (mode, direction) {
            (Mode::Car,  FerryDirection::Outbound) => QueueKey::CarOutbound,
            (Mode::Bike, FerryDirection::Outbound) => QueueKey::BikeOutbound,
            (Mode::Car,  FerryDirection::Return)   => QueueKey::CarReturn,
            (Mode::Bike, FerryDirection::Return)   => QueueKey::BikeReturn,
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            QueueKey::CarOutbound | QueueKey::CarReturn   => Mode::Car,
            QueueKey::BikeOutbound | QueueKey::BikeReturn => Mode::Bike,
        }
    }

    pub fn direction(self) -> FerryDirection {
        match self {
            QueueKey::CarOutbound | QueueKey::BikeOutbound => FerryDirection::Outbound,
            QueueKey::CarReturn | QueueKey::BikeReturn     => FerryDirection::Return,
        }
    }

    /// Dense index for per-queue arrays (`[T; 4]`).
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QueueKey::CarOutbound  => "car_outbound",
            QueueKey::BikeOutbound => "bike_outbound",
            QueueKey::CarReturn    => "car_return",
            QueueKey::BikeReturn   => "bike_return",
        }
    }
}

impl fmt::Display for QueueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
