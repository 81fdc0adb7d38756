//! Seat categories and per-pair availability records.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// A seat category recognised by the booking service.
///
/// The declaration order is the display order used everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeatType {
    AcBerth,
    AcSeat,
    Snigdha,
    FirstBerth,
    FirstSeat,
    FirstChair,
    SecondChair,
    Shovan,
    Shulov,
    AcChair,
}

impl SeatType {
    /// Number of recognised seat types.
    pub const COUNT: usize = 10;

    /// All seat types in display order.
    pub const ALL: [SeatType; Self::COUNT] = [
        SeatType::AcBerth,
        SeatType::AcSeat,
        SeatType::Snigdha,
        SeatType::FirstBerth,
        SeatType::FirstSeat,
        SeatType::FirstChair,
        SeatType::SecondChair,
        SeatType::Shovan,
        SeatType::Shulov,
        SeatType::AcChair,
    ];

    /// The identifier the booking service uses on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SeatType::AcBerth => "AC_B",
            SeatType::AcSeat => "AC_S",
            SeatType::Snigdha => "SNIGDHA",
            SeatType::FirstBerth => "F_BERTH",
            SeatType::FirstSeat => "F_SEAT",
            SeatType::FirstChair => "F_CHAIR",
            SeatType::SecondChair => "S_CHAIR",
            SeatType::Shovan => "SHOVAN",
            SeatType::Shulov => "SHULOV",
            SeatType::AcChair => "AC_CHAIR",
        }
    }

    /// Match a wire identifier. Returns `None` for unrecognised types.
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(&s.trim().to_ascii_uppercase())
            .ok_or_else(|| DomainError::UnknownSeatType(s.to_string()))
    }
}

/// Seat counts and fare for one seat type on one station pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeatTypeInfo {
    pub online: u32,
    pub offline: u32,
    pub fare: f64,
}

impl SeatTypeInfo {
    /// The all-zero record used for pairs without data.
    pub const ZERO: SeatTypeInfo = SeatTypeInfo {
        online: 0,
        offline: 0,
        fare: 0.0,
    };

    pub fn new(online: u32, offline: u32, fare: f64) -> Self {
        Self {
            online,
            offline,
            fare,
        }
    }

    /// Seats available through either channel.
    pub fn total(&self) -> u32 {
        self.online.saturating_add(self.offline)
    }
}

/// One record per recognised seat type.
///
/// Seat types that were never set read as [`SeatTypeInfo::ZERO`], so a
/// map is always fully populated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeatInfoMap {
    slots: [SeatTypeInfo; SeatType::COUNT],
}

impl SeatInfoMap {
    /// A map with every seat type zeroed.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn get(&self, seat: SeatType) -> SeatTypeInfo {
        self.slots[seat.slot()]
    }

    pub fn set(&mut self, seat: SeatType, info: SeatTypeInfo) {
        self.slots[seat.slot()] = info;
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatType, SeatTypeInfo)> + '_ {
        SeatType::ALL.into_iter().map(|seat| (seat, self.get(seat)))
    }

    /// Total seats across every seat type.
    pub fn total_seats(&self) -> u64 {
        self.slots.iter().map(|s| u64::from(s.total())).sum()
    }
}
