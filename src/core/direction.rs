//! Die sechs Himmelsrichtungen eines Raums inklusive Raster-Offsets.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Richtung eines Raum-Ausgangs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    /// Alle Richtungen in stabiler Scan-Reihenfolge.
    ///
    /// Die Reihenfolge ist Teil des Kontrakts: Nachbar-Abfragen und die
    /// Lösch-Kaskade durchlaufen sie genau so, und damit ist z.B. beobachtbar,
    /// welcher Raum nach einem Löschen als Nächstes ausgewählt wird.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Gegenrichtung (Nord ⇔ Süd, Ost ⇔ West, Oben ⇔ Unten)
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Einheits-Schritt im Raster (Nord = +y, Ost = +x, Oben = +z)
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::new(0, 1, 0),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::South => IVec3::new(0, -1, 0),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::Up => IVec3::new(0, 0, 1),
            Direction::Down => IVec3::new(0, 0, -1),
        }
    }

    /// API-Feldname des Ausgangs (z.B. "north")
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Slot-Index in `ALL`-Reihenfolge (für richtungsindexierte Arrays)
    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}
