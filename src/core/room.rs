//! Raum-Datenmodell: Grid-Position, Zonen-Zugehörigkeit und bis zu sechs Ausgänge.

use glam::IVec3;
use serde::{Deserialize, Serialize};

use super::{Direction, ZoneRef};

/// Leichtgewichtige Referenz auf einen Raum (so wie das API sie liefert)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    /// Numerische ID des Raums
    pub id: u64,
    /// Eindeutiger Raum-Key (z.B. "room-412")
    pub key: String,
}

/// Ein Raum der Welt
///
/// Die Ausgänge liegen als eigene Felder vor — das spiegelt den
/// JSON-Payload des APIs, in dem jede Richtung ein Top-Level-Feld ist.
/// Zugriff im Code läuft über `exit()` / `set_exit()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    pub id: u64,
    pub key: String,
    #[serde(default)]
    pub name: String,
    /// Zone, zu der der Raum gehört
    #[serde(default)]
    pub zone: ZoneRef,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    #[serde(default)]
    pub north: Option<RoomRef>,
    #[serde(default)]
    pub east: Option<RoomRef>,
    #[serde(default)]
    pub south: Option<RoomRef>,
    #[serde(default)]
    pub west: Option<RoomRef>,
    #[serde(default)]
    pub up: Option<RoomRef>,
    #[serde(default)]
    pub down: Option<RoomRef>,
}

impl Room {
    /// Raster-Position des Raums
    pub fn position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Ausgang in der gegebenen Richtung (falls vorhanden)
    pub fn exit(&self, direction: Direction) -> Option<&RoomRef> {
        match direction {
            Direction::North => self.north.as_ref(),
            Direction::East => self.east.as_ref(),
            Direction::South => self.south.as_ref(),
            Direction::West => self.west.as_ref(),
            Direction::Up => self.up.as_ref(),
            Direction::Down => self.down.as_ref(),
        }
    }

    /// Setzt bzw. entfernt den Ausgang in der gegebenen Richtung
    pub fn set_exit(&mut self, direction: Direction, target: Option<RoomRef>) {
        match direction {
            Direction::North => self.north = target,
            Direction::East => self.east = target,
            Direction::South => self.south = target,
            Direction::West => self.west = target,
            Direction::Up => self.up = target,
            Direction::Down => self.down = target,
        }
    }

    /// Iterator über alle vorhandenen Ausgänge in Scan-Reihenfolge
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &RoomRef)> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.exit(direction).map(|target| (direction, target)))
    }

    /// Referenz auf diesen Raum (für Exits und Pfad-Mitgliedschaft)
    pub fn to_ref(&self) -> RoomRef {
        RoomRef {
            id: self.id,
            key: self.key.clone(),
        }
    }
}
