//! Abfrage: Nachbar-Räume im 3D-Raster (genau eine Zelle Abstand).

use crate::core::{Direction, Room, WorldMap};

/// Nachbarn eines Raums, ein Slot je Richtung
#[derive(Debug, Clone, Copy)]
pub struct RoomNeighbors<'a> {
    slots: [Option<&'a Room>; 6],
}

impl<'a> RoomNeighbors<'a> {
    /// Nachbar in der gegebenen Richtung (falls die Zelle belegt ist)
    pub fn get(&self, direction: Direction) -> Option<&'a Room> {
        self.slots[direction.slot()]
    }

    /// Erster belegter Nachbar in Scan-Reihenfolge
    pub fn first(&self) -> Option<&'a Room> {
        self.slots.iter().flatten().next().copied()
    }

    /// Iterator über alle Richtungen samt Belegung
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<&'a Room>)> {
        let slots = self.slots;
        Direction::ALL
            .into_iter()
            .map(move |direction| (direction, slots[direction.slot()]))
    }
}

/// Liefert für jede Richtung den Raum genau eine Zelle entfernt.
///
/// Das sind die Räume, zu denen eine Verbindung hergestellt werden könnte.
pub fn neighbors<'a>(map: &'a WorldMap, room: &Room) -> RoomNeighbors<'a> {
    let mut slots = [None; 6];
    for direction in Direction::ALL {
        slots[direction.slot()] = map.room_at(room.position() + direction.offset());
    }
    RoomNeighbors { slots }
}
