//! Der zentrale Karten-Container mit Räumen und Grid-Index.

use glam::IVec3;
use indexmap::IndexMap;

use super::{GridIndex, Room, RoomRef};

/// Alle geladenen Räume der Welt
///
/// Die Karte hält jeden Raum unter seinem Key und pflegt parallel den
/// Grid-Index für Positions-Abfragen. Räume sind in Einfüge-Reihenfolge
/// iterierbar, damit das Rendering über identische Ingests hinweg stabil
/// bleibt.
#[derive(Debug, Clone, Default)]
pub struct WorldMap {
    /// Alle Räume, indexiert nach ihrem Key
    rooms: IndexMap<String, Room>,
    /// Persistenter Spatial-Index über die Raster-Positionen
    grid_index: GridIndex,
}

impl WorldMap {
    /// Erstellt eine neue leere Karte
    pub fn new() -> Self {
        Self {
            rooms: IndexMap::new(),
            grid_index: GridIndex::empty(),
        }
    }

    /// Ersetzt den gesamten Raum-Bestand und baut den Index neu auf.
    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms
            .into_iter()
            .map(|room| (room.key.clone(), room))
            .collect();
        self.rebuild_grid_index();
    }

    /// Fügt Räume hinzu bzw. ersetzt sie (inklusive Index-Einträgen).
    pub fn upsert_rooms(&mut self, rooms: Vec<Room>) {
        for room in rooms {
            self.grid_index.insert(&room);
            self.rooms.insert(room.key.clone(), room);
        }
    }

    /// Entfernt Räume samt ihrer Index-Zellen.
    pub fn remove_rooms(&mut self, rooms: &[Room]) {
        for room in rooms {
            self.rooms.shift_remove(&room.key);
            self.grid_index.remove(room.position());
        }
    }

    /// Entfernt nur die Index-Zellen der Räume, nicht die Räume selbst.
    ///
    /// Wird vor dem Upsert eines verschobenen Raums aufgerufen, damit die
    /// alte Zelle nicht als belegt zurückbleibt.
    pub fn deindex_rooms(&mut self, rooms: &[Room]) {
        for room in rooms {
            self.grid_index.remove(room.position());
        }
    }

    /// Baut den Grid-Index aus dem aktuellen Raum-Bestand neu auf.
    pub fn rebuild_grid_index(&mut self) {
        self.grid_index = GridIndex::from_rooms(self.rooms.values());
    }

    /// Raum unter dem gegebenen Key (falls geladen)
    pub fn room(&self, key: &str) -> Option<&Room> {
        self.rooms.get(key)
    }

    /// Raum an der Raster-Position (über den Grid-Index)
    pub fn room_at(&self, position: IVec3) -> Option<&Room> {
        let key = self.grid_index.room_key_at(position)?;
        self.rooms.get(key)
    }

    /// Löst eine Raum-Referenz gegen die Karte auf.
    /// `None`, wenn der referenzierte Raum nicht geladen ist.
    pub fn resolve(&self, room_ref: &RoomRef) -> Option<&Room> {
        self.rooms.get(&room_ref.key)
    }

    /// Iterator über alle Räume in stabiler Reihenfolge
    pub fn rooms_iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Gibt die Anzahl geladener Räume zurück.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Gibt die Anzahl belegter Index-Zellen zurück.
    pub fn indexed_count(&self) -> usize {
        self.grid_index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_at(id: u64, key: &str, x: i32, y: i32, z: i32) -> Room {
        Room {
            id,
            key: key.to_string(),
            x,
            y,
            z,
            ..Room::default()
        }
    }

    #[test]
    fn test_set_rooms_baut_index_auf() {
        let mut map = WorldMap::new();
        map.set_rooms(vec![
            room_at(1, "room-1", 0, 0, 0),
            room_at(2, "room-2", 0, 1, 0),
        ]);

        assert_eq!(map.room_count(), 2);
        assert_eq!(map.indexed_count(), 2);
        assert_eq!(
            map.room_at(IVec3::new(0, 1, 0)).map(|r| r.key.as_str()),
            Some("room-2")
        );
    }

    #[test]
    fn test_upsert_ersetzt_bestehenden_raum() {
        let mut map = WorldMap::new();
        map.set_rooms(vec![room_at(1, "room-1", 0, 0, 0)]);

        let mut updated = room_at(1, "room-1", 0, 0, 0);
        updated.name = "Umbenannt".to_string();
        map.upsert_rooms(vec![updated]);

        assert_eq!(map.room_count(), 1);
        assert_eq!(map.room("room-1").map(|r| r.name.as_str()), Some("Umbenannt"));
    }

    #[test]
    fn test_verschobener_raum_nach_deindex_und_upsert_genau_einmal_indexiert() {
        let mut map = WorldMap::new();
        let old_room = room_at(1, "room-1", 0, 0, 0);
        map.set_rooms(vec![old_room.clone()]);

        // Verschieben: alte Zelle freigeben, dann unter neuer Position upserten
        map.deindex_rooms(std::slice::from_ref(&old_room));
        map.upsert_rooms(vec![room_at(1, "room-1", 3, 0, 0)]);

        assert!(map.room_at(IVec3::new(0, 0, 0)).is_none());
        assert_eq!(
            map.room_at(IVec3::new(3, 0, 0)).map(|r| r.key.as_str()),
            Some("room-1")
        );
        assert_eq!(map.indexed_count(), 1);
    }

    #[test]
    fn test_remove_entfernt_raum_und_zelle() {
        let mut map = WorldMap::new();
        let room = room_at(1, "room-1", 2, 0, 0);
        map.set_rooms(vec![room.clone(), room_at(2, "room-2", 0, 0, 0)]);

        map.remove_rooms(std::slice::from_ref(&room));

        assert_eq!(map.room_count(), 1);
        assert!(map.room("room-1").is_none());
        assert!(map.room_at(IVec3::new(2, 0, 0)).is_none());
    }

    #[test]
    fn test_resolve_nicht_geladener_referenz_ist_none() {
        let mut map = WorldMap::new();
        map.set_rooms(vec![room_at(1, "room-1", 0, 0, 0)]);

        let missing = RoomRef {
            id: 99,
            key: "room-99".to_string(),
        };
        assert!(map.resolve(&missing).is_none());
        assert!(map.resolve(&map.room("room-1").map(Room::to_ref).expect("Raum erwartet")).is_some());
    }

    #[test]
    fn test_iteration_in_einfuege_reihenfolge() {
        let mut map = WorldMap::new();
        map.set_rooms(vec![
            room_at(3, "room-3", 0, 0, 1),
            room_at(1, "room-1", 0, 0, 0),
            room_at(2, "room-2", 0, 1, 0),
        ]);

        let keys: Vec<&str> = map.rooms_iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["room-3", "room-1", "room-2"]);
    }
}
