//! Zonen-Pfade: benannte Raum-Folgen (z.B. Patrouillen-Routen für Mobs).

use serde::{Deserialize, Serialize};

use super::RoomRef;

/// Ein Pfad durch eine Zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePath {
    pub id: u64,
    pub name: String,
    /// Mitglieds-Räume in Lauf-Reihenfolge
    #[serde(default)]
    pub rooms: Vec<RoomRef>,
}

impl ZonePath {
    /// Hängt einen Raum ans Ende des Pfads an.
    ///
    /// Mehrfach-Mitgliedschaft ist erlaubt (ein Pfad darf einen Raum
    /// mehrfach durchlaufen).
    pub fn add_room(&mut self, room: RoomRef) {
        self.rooms.push(room);
    }

    /// Entfernt das erste Vorkommen des Raums aus dem Pfad.
    /// Gibt `false` zurück, wenn der Raum kein Mitglied war (No-Op).
    pub fn remove_room(&mut self, key: &str) -> bool {
        let Some(index) = self.rooms.iter().position(|room| room.key == key) else {
            return false;
        };
        self.rooms.remove(index);
        true
    }

    /// Prüft ob der Raum Mitglied des Pfads ist
    pub fn contains(&self, key: &str) -> bool {
        self.rooms.iter().any(|room| room.key == key)
    }
}
