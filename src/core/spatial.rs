//! Grid-Index für exakte Raum-Abfragen über die 3D-Raster-Position.

use std::collections::HashMap;

use glam::IVec3;

use crate::core::Room;

/// Spatial-Index über alle Räume einer Karte.
///
/// Räume liegen auf einem ganzzahligen 3D-Raster, daher reicht eine exakte
/// Zellen-Zuordnung Position → Raum-Key (kein Distanz-Baum nötig).
#[derive(Debug, Clone, Default)]
pub struct GridIndex {
    cells: HashMap<IVec3, String>,
}

impl GridIndex {
    /// Erstellt einen leeren Grid-Index.
    pub fn empty() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Räumen.
    ///
    /// Teilen sich zwei Räume eine Zelle, gewinnt der zuletzt eingefügte —
    /// der frühere bleibt in der Karte, ist über den Index aber erst nach
    /// einem Rebuild wieder erreichbar.
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        let mut index = Self::empty();
        for room in rooms {
            index.insert(room);
        }
        index
    }

    /// Trägt den Raum unter seiner Raster-Position ein (last write wins).
    pub fn insert(&mut self, room: &Room) {
        self.cells.insert(room.position(), room.key.clone());
    }

    /// Räumt die Zelle an der Position — unabhängig davon, welcher Key dort liegt.
    /// Gibt den entfernten Key zurück (falls die Zelle belegt war).
    pub fn remove(&mut self, position: IVec3) -> Option<String> {
        self.cells.remove(&position)
    }

    /// Key des Raums an der Raster-Position (falls die Zelle belegt ist)
    pub fn room_key_at(&self, position: IVec3) -> Option<&str> {
        self.cells.get(&position).map(String::as_str)
    }

    /// Gibt die Anzahl belegter Zellen zurück.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Gibt `true` zurück, wenn keine Zelle belegt ist.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
