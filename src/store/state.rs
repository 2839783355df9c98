//! Hauptzustand des Builders.

use crate::core::{Room, World, WorldMap, Zone, ZonePath};

/// Aktive Builder-Ansicht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderPanel {
    /// Welt-Übersicht
    #[default]
    World,
    /// Zonen-Detail
    Zone,
    /// Raum-Editor
    Room,
    /// Mob-Template-Liste
    MobTemplates,
    /// Item-Template-Liste
    ItemTemplates,
}

/// Hauptzustand des Builder-Stores
///
/// Die Rendering-Schicht liest diesen Zustand; mutiert wird er
/// ausschließlich über die Use-Cases in [`crate::store::use_cases`].
#[derive(Debug, Clone, Default)]
pub struct BuilderState {
    /// Läuft gerade ein Welt-Fetch? (Spinner im UI)
    pub world_fetching: bool,
    /// Aktuell geladene Welt (None = nichts geladen)
    pub world: Option<World>,
    /// Aktuell geladene Zone
    pub zone: Option<Zone>,
    /// Räume der aktuellen Zone
    pub zone_rooms: Vec<Room>,
    /// Im Editor geöffneter Raum
    pub room: Option<Room>,
    /// Karte aller geladenen Räume inklusive Grid-Index
    pub map: Option<WorldMap>,
    /// Aktuell geladener Zonen-Pfad
    pub path: Option<ZonePath>,
    /// Aktive Ansicht
    pub panel: BuilderPanel,
}

impl BuilderState {
    /// Erstellt einen neuen, leeren Builder-Zustand
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt den Zustand vollständig zurück (z.B. beim Welt-Wechsel).
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Gibt die Anzahl geladener Räume zurück (für UI-Anzeige)
    pub fn room_count(&self) -> usize {
        self.map.as_ref().map_or(0, WorldMap::room_count)
    }
}
