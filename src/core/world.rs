//! Welt-Datenmodell inklusive Fraktionen.

use serde::{Deserialize, Serialize};

use super::RoomRef;

/// Eine Fraktion der Welt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faction {
    /// Stabiler Code (Referenz in Mob-Templates)
    pub code: String,
    /// Anzeigename
    pub name: String,
    /// Kern-Fraktion (in Create/Edit-Seiten wählbar)
    #[serde(default)]
    pub is_core: bool,
    /// Voreingestellte Fraktion neuer Mobs
    #[serde(default)]
    pub is_default: bool,
}

/// Eine Welt — Wurzelobjekt des Builders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub id: u64,
    pub name: String,
    /// Start-Raum neuer Spieler (letzter Ausweg der Lösch-Kaskade)
    #[serde(default)]
    pub starting_room: Option<RoomRef>,
    #[serde(default)]
    pub factions: Vec<Faction>,
}
