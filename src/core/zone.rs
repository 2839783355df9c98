//! Zonen-Datenmodell.

use serde::{Deserialize, Serialize};

/// Referenz auf eine Zone (eingebettet in Raum-Payloads)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Eine Zone der Welt — fasst Räume zu einem Bau-Abschnitt zusammen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub name: String,
    /// Freitext-Beschreibung (optional)
    #[serde(default)]
    pub description: Option<String>,
}

impl Zone {
    /// Referenz auf diese Zone
    pub fn to_ref(&self) -> ZoneRef {
        ZoneRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}
