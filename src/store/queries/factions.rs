//! Abfragen über die Fraktionen der geladenen Welt.

use crate::core::World;

/// Select-Option für Create/Edit-Seiten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionOption {
    pub value: String,
    pub label: String,
}

/// Kern-Fraktionen als Select-Optionen.
///
/// Die führende Leer-Option steht für "keine Fraktion".
pub fn core_faction_options(world: &World) -> Vec<FactionOption> {
    let mut options = vec![FactionOption {
        value: String::new(),
        label: String::new(),
    }];
    for faction in &world.factions {
        if faction.is_core {
            options.push(FactionOption {
                value: faction.code.clone(),
                label: faction.name.clone(),
            });
        }
    }
    options
}

/// Code der Standard-Kern-Fraktion.
///
/// Erste Fraktion mit `is_core && is_default`; gibt es keine, fällt die
/// Abfrage auf die erste Fraktion der Welt zurück. `None` nur bei einer
/// Welt ganz ohne Fraktionen.
pub fn default_core_faction(world: &World) -> Option<&str> {
    let mut fallback = None;
    for faction in &world.factions {
        if faction.is_core && faction.is_default {
            return Some(&faction.code);
        }
        if fallback.is_none() {
            fallback = Some(faction.code.as_str());
        }
    }
    fallback
}
