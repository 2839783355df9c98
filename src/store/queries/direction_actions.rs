//! Abfrage: Welche Exit-Aktionen sind für einen Raum je Richtung möglich?
//!
//! Das Ergebnis schaltet die Richtungs-Buttons im Raum-Editor frei.

use serde::Serialize;

use super::neighbors;
use crate::core::{Direction, Room, WorldMap};

/// Mögliche Exit-Aktionen einer Richtung
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionActions {
    /// Leere Rasterzelle: ein neuer Raum kann gegraben werden
    pub can_create: bool,
    /// Nachbar vorhanden, aber kein Ausgang: Verbindung kann erstellt werden
    pub can_connect: bool,
    /// Ausgang vorhanden: Verbindung kann getrennt werden
    pub can_disconnect: bool,
    /// Verbindung kann einseitig angelegt bzw. auf einseitig reduziert werden
    pub can_one_way: bool,
}

/// Server-seitige Exit-Aktion (Body des Action-Endpunkts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitAction {
    Create,
    Connect,
    Disconnect,
    OneWay,
}

/// Berechnet die möglichen Exit-Aktionen des Raums in der Richtung.
///
/// Ein Ausgang, dessen Ziel-Raum nicht geladen ist, zählt als nicht
/// vorhanden — die Buttons dürfen nichts anbieten, was das UI nicht
/// anzeigen kann. Führt ein Ausgang zu einem anderen Raum als dem
/// Raster-Nachbarn, bleibt nur das Trennen übrig.
pub fn direction_actions(map: &WorldMap, room: &Room, direction: Direction) -> DirectionActions {
    let exit_room = room.exit(direction).and_then(|target| map.resolve(target));
    let neighbor = neighbors(map, room).get(direction);
    let reverse = direction.reverse();

    let mut actions = DirectionActions::default();
    match (neighbor, exit_room) {
        (Some(neighbor), Some(exit_room)) => {
            actions.can_disconnect = true;
            // Zweiseitige Verbindung zum Nachbarn kann auf einseitig reduziert werden
            if neighbor.id == exit_room.id
                && exit_room
                    .exit(reverse)
                    .is_some_and(|back| back.id == room.id)
            {
                actions.can_one_way = true;
            }
        }
        (None, Some(exit_room)) => {
            // Ausgang zu einem nicht benachbarten Raum
            actions.can_disconnect = true;
            if exit_room
                .exit(reverse)
                .is_some_and(|back| back.id == room.id)
            {
                actions.can_one_way = true;
            }
        }
        (Some(_), None) => {
            // Neue Verbindung: wahlweise zweiseitig oder einseitig
            actions.can_connect = true;
            actions.can_one_way = true;
        }
        (None, None) => {
            actions.can_create = true;
        }
    }
    actions
}

#[cfg(test)]
mod tests;
