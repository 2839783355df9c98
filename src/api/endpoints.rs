//! Endpunkt-Pfade des Builder-APIs.
//!
//! Alle Pfade sind relativ zur Base-URL des Transports und führen einen
//! Slash vorne wie hinten (Django-Konvention des Backends).

/// Welt-Liste (`GET`/`POST`)
pub fn worlds() -> String {
    "/builder/worlds/".to_string()
}

/// Einzelne Welt
pub fn world(world_id: u64) -> String {
    format!("/builder/worlds/{world_id}/")
}

/// Karte der Welt (alle Räume)
pub fn world_map(world_id: u64) -> String {
    format!("/builder/worlds/{world_id}/map/")
}

/// Zonen-Liste einer Welt
pub fn zones(world_id: u64) -> String {
    format!("/builder/worlds/{world_id}/zones/")
}

/// Einzelne Zone
pub fn zone(world_id: u64, zone_id: u64) -> String {
    format!("/builder/worlds/{world_id}/zones/{zone_id}/")
}

/// Karte einer Zone (deren Räume)
pub fn zone_map(world_id: u64, zone_id: u64) -> String {
    format!("/builder/worlds/{world_id}/zones/{zone_id}/map/")
}

/// Einzelner Raum
pub fn room(world_id: u64, room_id: u64) -> String {
    format!("/builder/worlds/{world_id}/rooms/{room_id}/")
}

/// Exit-Aktion auf einem Raum (adressiert über den Raum-Key)
pub fn room_action(world_id: u64, room_key: &str) -> String {
    format!("/builder/worlds/{world_id}/rooms/{room_key}/action/")
}

/// Einzelner Zonen-Pfad
pub fn path(world_id: u64, path_id: u64) -> String {
    format!("/builder/worlds/{world_id}/paths/{path_id}/")
}

/// Pfad-Liste einer Zone (`POST` zum Anlegen)
pub fn zone_paths(world_id: u64, zone_id: u64) -> String {
    format!("/builder/worlds/{world_id}/zones/{zone_id}/paths/")
}
