//! Use-Case-Funktionen des Builder-Stores.
//!
//! Aufgeteilt nach Thema:
//! - `world` — Welt laden, anlegen, speichern, löschen
//! - `zone` — Zonen und deren Räume
//! - `room` — Raum-Auswahl, Speichern, Exit-Aktionen, Lösch-Kaskade
//! - `path` — Zonen-Pfade und deren Mitglieder
//!
//! Mutationen, die lediglich geladenen Zustand voraussetzen, loggen bei
//! fehlendem Zustand eine Warnung und kehren früh zurück. Payload-Ingests
//! parsen JSON-Werte und geben `anyhow::Result` zurück.

pub mod path;
pub mod room;
pub mod world;
pub mod zone;

pub use path::{path_created, path_loaded, path_room_added, path_room_removed, path_saved};
pub use room::{
    RoomActionPayload, RoomDeletion, delete_room, mark_last_viewed_request, request_exit_action,
    room_action_applied, room_loaded, room_saved, select_room,
};
pub use world::{
    world_created, world_deleted, world_fetch_started, world_loaded, world_map_loaded, world_saved,
};
pub use zone::{zone_created, zone_deleted, zone_loaded, zone_rooms_loaded, zone_saved};
