//! Use-Cases: Zonen-Pfade und deren Mitglieder.

use anyhow::Context;
use serde_json::Value;

use crate::core::{RoomRef, ZonePath};
use crate::store::BuilderState;

/// Parst und installiert einen geladenen Zonen-Pfad.
pub fn path_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let path: ZonePath = serde_json::from_value(payload).context("Pfad-Payload nicht lesbar")?;
    log::debug!("Pfad {} ({}) geladen", path.id, path.name);
    state.path = Some(path);
    Ok(())
}

/// Übernimmt einen frisch angelegten Pfad.
pub fn path_created(state: &mut BuilderState, path: ZonePath) {
    log::info!("Pfad {} ({}) angelegt", path.id, path.name);
    state.path = Some(path);
}

/// Ersetzt den Pfad nach einem Save.
pub fn path_saved(state: &mut BuilderState, path: ZonePath) {
    log::debug!("Pfad {} gespeichert", path.id);
    state.path = Some(path);
}

/// Hängt einen Raum an den aktuellen Pfad an.
pub fn path_room_added(state: &mut BuilderState, room: RoomRef) {
    let Some(path) = state.path.as_mut() else {
        log::warn!("Pfad-Raum nicht anfügbar: kein Pfad geladen");
        return;
    };
    log::debug!("Raum {} an Pfad {} angefügt", room.key, path.id);
    path.add_room(room);
}

/// Entfernt das erste Vorkommen des Raums aus dem aktuellen Pfad.
pub fn path_room_removed(state: &mut BuilderState, key: &str) {
    let Some(path) = state.path.as_mut() else {
        log::warn!("Pfad-Raum nicht entfernbar: kein Pfad geladen");
        return;
    };
    if !path.remove_room(key) {
        log::debug!("Raum {} war kein Mitglied von Pfad {}", key, path.id);
    }
}
