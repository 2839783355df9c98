//! Use-Cases: Zonen und deren Räume.

use anyhow::Context;
use serde_json::Value;

use super::world::MapPayload;
use crate::core::{WorldMap, Zone};
use crate::store::BuilderState;

/// Parst und installiert eine geladene Zone.
pub fn zone_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let zone: Zone = serde_json::from_value(payload).context("Zonen-Payload nicht lesbar")?;
    log::info!("Zone {} ({}) geladen", zone.id, zone.name);
    state.zone = Some(zone);
    Ok(())
}

/// Parst die Räume einer Zone und übernimmt sie in Zonen-Liste und Karte.
///
/// Die Räume landen doppelt: als `zone_rooms` für die Zonen-Ansicht und
/// per Upsert in der Karte, damit Nachbar-Abfragen über Zonengrenzen
/// hinweg funktionieren.
pub fn zone_rooms_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let payload: MapPayload =
        serde_json::from_value(payload).context("Zonen-Karten-Payload nicht lesbar")?;

    let map = state.map.get_or_insert_with(WorldMap::new);
    map.upsert_rooms(payload.rooms.clone());
    log::debug!("{} Zonen-Räume übernommen", payload.rooms.len());
    state.zone_rooms = payload.rooms;
    Ok(())
}

/// Übernimmt eine frisch angelegte Zone.
pub fn zone_created(state: &mut BuilderState, zone: Zone) {
    log::info!("Zone {} ({}) angelegt", zone.id, zone.name);
    state.zone = Some(zone);
}

/// Ersetzt die Zone nach einem Save.
pub fn zone_saved(state: &mut BuilderState, zone: Zone) {
    log::debug!("Zone {} gespeichert", zone.id);
    state.zone = Some(zone);
}

/// Entfernt die Zone aus dem Zustand (nach serverseitigem Löschen).
pub fn zone_deleted(state: &mut BuilderState) {
    let Some(zone) = state.zone.take() else {
        log::debug!("Keine Zone zum Entfernen geladen");
        return;
    };
    log::info!("Zone {} ({}) entfernt", zone.id, zone.name);
}
