//! Use-Cases: Welt laden, anlegen, speichern, löschen.

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{Room, World, WorldMap};
use crate::store::BuilderState;

/// Map-Payload des APIs: die Räume einer Welt bzw. Zone
#[derive(Debug, Deserialize)]
pub(crate) struct MapPayload {
    pub rooms: Vec<Room>,
}

/// Markiert den Beginn eines Welt-Fetches (Spinner im UI).
pub fn world_fetch_started(state: &mut BuilderState) {
    state.world_fetching = true;
}

/// Parst und installiert eine vom API geladene Welt.
pub fn world_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let world: World = serde_json::from_value(payload).context("Welt-Payload nicht lesbar")?;
    log::info!("Welt {} ({}) geladen", world.id, world.name);
    state.world = Some(world);
    state.world_fetching = false;
    Ok(())
}

/// Parst den Karten-Payload und baut Karte samt Grid-Index neu auf.
pub fn world_map_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let payload: MapPayload =
        serde_json::from_value(payload).context("Karten-Payload nicht lesbar")?;

    let mut map = WorldMap::new();
    map.set_rooms(payload.rooms);
    log::info!("Karte geladen: {} Räume", map.room_count());
    state.map = Some(map);
    Ok(())
}

/// Übernimmt eine frisch angelegte Welt.
pub fn world_created(state: &mut BuilderState, world: World) {
    log::info!("Welt {} ({}) angelegt", world.id, world.name);
    state.world = Some(world);
}

/// Ersetzt die Welt nach einem Save.
pub fn world_saved(state: &mut BuilderState, world: World) {
    log::debug!("Welt {} gespeichert", world.id);
    state.world = Some(world);
}

/// Entfernt die Welt aus dem Zustand (nach serverseitigem Löschen).
pub fn world_deleted(state: &mut BuilderState) {
    let Some(world) = state.world.take() else {
        log::debug!("Keine Welt zum Entfernen geladen");
        return;
    };
    log::info!("Welt {} ({}) entfernt", world.id, world.name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_world_loaded_beendet_fetching() {
        let mut state = BuilderState::new();
        world_fetch_started(&mut state);
        assert!(state.world_fetching);

        world_loaded(
            &mut state,
            json!({"id": 4, "name": "Mittelerde", "factions": []}),
        )
        .expect("Welt-Payload erwartet");

        assert!(!state.world_fetching);
        assert_eq!(state.world.as_ref().map(|w| w.id), Some(4));
    }

    #[test]
    fn test_world_loaded_mit_kaputtem_payload_laesst_zustand_unveraendert() {
        let mut state = BuilderState::new();
        let result = world_loaded(&mut state, json!({"name": "ohne id"}));

        assert!(result.is_err());
        assert!(state.world.is_none());
    }

    #[test]
    fn test_world_map_loaded_indexiert_raeume() {
        let mut state = BuilderState::new();
        world_map_loaded(
            &mut state,
            json!({"rooms": [
                {"id": 1, "key": "room-1", "zone": {"id": 1}, "x": 0, "y": 0, "z": 0},
                {"id": 2, "key": "room-2", "zone": {"id": 1}, "x": 0, "y": 1, "z": 0}
            ]}),
        )
        .expect("Karten-Payload erwartet");

        let map = state.map.as_ref().expect("Karte erwartet");
        assert_eq!(map.room_count(), 2);
        assert_eq!(map.indexed_count(), 2);
    }
}
