//! Use-Cases rund um den aktuellen Raum: Auswahl, Speichern, Exit-Aktionen
//! und die Lösch-Kaskade.

use anyhow::Context;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::{ApiRequest, endpoints};
use crate::core::{Direction, Room, WorldMap};
use crate::store::BuilderState;
use crate::store::queries::{ExitAction, neighbors};

/// Ergebnis einer server-seitigen Exit-Aktion
#[derive(Debug, Deserialize)]
pub struct RoomActionPayload {
    /// Der aktualisierte Raum
    pub room: Room,
    /// Der betroffene Gegenraum (bei Connect/Disconnect)
    #[serde(default)]
    pub exit: Option<Room>,
}

/// Ergebnis der Lösch-Kaskade
#[derive(Debug, Clone)]
pub struct RoomDeletion {
    /// Raum, zu dem das UI als Nächstes springt (falls einer gefunden wurde)
    pub next_room: Option<Room>,
    /// Keys der Räume, deren Rück-Ausgang entfernt wurde
    pub detached: Vec<String>,
}

/// Macht den Raum aktuell und liefert die nötigen Folge-Fetches.
///
/// Immer dabei: das Raum-Detail. Wechselt der Raum die Zone, werden
/// zusätzlich die Räume der alten Zone verworfen und die neue Zone
/// angefordert.
pub fn select_room(state: &mut BuilderState, room: Room) -> Vec<ApiRequest> {
    let Some(world) = state.world.as_ref() else {
        log::warn!("Raum-Auswahl ignoriert: keine Welt geladen");
        return Vec::new();
    };
    let world_id = world.id;

    let mut requests = vec![ApiRequest::get(endpoints::room(world_id, room.id))];

    let zone_changed = state.zone.as_ref().is_none_or(|zone| zone.id != room.zone.id);
    if zone_changed {
        // Die Räume der Zone werden gleich neu geladen
        state.zone_rooms.clear();
        requests.push(ApiRequest::get(endpoints::zone(world_id, room.zone.id)));
    }

    log::debug!("Raum {} ausgewählt", room.key);
    state.room = Some(room);
    requests
}

/// Parst und installiert das geladene Raum-Detail.
pub fn room_loaded(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let room: Room = serde_json::from_value(payload).context("Raum-Payload nicht lesbar")?;
    log::debug!("Raum {} geladen", room.key);
    state.room = Some(room);
    Ok(())
}

/// Ersetzt den aktuellen Raum nach einem Save.
///
/// Die alte Raster-Zelle wird freigegeben und der Raum unter seiner neuen
/// Position upsertet — damit sind Verschiebungen abgedeckt. Wechselte der
/// Raum die Zone, kommt der Fetch für die neue Zone zurück.
pub fn room_saved(state: &mut BuilderState, updated: Room) -> Option<ApiRequest> {
    let old_room = state.room.take();

    if let Some(map) = state.map.as_mut() {
        if let Some(old) = old_room.as_ref() {
            map.deindex_rooms(std::slice::from_ref(old));
        }
        map.upsert_rooms(vec![updated.clone()]);
    }

    let zone_changed = state.zone.as_ref().is_none_or(|zone| zone.id != updated.zone.id);
    let zone_request = if zone_changed {
        state
            .world
            .as_ref()
            .map(|world| ApiRequest::get(endpoints::zone(world.id, updated.zone.id)))
    } else {
        None
    };

    log::info!("Raum {} gespeichert", updated.key);
    state.room = Some(updated);
    zone_request
}

/// Baut den Request für eine Exit-Aktion des aktuellen Raums.
pub fn request_exit_action(
    state: &BuilderState,
    direction: Direction,
    action: ExitAction,
) -> Option<ApiRequest> {
    let world = state.world.as_ref()?;
    let room = state.room.as_ref()?;
    Some(ApiRequest::post(
        endpoints::room_action(world.id, &room.key),
        json!({ "direction": direction, "action": action }),
    ))
}

/// Übernimmt das Ergebnis einer Exit-Aktion.
///
/// Der Raum wird aktuell, und beide betroffenen Räume landen per Upsert
/// in der Karte.
pub fn room_action_applied(state: &mut BuilderState, payload: Value) -> anyhow::Result<()> {
    let payload: RoomActionPayload =
        serde_json::from_value(payload).context("Aktions-Payload nicht lesbar")?;

    let mut rooms = vec![payload.room.clone()];
    if let Some(exit_room) = payload.exit {
        rooms.push(exit_room);
    }

    let map = state.map.get_or_insert_with(WorldMap::new);
    map.upsert_rooms(rooms);

    log::info!("Exit-Aktion auf Raum {} übernommen", payload.room.key);
    state.room = Some(payload.room);
    Ok(())
}

/// Markiert den Raum server-seitig als zuletzt betrachtet (reines Glue).
pub fn mark_last_viewed_request(world_id: u64, room_id: u64) -> ApiRequest {
    ApiRequest {
        method: crate::api::Method::Post,
        path: endpoints::room(world_id, room_id),
        body: None,
    }
}

/// Entfernt den aktuellen Raum aus dem Zustand — die Lösch-Kaskade.
///
/// 1. Nachfolge-Raum bestimmen: der erste Ausgang in Scan-Reihenfolge,
///    aufgelöst gegen die Karte; sonst der erste Raster-Nachbar; zuletzt
///    der Start-Raum der Welt. Alle drei dürfen scheitern.
/// 2. Jeder aufgelöste Ausgangs-Zielraum verliert seinen
///    Rück-Ausgang (Kopie per Upsert zurückgeschrieben).
/// 3. Raum aus Karte und Index entfernen, Nachfolge-Raum aktuell machen.
pub fn delete_room(state: &mut BuilderState) -> Option<RoomDeletion> {
    let Some(room) = state.room.clone() else {
        log::debug!("Kein Raum zum Löschen ausgewählt");
        return None;
    };
    let Some(map) = state.map.as_ref() else {
        log::warn!("Löschen abgebrochen: keine Karte geladen");
        return None;
    };

    // Nachfolge-Raum: erster Ausgang gewinnt, auch wenn er sich nicht
    // auflösen lässt — dann geht es direkt mit den Nachbarn weiter.
    let mut next_room = None;
    for direction in Direction::ALL {
        if let Some(target) = room.exit(direction) {
            next_room = map.resolve(target).cloned();
            break;
        }
    }
    if next_room.is_none() {
        next_room = neighbors(map, &room).first().cloned();
    }
    if next_room.is_none() {
        next_room = state
            .world
            .as_ref()
            .and_then(|world| world.starting_room.as_ref())
            .and_then(|start| map.resolve(start))
            .cloned();
    }

    // Rück-Ausgänge aller verbundenen Räume entfernen
    let mut detached_rooms: Vec<Room> = Vec::new();
    for (direction, target) in room.exits() {
        if let Some(exit_room) = map.resolve(target) {
            let mut updated = exit_room.clone();
            updated.set_exit(direction.reverse(), None);
            detached_rooms.push(updated);
        }
    }
    let detached: Vec<String> = detached_rooms.iter().map(|r| r.key.clone()).collect();

    let Some(map) = state.map.as_mut() else {
        log::warn!("Löschen abgebrochen: keine Karte geladen");
        return None;
    };
    if !detached_rooms.is_empty() {
        map.upsert_rooms(detached_rooms);
    }
    map.deindex_rooms(std::slice::from_ref(&room));
    map.remove_rooms(std::slice::from_ref(&room));

    log::info!(
        "Raum {} gelöscht, {} Rück-Ausgang/Ausgänge entfernt",
        room.key,
        detached.len()
    );
    state.room = next_room.clone();

    Some(RoomDeletion {
        next_room,
        detached,
    })
}
