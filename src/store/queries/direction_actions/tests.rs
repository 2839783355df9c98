use super::*;
use crate::core::RoomRef;

fn room_at(id: u64, key: &str, x: i32, y: i32, z: i32) -> Room {
    Room {
        id,
        key: key.to_string(),
        x,
        y,
        z,
        ..Room::default()
    }
}

fn room_ref(room: &Room) -> RoomRef {
    room.to_ref()
}

/// Baut eine Karte aus den übergebenen Räumen.
fn map_with(rooms: Vec<Room>) -> WorldMap {
    let mut map = WorldMap::new();
    map.set_rooms(rooms);
    map
}

#[test]
fn test_leere_zelle_erlaubt_nur_create() {
    let room = room_at(1, "room-1", 0, 0, 0);
    let map = map_with(vec![room.clone()]);

    let actions = direction_actions(&map, &room, Direction::North);
    assert_eq!(
        actions,
        DirectionActions {
            can_create: true,
            ..DirectionActions::default()
        }
    );
}

#[test]
fn test_nachbar_ohne_ausgang_erlaubt_connect_und_one_way() {
    let room = room_at(1, "room-1", 0, 0, 0);
    let neighbor = room_at(2, "room-2", 1, 0, 0);
    let map = map_with(vec![room.clone(), neighbor]);

    let actions = direction_actions(&map, &room, Direction::East);
    assert!(actions.can_connect);
    assert!(actions.can_one_way);
    assert!(!actions.can_create);
    assert!(!actions.can_disconnect);
}

#[test]
fn test_zweiseitige_verbindung_erlaubt_disconnect_und_one_way() {
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let mut neighbor = room_at(2, "room-2", 0, 1, 0);
    room.set_exit(Direction::North, Some(room_ref(&neighbor)));
    neighbor.set_exit(Direction::South, Some(room_ref(&room)));
    let map = map_with(vec![room.clone(), neighbor]);

    let actions = direction_actions(&map, &room, Direction::North);
    assert!(actions.can_disconnect);
    assert!(actions.can_one_way);
    assert!(!actions.can_connect);
    assert!(!actions.can_create);
}

#[test]
fn test_einseitige_verbindung_zum_nachbarn_erlaubt_nur_disconnect() {
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let neighbor = room_at(2, "room-2", 0, 1, 0);
    // Kein Rück-Ausgang beim Nachbarn — bereits einseitig
    room.set_exit(Direction::North, Some(room_ref(&neighbor)));
    let map = map_with(vec![room.clone(), neighbor]);

    let actions = direction_actions(&map, &room, Direction::North);
    assert!(actions.can_disconnect);
    assert!(!actions.can_one_way);
    assert!(!actions.can_connect);
}

#[test]
fn test_ausgang_zu_fernem_raum_mit_rueckweg_erlaubt_disconnect_und_one_way() {
    // Portal-artige Verbindung: Ziel liegt nicht auf der Nachbar-Zelle
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let mut far = room_at(2, "room-2", 5, 5, 0);
    room.set_exit(Direction::Up, Some(room_ref(&far)));
    far.set_exit(Direction::Down, Some(room_ref(&room)));
    let map = map_with(vec![room.clone(), far]);

    let actions = direction_actions(&map, &room, Direction::Up);
    assert!(actions.can_disconnect);
    assert!(actions.can_one_way);
    assert!(!actions.can_create);
}

#[test]
fn test_ausgang_zu_fernem_raum_ohne_rueckweg_erlaubt_nur_disconnect() {
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let far = room_at(2, "room-2", 5, 5, 0);
    room.set_exit(Direction::Up, Some(room_ref(&far)));
    let map = map_with(vec![room.clone(), far]);

    let actions = direction_actions(&map, &room, Direction::Up);
    assert_eq!(
        actions,
        DirectionActions {
            can_disconnect: true,
            ..DirectionActions::default()
        }
    );
}

#[test]
fn test_ausgang_zu_drittem_raum_bei_belegtem_nachbarn_erlaubt_nur_disconnect() {
    // Der Ausgang führt an room-3 vorbei, obwohl room-2 auf der Nachbar-Zelle liegt
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let neighbor = room_at(2, "room-2", 1, 0, 0);
    let mut third = room_at(3, "room-3", 4, 4, 4);
    room.set_exit(Direction::East, Some(room_ref(&third)));
    third.set_exit(Direction::West, Some(room_ref(&room)));
    let map = map_with(vec![room.clone(), neighbor, third]);

    let actions = direction_actions(&map, &room, Direction::East);
    assert!(actions.can_disconnect);
    // Rückweg existiert, aber das Ziel ist nicht der Nachbar
    assert!(!actions.can_one_way);
    assert!(!actions.can_connect);
}

#[test]
fn test_nicht_geladenes_ausgangs_ziel_zaehlt_als_kein_ausgang() {
    let mut room = room_at(1, "room-1", 0, 0, 0);
    room.set_exit(
        Direction::North,
        Some(RoomRef {
            id: 99,
            key: "room-99".to_string(),
        }),
    );

    // Ohne Nachbar: Zelle gilt als leer
    let map = map_with(vec![room.clone()]);
    let actions = direction_actions(&map, &room, Direction::North);
    assert!(actions.can_create);
    assert!(!actions.can_disconnect);

    // Mit Nachbar: Verbindung gilt als möglich
    let map = map_with(vec![room.clone(), room_at(2, "room-2", 0, 1, 0)]);
    let actions = direction_actions(&map, &room, Direction::North);
    assert!(actions.can_connect);
    assert!(actions.can_one_way);
    assert!(!actions.can_disconnect);
}

#[test]
fn test_flags_sind_konsistent_ueber_alle_faelle() {
    // can_create schließt alle anderen Flags aus; connect und disconnect
    // schließen sich gegenseitig aus
    let mut room = room_at(1, "room-1", 0, 0, 0);
    let mut neighbor = room_at(2, "room-2", 0, 1, 0);
    room.set_exit(Direction::North, Some(room_ref(&neighbor)));
    neighbor.set_exit(Direction::South, Some(room_ref(&room)));
    let map = map_with(vec![room.clone(), neighbor]);

    for direction in Direction::ALL {
        let actions = direction_actions(&map, &room, direction);
        if actions.can_create {
            assert!(!actions.can_connect && !actions.can_disconnect && !actions.can_one_way);
        }
        assert!(!(actions.can_connect && actions.can_disconnect));
    }
}

#[test]
fn test_exit_action_serialisierung() {
    let json = serde_json::to_string(&ExitAction::OneWay).expect("Serialisierung erwartet");
    assert_eq!(json, "\"one_way\"");
    let json = serde_json::to_string(&ExitAction::Disconnect).expect("Serialisierung erwartet");
    assert_eq!(json, "\"disconnect\"");
}
