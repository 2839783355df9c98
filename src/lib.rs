//! MUD World Builder — Client-Kern.
//! Welt-Zustand als Library exportiert für Transport- und Rendering-Schichten.

pub mod api;
pub mod core;
pub mod store;

pub use api::{ApiRequest, Method};
pub use core::{
    Direction, Faction, GridIndex, Room, RoomRef, World, WorldMap, Zone, ZonePath, ZoneRef,
};
pub use store::queries::{
    DirectionActions, ExitAction, FactionOption, RoomNeighbors, core_faction_options,
    default_core_faction, direction_actions, neighbors,
};
pub use store::use_cases::{RoomActionPayload, RoomDeletion};
pub use store::{BuilderPanel, BuilderState};
