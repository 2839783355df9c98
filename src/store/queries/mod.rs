//! Abgeleitete Abfragen über dem Builder-Zustand.
//!
//! Aufgeteilt nach Thema:
//! - `neighbors` — Nachbar-Räume im 3D-Raster
//! - `direction_actions` — mögliche Exit-Aktionen je Richtung
//! - `factions` — Fraktions-Optionen der geladenen Welt

pub mod direction_actions;
pub mod factions;
pub mod neighbors;

pub use direction_actions::{DirectionActions, ExitAction, direction_actions};
pub use factions::{FactionOption, core_faction_options, default_core_faction};
pub use neighbors::{RoomNeighbors, neighbors};
