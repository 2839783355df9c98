//! Core-Domänentypen: Welt, Zonen, Räume, Pfade, Karte und Grid-Index.

pub mod direction;
pub mod room;
pub mod spatial;
pub mod world;
pub mod world_map;
pub mod zone;
pub mod zone_path;

pub use direction::Direction;
pub use room::{Room, RoomRef};
pub use spatial::GridIndex;
pub use world::{Faction, World};
pub use world_map::WorldMap;
pub use zone::{Zone, ZoneRef};
pub use zone_path::ZonePath;
