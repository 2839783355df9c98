//! Store-Layer: Builder-Zustand, abgeleitete Abfragen und Use-Cases.

pub mod queries;
pub mod state;
pub mod use_cases;

pub use state::{BuilderPanel, BuilderState};
