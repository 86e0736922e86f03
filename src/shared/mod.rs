//! Gemeinsame Konfiguration und Konstanten.

pub mod options;

pub use options::{TrackOptions, DEFAULT_STEP_COUNT, DEFAULT_TICK_SECONDS};
