//! Zentrale Konfiguration für den Flight-Track-Demo-Treiber.
//!
//! `TrackOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::ControlPoints;

// ── Durchlauf ───────────────────────────────────────────────────────

/// Anzahl Ticks für einen kompletten Streckendurchlauf.
pub const DEFAULT_STEP_COUNT: u32 = 200;
/// Tick-Intervall des Demo-Treibers in Sekunden.
pub const DEFAULT_TICK_SECONDS: f32 = 0.02;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `flight_track.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackOptions {
    /// Anzahl Ticks für einen kompletten Durchlauf
    #[serde(default = "default_step_count")]
    pub step_count: u32,
    /// Tick-Intervall in Sekunden
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: f32,
    /// Kontrollpunkte der Demo-Strecke
    #[serde(default = "default_path")]
    pub path: ControlPoints,
}

/// Serde-Default für `step_count`.
fn default_step_count() -> u32 {
    DEFAULT_STEP_COUNT
}

/// Serde-Default für `tick_seconds`.
fn default_tick_seconds() -> f32 {
    DEFAULT_TICK_SECONDS
}

/// Serde-Default für `path`: die Referenzstrecke der Demo.
fn default_path() -> ControlPoints {
    ControlPoints {
        from: Vec2::new(0.0, 0.0),
        control1: Vec2::new(600.0, 100.0),
        control2: Vec2::new(-300.0, 400.0),
        to: Vec2::new(393.0, 600.0),
    }
}

impl Default for TrackOptions {
    fn default() -> Self {
        Self {
            step_count: DEFAULT_STEP_COUNT,
            tick_seconds: DEFAULT_TICK_SECONDS,
            path: default_path(),
        }
    }
}

impl TrackOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("flight_track"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("flight_track.toml")
    }

    /// Dauer eines kompletten Durchlaufs in Sekunden.
    pub fn traversal_seconds(&self) -> f32 {
        self.step_count.max(1) as f32 * self.tick_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TrackOptions::default();
        assert_eq!(options.step_count, 200);
        assert_eq!(options.tick_seconds, 0.02);
        assert_eq!(options.path.to, Vec2::new(393.0, 600.0));
    }

    #[test]
    fn test_toml_roundtrip() {
        let options = TrackOptions::default();
        let toml = toml::to_string_pretty(&options).unwrap();
        let restored: TrackOptions = toml::from_str(&toml).unwrap();
        assert_eq!(restored.step_count, options.step_count);
        assert_eq!(restored.path, options.path);
    }

    #[test]
    fn test_fehlende_felder_nutzen_defaults() {
        let restored: TrackOptions = toml::from_str("step_count = 50\n").unwrap();
        assert_eq!(restored.step_count, 50);
        assert_eq!(restored.tick_seconds, DEFAULT_TICK_SECONDS);
        assert_eq!(restored.path, TrackOptions::default().path);
    }
}
