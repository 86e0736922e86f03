//! Flight-Track-Demo.
//!
//! Fliegt eine Markierung mit konstanter Geschwindigkeit entlang der
//! konfigurierten Bézier-Strecke und protokolliert Position, Kurs und
//! Krümmung pro Abschnitt.

use flight_track::{Bezier3, ParametricCurve, TrackCursor, TrackOptions};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Flight-Track-Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = TrackOptions::load_from_file(&TrackOptions::config_path());
    let track = Bezier3::from_control_points(options.path)
        .map_err(|e| anyhow::anyhow!("Strecke konnte nicht erstellt werden: {e}"))?;

    log::info!(
        "Gesamtbogenlänge: {:.2} Einheiten, Durchlauf in {:.1} s",
        track.total_arc_length(),
        options.traversal_seconds()
    );

    let mut cursor = TrackCursor::new(&track, &options);
    cursor.start();

    let mut ticks = 0u32;
    while !cursor.is_completed() {
        let pose = cursor.tick(&track, options.tick_seconds);
        ticks += 1;
        if ticks % 20 == 0 || cursor.is_completed() {
            log::info!(
                "s={:7.2}  Position=({:7.2}, {:7.2})  Kurs={:6.1}°  Krümmung={:+.5}",
                cursor.distance,
                pose.position.x,
                pose.position.y,
                pose.heading.to_degrees(),
                pose.curvature
            );
        }
    }

    log::info!("Strecke nach {} Ticks abgeschlossen", ticks);
    Ok(())
}
