//! Durchlauf-Treiber: konstante Geschwindigkeit entlang einer Kurve.
//!
//! Expliziter Tick statt Timer-Callbacks — der Treiber ist ohne
//! Scheduler testbar. Die Kurve selbst bleibt zustandslos; der Cursor
//! hält die zurückgelegte Distanz und die Phase.

use glam::Vec2;

use super::curve::ParametricCurve;
use crate::shared::TrackOptions;

/// Momentaufnahme entlang der Strecke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPose {
    /// Position auf der Kurve.
    pub position: Vec2,
    /// Kurswinkel `atan2(dy, dx)` in Radiant.
    pub heading: f32,
    /// Vorzeichenbehaftete Krümmung (NaN bei Nullgeschwindigkeit).
    pub curvature: f32,
}

/// Phase des Streckendurchlaufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalPhase {
    Idle,
    Running,
    Completed,
}

/// Berechnet die Pose bei zurückgelegter Distanz `s`.
pub fn pose_at(curve: &impl ParametricCurve, distance: f32) -> TrackPose {
    let t = curve.curve_parameter(distance);
    let dp = curve.derivative(t);
    TrackPose {
        position: curve.point(t),
        heading: dp.y.atan2(dp.x),
        curvature: curve.curvature(t),
    }
}

/// Cursor über die Strecke mit konstantem Vorschub.
#[derive(Debug, Clone)]
pub struct TrackCursor {
    /// Zurückgelegte Distanz in Längeneinheiten.
    pub distance: f32,
    phase: TraversalPhase,
    /// Vorschub in Längeneinheiten pro Sekunde.
    speed: f32,
}

impl TrackCursor {
    /// Geschwindigkeit so, dass die Strecke nach `step_count` Ticks
    /// à `tick_seconds` vollständig durchlaufen ist.
    pub fn new(curve: &impl ParametricCurve, options: &TrackOptions) -> Self {
        let duration =
            (options.step_count.max(1) as f32 * options.tick_seconds).max(f32::EPSILON);
        Self::with_speed(curve.total_arc_length() / duration)
    }

    /// Cursor mit explizitem Vorschub (Längeneinheiten pro Sekunde).
    pub fn with_speed(speed: f32) -> Self {
        Self {
            distance: 0.0,
            phase: TraversalPhase::Idle,
            speed,
        }
    }

    pub fn phase(&self) -> TraversalPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TraversalPhase::Running
    }

    pub fn is_completed(&self) -> bool {
        self.phase == TraversalPhase::Completed
    }

    /// Startet den Durchlauf (nur aus `Idle`).
    pub fn start(&mut self) {
        if self.phase == TraversalPhase::Idle {
            self.phase = TraversalPhase::Running;
        }
    }

    /// Zurück auf Anfang: Distanz 0, Phase `Idle`.
    pub fn reset(&mut self) {
        self.distance = 0.0;
        self.phase = TraversalPhase::Idle;
    }

    /// Ein Tick: Distanz um `speed · dt` vorrücken und die Pose liefern.
    ///
    /// Erreicht die Distanz die Gesamtlänge, wird sie dort festgeklemmt
    /// und die Phase wechselt nach `Completed`. Außerhalb von `Running`
    /// bewegt sich nichts — die Pose der aktuellen Distanz kommt trotzdem
    /// zurück.
    pub fn tick(&mut self, curve: &impl ParametricCurve, dt_seconds: f32) -> TrackPose {
        if self.phase == TraversalPhase::Running {
            self.distance += self.speed * dt_seconds;
            let total = curve.total_arc_length();
            if self.distance >= total {
                self.distance = total;
                self.phase = TraversalPhase::Completed;
            }
        }
        pose_at(curve, self.distance)
    }
}
