//! Kubische Bézier-Kurve in Polynomform mit vorberechneter Gesamtbogenlänge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::curve::{CurveError, ParametricCurve};

/// Die vier Kontrollpunkte einer kubischen Bézier-Kurve.
///
/// Nach der Konstruktion unveränderlich — die abgeleiteten Koeffizienten
/// und die Gesamtbogenlänge in [`Bezier3`] bleiben dadurch gültig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoints {
    /// Startpunkt P0
    pub from: Vec2,
    /// Erster Steuerpunkt P1
    pub control1: Vec2,
    /// Zweiter Steuerpunkt P2
    pub control2: Vec2,
    /// Endpunkt P3
    pub to: Vec2,
}

/// Kubische Bézier-Kurve als Polynom `a·t³ + b·t² + c·t + d` pro Achse.
///
/// Die Gesamtbogenlänge wird eager im Konstruktor berechnet — alle
/// späteren Abfragen (insbesondere die Parameter-Inversion pro Frame)
/// setzen sie als bereits bekannt voraus.
#[derive(Debug, Clone)]
pub struct Bezier3 {
    points: ControlPoints,
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
    total_arc_length: f32,
}

impl Bezier3 {
    /// Erstellt die Kurve aus Start-, Steuer- und Endpunkten.
    ///
    /// Schlägt die Bogenlängen-Integration fehl, gibt es keine Kurve —
    /// ohne gültige Gesamtlänge ist keine Traversierung möglich.
    pub fn new(from: Vec2, control1: Vec2, control2: Vec2, to: Vec2) -> Result<Self, CurveError> {
        Self::from_control_points(ControlPoints {
            from,
            control1,
            control2,
            to,
        })
    }

    /// Erstellt die Kurve aus einem [`ControlPoints`]-Satz.
    pub fn from_control_points(points: ControlPoints) -> Result<Self, CurveError> {
        let ControlPoints {
            from,
            control1,
            control2,
            to,
        } = points;

        let a = to - 3.0 * control2 + 3.0 * control1 - from;
        let b = 3.0 * control2 - 6.0 * control1 + 3.0 * from;
        let c = 3.0 * (control1 - from);
        let d = from;

        let mut curve = Self {
            points,
            a,
            b,
            c,
            d,
            total_arc_length: 0.0,
        };
        curve.total_arc_length = curve.arc_length(1.0)?;
        Ok(curve)
    }

    /// Die Kontrollpunkte, aus denen die Kurve gebaut wurde.
    pub fn control_points(&self) -> &ControlPoints {
        &self.points
    }
}

impl ParametricCurve for Bezier3 {
    fn point(&self, t: f32) -> Vec2 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }

    fn derivative(&self, t: f32) -> Vec2 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    fn second_derivative(&self, t: f32) -> Vec2 {
        6.0 * self.a * t + 2.0 * self.b
    }

    fn total_arc_length(&self) -> f32 {
        self.total_arc_length
    }
}
