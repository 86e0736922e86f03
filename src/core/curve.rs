//! Parametrische Kurven: minimales Fähigkeiten-Interface plus geteilte
//! Algorithmen (Bogenlänge, Parameter-Inversion, Krümmung).
//!
//! Die Algorithmen liegen als Default-Methoden über dem Interface
//! `point`/`derivative`/`second_derivative` — jede Kurvenfamilie, die
//! diese drei liefert, bekommt Bogenlängen-Parametrisierung geschenkt.

use glam::Vec2;
use thiserror::Error;

use super::quadrature;

/// Maximale Newton-Iterationen der Parameter-Inversion.
pub const SOLVER_MAX_ITERATIONS: usize = 10;
/// Absolute Abbruch-Toleranz der Inversion (Längeneinheiten).
pub const SOLVER_TOLERANCE: f32 = 0.1;

/// Fehler der numerischen Kurven-Algorithmen.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// Die adaptive Quadratur hat ihr Intervall-Budget ausgeschöpft.
    #[error("numerische Integration nicht konvergiert (Fehlerschätzung {estimate}, Toleranz {tolerance})")]
    NumericIntegration { estimate: f32, tolerance: f32 },
    /// Gesamtbogenlänge ist 0 — die Parameter-Inversion ist nicht definiert.
    #[error("degenerierte Kurve: Gesamtbogenlänge ist 0")]
    DegenerateCurve,
}

/// Parametrische 2D-Kurve über `t`.
///
/// `t` ist nicht auf `[0, 1]` geklemmt: `point` und die Ableitungen
/// extrapolieren außerhalb des Definitionsbereichs, und der Solver darf
/// den Bereich zwischen den Iterationen transient verlassen.
pub trait ParametricCurve {
    /// Punkt auf der Kurve bei Parameter `t`.
    fn point(&self, t: f32) -> Vec2;

    /// Erste Ableitung (Geschwindigkeit) bei `t`.
    fn derivative(&self, t: f32) -> Vec2;

    /// Zweite Ableitung (Beschleunigung) bei `t`.
    fn second_derivative(&self, t: f32) -> Vec2;

    /// Gesamtbogenlänge über `t ∈ [0, 1]`, vom Implementor gecacht.
    fn total_arc_length(&self) -> f32;

    /// Vorzeichenbehaftete Bogenlänge von Parameter 0 bis `t`.
    ///
    /// Integriert `‖derivative(u)‖` über `[min(0,t), max(0,t)]`;
    /// negatives `t` liefert negative Länge.
    fn arc_length(&self, t: f32) -> Result<f32, CurveError> {
        let (t_min, t_max) = if t < 0.0 { (t, 0.0) } else { (0.0, t) };
        let length = quadrature::integrate(|u| self.derivative(u).length(), t_min, t_max)?;
        Ok(if t < 0.0 { -length } else { length })
    }

    /// Invertiert `t ↦ arc_length(t)` per Newton-Verfahren.
    ///
    /// Startschätzung `s / Gesamtlänge`, danach bis zu
    /// [`SOLVER_MAX_ITERATIONS`] Schritte `t ← t − err / ‖derivative(t)‖`.
    /// Erreicht die Schleife das Iterationslimit, wird die beste bisherige
    /// Schätzung zurückgegeben — bewusst begrenzter Aufwand, kein Fehler.
    fn try_curve_parameter(&self, arc_length: f32) -> Result<f32, CurveError> {
        let cached = self.total_arc_length();
        let total = if cached == 0.0 {
            self.arc_length(1.0)?
        } else {
            cached
        };
        if total <= 0.0 {
            return Err(CurveError::DegenerateCurve);
        }

        let mut guess = arc_length / total;
        for _ in 0..SOLVER_MAX_ITERATIONS {
            let error = match self.arc_length(guess) {
                Ok(length) => length - arc_length,
                Err(e) => {
                    log::warn!("Bogenlängen-Integration während der Inversion fehlgeschlagen: {e}");
                    break;
                }
            };
            if error.abs() < SOLVER_TOLERANCE {
                break;
            }
            let speed = self.derivative(guess).length();
            guess -= error / speed;
        }

        Ok(guess)
    }

    /// Wie [`try_curve_parameter`](Self::try_curve_parameter), degenerierte
    /// Kurven fallen auf `t = 0` zurück statt durch 0 zu teilen.
    fn curve_parameter(&self, arc_length: f32) -> f32 {
        match self.try_curve_parameter(arc_length) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Parameter-Inversion: {e}, Fallback t=0");
                0.0
            }
        }
    }

    /// Vorzeichenbehaftete Krümmung.
    ///
    /// ```text
    ///          x'y" − y'x"
    /// κ(t) = ----------------
    ///        (x'² + y'²)^(3/2)
    /// ```
    ///
    /// Bei Nullgeschwindigkeit ist das Ergebnis NaN — das definierte
    /// "Krümmung hier nicht definiert"-Signal, kein Fehlerfall.
    fn curvature(&self, t: f32) -> f32 {
        let dp = self.derivative(t);
        let dp2 = self.second_derivative(t);
        let speed = dp.length();
        let denominator = speed * speed * speed;
        let numerator = dp.x * dp2.y - dp.y * dp2.x;
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Kreisbogen mit Radius `r`, `t` in Radiant: Bogenlänge ist exakt `r·t`.
    struct TestCircle {
        radius: f32,
    }

    impl ParametricCurve for TestCircle {
        fn point(&self, t: f32) -> Vec2 {
            self.radius * Vec2::new(t.cos(), t.sin())
        }

        fn derivative(&self, t: f32) -> Vec2 {
            self.radius * Vec2::new(-t.sin(), t.cos())
        }

        fn second_derivative(&self, t: f32) -> Vec2 {
            -self.radius * Vec2::new(t.cos(), t.sin())
        }

        fn total_arc_length(&self) -> f32 {
            self.radius
        }
    }

    #[test]
    fn test_bogenlaenge_kreis() {
        let circle = TestCircle { radius: 100.0 };
        let length = circle.arc_length(0.5).unwrap();
        assert_relative_eq!(length, 50.0, epsilon = 0.05);
    }

    #[test]
    fn test_negatives_t_liefert_negative_laenge() {
        let circle = TestCircle { radius: 100.0 };
        let length = circle.arc_length(-0.5).unwrap();
        assert_relative_eq!(length, -50.0, epsilon = 0.05);
    }

    #[test]
    fn test_bogenlaenge_monoton() {
        let circle = TestCircle { radius: 100.0 };
        let mut previous = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let length = circle.arc_length(t).unwrap();
            assert!(length >= previous, "arc_length({t}) = {length} < {previous}");
            previous = length;
        }
    }

    #[test]
    fn test_inversion_roundtrip() {
        let circle = TestCircle { radius: 100.0 };
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let s = circle.arc_length(t).unwrap();
            let recovered = circle.curve_parameter(s);
            // Toleranz des Solvers: 0.1 Längeneinheiten → 0.001 in t
            assert!(
                (circle.arc_length(recovered).unwrap() - s).abs() < SOLVER_TOLERANCE,
                "Roundtrip bei t={t}: {recovered}"
            );
        }
    }

    #[test]
    fn test_kruemmung_kreis_ist_inverser_radius() {
        let circle = TestCircle { radius: 100.0 };
        assert_relative_eq!(circle.curvature(0.3), 0.01, epsilon = 1e-5);
    }
}
