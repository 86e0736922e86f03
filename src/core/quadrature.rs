//! Adaptive Gauss-Kronrod-Quadratur (G7/K15) für Bogenlängen-Integrale.
//!
//! Das Intervall mit der größten Fehlerschätzung wird jeweils halbiert,
//! bis die Toleranz erreicht ist oder das Teilintervall-Budget ausgeschöpft
//! ist. Das Budget garantiert Terminierung pro Aufruf.

use super::curve::CurveError;

/// Absolute Toleranz (Längeneinheiten).
pub const ABSOLUTE_TOLERANCE: f32 = 5.0e-2;
/// Relative Toleranz.
pub const RELATIVE_TOLERANCE: f32 = 1.0e-3;
/// Maximale Anzahl Teilintervalle.
pub const MAX_SUBINTERVALS: usize = 8;

/// Kronrod-Stützstellen der 15-Punkt-Regel (positive Hälfte inkl. 0).
const XGK: [f32; 8] = [
    0.991455371120813,
    0.949107912342759,
    0.864864423359769,
    0.741531185599394,
    0.586087235467691,
    0.405845151377397,
    0.207784955007898,
    0.0,
];

/// Kronrod-Gewichte zu `XGK`.
const WGK: [f32; 8] = [
    0.022935322010529,
    0.063092092629979,
    0.104790010322250,
    0.140653259715525,
    0.169004726639267,
    0.190350578064785,
    0.204432940075298,
    0.209482141084728,
];

/// Gewichte der eingebetteten 7-Punkt-Gauß-Regel
/// (Stützstellen sind `XGK[1]`, `XGK[3]`, `XGK[5]` und 0).
const WG: [f32; 4] = [
    0.129484966168870,
    0.279705391489277,
    0.381830050505119,
    0.417959183673469,
];

/// Teilintervall mit K15-Wert und Fehlerschätzung |K15 − G7|.
#[derive(Debug, Clone, Copy)]
struct Panel {
    a: f32,
    b: f32,
    value: f32,
    error: f32,
}

/// Wertet K15 und die eingebettete G7-Regel auf `[a, b]` aus.
fn kronrod15(f: &impl Fn(f32) -> f32, a: f32, b: f32) -> Panel {
    let center = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(center);
    let mut kronrod = WGK[7] * fc;
    let mut gauss = WG[3] * fc;

    for j in 0..7 {
        let dx = half * XGK[j];
        let sum = f(center - dx) + f(center + dx);
        kronrod += WGK[j] * sum;
        if j % 2 == 1 {
            gauss += WG[j / 2] * sum;
        }
    }

    Panel {
        a,
        b,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    }
}

/// Integriert `f` über `[a, b]` mit adaptiver Bisektion.
///
/// Konvergenzkriterium: Summe der Fehlerschätzungen ≤
/// `max(ABSOLUTE_TOLERANCE, RELATIVE_TOLERANCE · |Ergebnis|)`.
/// Wird das Budget von [`MAX_SUBINTERVALS`] erreicht, ohne die Toleranz
/// zu unterschreiten, schlägt der Aufruf fehl statt einen still falschen
/// Wert zu liefern.
pub fn integrate(f: impl Fn(f32) -> f32, a: f32, b: f32) -> Result<f32, CurveError> {
    if a == b {
        return Ok(0.0);
    }

    let mut panels: Vec<Panel> = Vec::with_capacity(MAX_SUBINTERVALS);
    panels.push(kronrod15(&f, a, b));

    loop {
        let total: f32 = panels.iter().map(|p| p.value).sum();
        let error_sum: f32 = panels.iter().map(|p| p.error).sum();
        let tolerance = ABSOLUTE_TOLERANCE.max(RELATIVE_TOLERANCE * total.abs());

        if error_sum <= tolerance {
            return Ok(total);
        }
        if panels.len() >= MAX_SUBINTERVALS {
            return Err(CurveError::NumericIntegration {
                estimate: error_sum,
                tolerance,
            });
        }

        // Intervall mit der größten Fehlerschätzung halbieren
        let worst = panels
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let panel = panels.swap_remove(worst);
        let mid = 0.5 * (panel.a + panel.b);
        panels.push(kronrod15(&f, panel.a, mid));
        panels.push(kronrod15(&f, mid, panel.b));
    }
}
