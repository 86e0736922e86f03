//! Serpentinen-Pfad aus Linien- und Kreisbogen-Segmenten mit
//! bogenlängen-adressierten Meilenstein-Abfragen.
//!
//! Koordinatensystem wie beim Rendern üblich: y wächst nach unten,
//! der Pfad läuft vom unteren Ankerpunkt nach oben. Linien und Bögen
//! implementieren [`ParametricCurve`] und teilen sich damit dieselben
//! Bogenlängen-Algorithmen wie die Bézier-Kurven.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::curve::ParametricCurve;

/// Radius der kleinen Viertelbögen an Start und Ziel.
pub const SMALL_RADIUS: f32 = 30.0;
/// Radius der großen Halbkehren.
pub const LARGE_RADIUS: f32 = 60.0;
/// Länge der vertikalen Anlauf- und Auslaufstrecken.
pub const END_LINE_LENGTH: f32 = 50.0;

/// Gerades Teilstück.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

impl ParametricCurve for LineSegment {
    fn point(&self, t: f32) -> Vec2 {
        self.start + (self.end - self.start) * t
    }

    fn derivative(&self, _t: f32) -> Vec2 {
        self.end - self.start
    }

    fn second_derivative(&self, _t: f32) -> Vec2 {
        Vec2::ZERO
    }

    fn total_arc_length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Kreisbogen um `center`; `t ∈ [0, 1]` überstreicht `sweep` Radiant
/// ab `start_angle`. Das Vorzeichen von `sweep` bestimmt den Drehsinn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl CircularArc {
    pub fn new(center: Vec2, radius: f32, start_angle: f32, sweep: f32) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep,
        }
    }

    fn angle(&self, t: f32) -> f32 {
        self.start_angle + self.sweep * t
    }
}

impl ParametricCurve for CircularArc {
    fn point(&self, t: f32) -> Vec2 {
        let angle = self.angle(t);
        self.center + self.radius * Vec2::new(angle.cos(), angle.sin())
    }

    fn derivative(&self, t: f32) -> Vec2 {
        let angle = self.angle(t);
        self.radius * self.sweep * Vec2::new(-angle.sin(), angle.cos())
    }

    fn second_derivative(&self, t: f32) -> Vec2 {
        let angle = self.angle(t);
        -self.radius * self.sweep * self.sweep * Vec2::new(angle.cos(), angle.sin())
    }

    fn total_arc_length(&self) -> f32 {
        self.radius * self.sweep.abs()
    }
}

/// Teilstück des Serpentinen-Pfads.
#[derive(Debug, Clone, Copy)]
enum PathElement {
    Line(LineSegment),
    Arc(CircularArc),
}

impl PathElement {
    fn length(&self) -> f32 {
        match self {
            PathElement::Line(line) => line.total_arc_length(),
            PathElement::Arc(arc) => arc.total_arc_length(),
        }
    }

    fn point(&self, t: f32) -> Vec2 {
        match self {
            PathElement::Line(line) => line.point(t),
            PathElement::Arc(arc) => arc.point(t),
        }
    }
}

/// Baut die Elementliste sequenziell ab dem Startpunkt auf.
struct PathBuilder {
    current: Vec2,
    elements: Vec<PathElement>,
}

impl PathBuilder {
    fn new(start: Vec2) -> Self {
        Self {
            current: start,
            elements: Vec::new(),
        }
    }

    fn push_line(&mut self, delta: Vec2) {
        let end = self.current + delta;
        self.elements
            .push(PathElement::Line(LineSegment::new(self.current, end)));
        self.current = end;
    }

    fn line_up(&mut self, length: f32) {
        self.push_line(Vec2::new(0.0, -length));
    }

    fn line_left(&mut self, length: f32) {
        self.push_line(Vec2::new(-length, 0.0));
    }

    fn line_right(&mut self, length: f32) {
        self.push_line(Vec2::new(length, 0.0));
    }

    fn push_arc(&mut self, center: Vec2, radius: f32, start_angle: f32, sweep: f32) {
        let arc = CircularArc::new(center, radius, start_angle, sweep);
        self.elements.push(PathElement::Arc(arc));
        self.current = arc.point(1.0);
    }

    /// Unterster Viertelbogen: von "aufwärts" nach "nach links".
    fn small_arc_bottom(&mut self) {
        let center = self.current - Vec2::new(SMALL_RADIUS, 0.0);
        self.push_arc(center, SMALL_RADIUS, 0.0, -FRAC_PI_2);
    }

    /// Große Halbkehre auf der linken Seite.
    fn large_arc_left(&mut self) {
        let center = self.current - Vec2::new(0.0, LARGE_RADIUS);
        self.push_arc(center, LARGE_RADIUS, FRAC_PI_2, PI);
    }

    /// Große Halbkehre auf der rechten Seite.
    fn large_arc_right(&mut self) {
        let center = self.current - Vec2::new(0.0, LARGE_RADIUS);
        self.push_arc(center, LARGE_RADIUS, FRAC_PI_2, -PI);
    }

    /// Oberster Viertelbogen, ankommend von rechts.
    fn small_arc_top_from_right(&mut self) {
        let center = self.current - Vec2::new(0.0, SMALL_RADIUS);
        self.push_arc(center, SMALL_RADIUS, FRAC_PI_2, FRAC_PI_2);
    }

    /// Oberster Viertelbogen, ankommend von links.
    fn small_arc_top_from_left(&mut self) {
        let center = self.current - Vec2::new(0.0, SMALL_RADIUS);
        self.push_arc(center, SMALL_RADIUS, FRAC_PI_2, -FRAC_PI_2);
    }
}

/// Meilenstein-Platzierung entlang des Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// Ende des fixen Anlaufs, unmittelbar vor der ersten Kehre.
    FirstTurn,
    /// Unmittelbar nach der letzten Kehre.
    LastTurn,
    /// Mitte der i-ten großen Kehre (0-basiert).
    Arc(usize),
    /// Punkt auf dem i-ten Zwischensegment, geteilt in `divisions` Teile.
    SegmentPoint {
        segment: usize,
        divisions: usize,
        index: usize,
    },
}

/// Serpentinen-Pfad: vertikaler Anlauf, kleiner Viertelbogen, dann
/// `arc_count` alternierende große Halbkehren, verbunden durch gerade
/// Zwischensegmente, abgeschlossen durch Viertelbogen und Auslauf.
#[derive(Debug, Clone)]
pub struct MilestonePath {
    arc_count: usize,
    size: Vec2,
    elements: Vec<PathElement>,
    /// `cumulative[i]` = Bogenlänge bis zum Ende von Element `i`.
    cumulative: Vec<f32>,
}

impl MilestonePath {
    /// Baut den Pfad in einem Rechteck der Größe `size`; der Anker liegt
    /// unten in der Mitte. `arc_count == 0` ergibt einen leeren Pfad.
    pub fn new(arc_count: usize, size: Vec2) -> Self {
        let mut elements = Vec::new();

        if arc_count >= 1 {
            let initial_line_width = size.x / 2.0 - (LARGE_RADIUS + SMALL_RADIUS);
            let line_width = size.x - 2.0 * LARGE_RADIUS;

            let mut builder = PathBuilder::new(Vec2::new(size.x / 2.0, size.y));
            builder.line_up(END_LINE_LENGTH);
            builder.small_arc_bottom();
            builder.line_left(initial_line_width);
            builder.large_arc_left();

            // Kehren alternieren: gerade Indizes links, ungerade rechts
            for index in 1..arc_count {
                if index % 2 == 0 {
                    builder.line_left(line_width);
                    builder.large_arc_left();
                } else {
                    builder.line_right(line_width);
                    builder.large_arc_right();
                }
            }

            if arc_count % 2 == 0 {
                builder.line_left(initial_line_width);
                builder.small_arc_top_from_right();
            } else {
                builder.line_right(initial_line_width);
                builder.small_arc_top_from_left();
            }
            builder.line_up(END_LINE_LENGTH);

            elements = builder.elements;
        }

        let mut cumulative = Vec::with_capacity(elements.len());
        let mut sum = 0.0;
        for element in &elements {
            sum += element.length();
            cumulative.push(sum);
        }

        Self {
            arc_count,
            size,
            elements,
            cumulative,
        }
    }

    /// Ankerpunkt des Pfads (unten, mittig).
    fn anchor(&self) -> Vec2 {
        Vec2::new(self.size.x / 2.0, self.size.y)
    }

    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Gesamtlänge als Summe der Elementlängen.
    pub fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Breite der geraden Zwischensegmente.
    pub fn line_segment_width(&self) -> f32 {
        self.size.x - 2.0 * LARGE_RADIUS
    }

    fn initial_line_width(&self) -> f32 {
        self.size.x / 2.0 - (LARGE_RADIUS + SMALL_RADIUS)
    }

    /// Fixe Anlauflänge: Vertikale + kleiner Viertelbogen + erstes
    /// Horizontalstück. Identisch am Start und am Ziel.
    pub fn fixed_end_length(&self) -> f32 {
        END_LINE_LENGTH + SMALL_RADIUS * FRAC_PI_2 + self.initial_line_width()
    }

    /// Punkt bei absoluter Bogenlänge `s`, geklemmt auf `[0, total]`.
    pub fn point_at(&self, s: f32) -> Vec2 {
        if self.elements.is_empty() {
            return self.anchor();
        }
        let s = s.clamp(0.0, self.total_length());
        let index = self
            .cumulative
            .partition_point(|&length| length < s)
            .min(self.elements.len() - 1);
        let start = if index == 0 {
            0.0
        } else {
            self.cumulative[index - 1]
        };
        let length = self.cumulative[index] - start;
        let t = if length > f32::EPSILON {
            (s - start) / length
        } else {
            0.0
        };
        self.elements[index].point(t)
    }

    /// Startpunkt (unterster Punkt des Pfads).
    pub fn bottommost_point(&self) -> Vec2 {
        self.point_at(0.0)
    }

    /// Zielpunkt (oberster Punkt des Pfads).
    pub fn topmost_point(&self) -> Vec2 {
        self.point_at(self.total_length())
    }

    /// Höhendifferenz zwischen Start- und Zielpunkt.
    pub fn total_height(&self) -> f32 {
        (self.topmost_point().y - self.bottommost_point().y).abs()
    }

    /// Punkt einer Meilenstein-Platzierung.
    pub fn point_at_milestone(&self, milestone: Milestone) -> Vec2 {
        self.point_at(self.milestone_length(milestone))
    }

    /// Absolute Bogenlänge einer Meilenstein-Platzierung.
    pub fn milestone_length(&self, milestone: Milestone) -> f32 {
        let half_turn = LARGE_RADIUS * PI;
        match milestone {
            Milestone::FirstTurn => self.fixed_end_length(),
            Milestone::LastTurn => self.total_length() - self.fixed_end_length(),
            Milestone::Arc(index) => {
                // Mitte der Kehre: 90 Grad in den Bogen hinein
                self.fixed_end_length()
                    + index as f32 * (half_turn + self.line_segment_width())
                    + LARGE_RADIUS * FRAC_PI_2
            }
            Milestone::SegmentPoint {
                segment,
                divisions,
                index,
            } => {
                let start = self.fixed_end_length()
                    + (segment as f32 + 1.0) * half_turn
                    + segment as f32 * self.line_segment_width();
                let step = self.line_segment_width() / divisions.max(1) as f32;
                start + step * index.min(divisions) as f32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SIZE: Vec2 = Vec2::new(400.0, 800.0);

    #[test]
    fn test_linie_als_parametrische_kurve() {
        let line = LineSegment::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0));
        assert_relative_eq!(line.total_arc_length(), 50.0);
        // Generische Quadratur muss die analytische Länge treffen
        assert_relative_eq!(line.arc_length(1.0).unwrap(), 50.0, epsilon = 0.05);
        assert_relative_eq!(line.arc_length(0.5).unwrap(), 25.0, epsilon = 0.05);
        // Gerade: Krümmung exakt 0
        assert_eq!(line.curvature(0.5), 0.0);
    }

    #[test]
    fn test_bogen_als_parametrische_kurve() {
        let arc = CircularArc::new(Vec2::ZERO, 60.0, 0.0, PI);
        assert_relative_eq!(arc.total_arc_length(), 60.0 * PI);
        assert_relative_eq!(arc.arc_length(1.0).unwrap(), 60.0 * PI, epsilon = 0.2);
        // |κ| = 1/r
        assert_relative_eq!(arc.curvature(0.5).abs(), 1.0 / 60.0, epsilon = 1e-5);
        // Inversion: halbe Länge → t = 0.5
        let t = arc.curve_parameter(30.0 * PI);
        assert_relative_eq!(t, 0.5, epsilon = 1e-2);
    }

    #[test]
    fn test_gesamtlaenge_geschlossene_form() {
        for arc_count in 1..=5 {
            let path = MilestonePath::new(arc_count, SIZE);
            let n = arc_count as f32;
            let expected = 2.0 * path.fixed_end_length()
                + n * LARGE_RADIUS * PI
                + (n - 1.0) * path.line_segment_width();
            assert_relative_eq!(path.total_length(), expected, epsilon = 0.01);
        }
    }

    #[test]
    fn test_start_und_zielpunkt() {
        let path = MilestonePath::new(3, SIZE);
        let bottom = path.bottommost_point();
        assert_relative_eq!(bottom.x, SIZE.x / 2.0, epsilon = 0.01);
        assert_relative_eq!(bottom.y, SIZE.y, epsilon = 0.01);

        // Ziel: oben, um END_LINE_LENGTH über dem letzten Bogen
        let top = path.topmost_point();
        assert!(top.y < bottom.y);
        assert_relative_eq!(path.total_height(), bottom.y - top.y, epsilon = 0.01);
    }

    #[test]
    fn test_kehren_alternieren_links_rechts() {
        let path = MilestonePath::new(4, SIZE);
        // Kehrenmitte liegt auf Scheitelhöhe der Halbkehre: ganz links
        // bzw. ganz rechts im Rechteck
        let first = path.point_at_milestone(Milestone::Arc(0));
        let second = path.point_at_milestone(Milestone::Arc(1));
        assert!(first.x < SIZE.x / 2.0, "erste Kehre links: {first}");
        assert!(second.x > SIZE.x / 2.0, "zweite Kehre rechts: {second}");
        assert_relative_eq!(first.x, 0.0, epsilon = 0.01);
        assert_relative_eq!(second.x, SIZE.x, epsilon = 0.01);
        // Jede Kehre liegt höher (kleineres y) als die vorige
        assert!(second.y < first.y);
    }

    #[test]
    fn test_segmentteilung_gleichmaessig() {
        let path = MilestonePath::new(3, SIZE);
        let points: Vec<Vec2> = (0..=4)
            .map(|index| {
                path.point_at_milestone(Milestone::SegmentPoint {
                    segment: 0,
                    divisions: 4,
                    index,
                })
            })
            .collect();
        // Segment 0 ist horizontal → gleiche y, äquidistante x
        let spacing = path.line_segment_width() / 4.0;
        for pair in points.windows(2) {
            assert_relative_eq!(pair[0].y, pair[1].y, epsilon = 0.01);
            assert_relative_eq!((pair[1].x - pair[0].x).abs(), spacing, epsilon = 0.01);
        }
    }

    #[test]
    fn test_first_und_last_turn() {
        let path = MilestonePath::new(2, SIZE);
        let first = path.point_at_milestone(Milestone::FirstTurn);
        let last = path.point_at_milestone(Milestone::LastTurn);
        // FirstTurn: Einstieg in die erste Kehre, auf Höhe des ersten
        // Horizontalstücks
        assert_relative_eq!(first.x, LARGE_RADIUS, epsilon = 0.01);
        // LastTurn liegt oberhalb von FirstTurn
        assert!(last.y < first.y);
    }

    #[test]
    fn test_leerer_pfad() {
        let path = MilestonePath::new(0, SIZE);
        assert_eq!(path.total_length(), 0.0);
        assert_eq!(path.point_at(100.0), Vec2::new(SIZE.x / 2.0, SIZE.y));
    }

    #[test]
    fn test_point_at_klemmt_auf_pfadenden() {
        let path = MilestonePath::new(2, SIZE);
        assert_eq!(path.point_at(-10.0), path.bottommost_point());
        let beyond = path.point_at(path.total_length() + 100.0);
        assert_eq!(beyond, path.topmost_point());
    }
}
