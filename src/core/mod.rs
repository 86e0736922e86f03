//! Numerischer Kern: Kurven-Trait, Quadratur, Bézier, Serpentinen-Pfad
//! und Durchlauf-Treiber.

pub mod bezier;
pub mod curve;
pub mod milestone;
pub mod quadrature;
pub mod traversal;

pub use bezier::{Bezier3, ControlPoints};
pub use curve::{CurveError, ParametricCurve, SOLVER_MAX_ITERATIONS, SOLVER_TOLERANCE};
pub use milestone::{CircularArc, LineSegment, Milestone, MilestonePath};
pub use quadrature::{ABSOLUTE_TOLERANCE, MAX_SUBINTERVALS, RELATIVE_TOLERANCE};
pub use traversal::{pose_at, TrackCursor, TrackPose, TraversalPhase};
