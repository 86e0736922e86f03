//! Flight-Track Library.
//! Bogenlängen-Parametrisierung parametrischer Kurven: bildet eine
//! zurückgelegte Distanz auf den Kurvenparameter ab und ermöglicht so
//! Bewegung mit konstanter Geschwindigkeit entlang kubischer
//! Bézier-Kurven (und anderer Kurvenfamilien).

pub mod core;
pub mod shared;

pub use crate::core::{
    pose_at, Bezier3, CircularArc, ControlPoints, CurveError, LineSegment, Milestone,
    MilestonePath, ParametricCurve, TrackCursor, TrackPose, TraversalPhase,
};
pub use crate::shared::TrackOptions;
