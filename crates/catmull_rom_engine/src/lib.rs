//! Catmull-Rom-Spline-Kern des Kurven-Editors.
//!
//! Enthält die reine Spline-Mathematik und die Selektions-Zustandsmaschine,
//! ohne Abhängigkeit von UI oder Renderer:
//! - `basis`:     kubisches Achsen-Polynom mit Catmull-Rom-Tangentenregel
//! - `spline`:    vier Kontrollpunkte, Achsen-Polynome, Sampling
//! - `selection`: Handle-Registry und Idle/Active-Zustandsmaschine
//! - `adapter`:   Vertrag zur Zeichenfläche
//! - `session`:   verbindet alles zu einer interaktiven Sitzung

pub mod adapter;
pub mod basis;
pub mod error;
pub mod selection;
pub mod session;
pub mod spline;

pub use adapter::RenderAdapter;
pub use basis::{AxisPolynomial, DEFAULT_TENSION};
pub use error::SplineError;
pub use selection::{HandleId, SelectionController, SelectionState};
pub use session::EditorSession;
pub use spline::{
    CONTROL_POINT_COUNT, ControlPointIndex, MAX_SAMPLES, SampleRange, SplineAxes, SplineCurve,
};
