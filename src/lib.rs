//! Catmull-Rom-Spline-Editor Library.
//! App-, Render- und UI-Schicht als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use catmull_rom_engine::{
    AxisPolynomial, ControlPointIndex, EditorSession, HandleId, RenderAdapter, SampleRange,
    SelectionState, SplineCurve, SplineError,
};
pub use crate::core::Camera2D;
pub use render::SceneCanvas;
pub use shared::{EditorOptions, RenderScene};
