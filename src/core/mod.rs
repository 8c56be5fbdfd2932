//! Core-Typen der Anwendungsschicht (Ansicht).
//!
//! Die Spline-Mathematik selbst lebt in der `catmull_rom_engine`-Crate.

pub mod camera;

pub use camera::Camera2D;
