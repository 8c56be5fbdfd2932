//! Rendering mit dem egui-Painter.
//!
//! `SceneCanvas` ist die Zeichenfläche, an die die Editor-Sitzung ihre
//! Zeichen- und Update-Aufrufe schickt; `paint_scene` bringt den daraus
//! gebauten Frame auf den Bildschirm.

mod canvas;
mod painter;

pub use crate::shared::RenderScene;
pub use canvas::SceneCanvas;
pub use painter::paint_scene;
