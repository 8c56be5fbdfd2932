//! Vertrag zwischen Spline-Kern und Zeichenfläche.

use crate::selection::HandleId;
use crate::spline::ControlPointIndex;
use glam::Vec2;

/// Zeichenfläche, auf der eine [`EditorSession`](crate::EditorSession) ihre
/// Handles und Kurven ablegt.
///
/// Die Zeichenfläche vergibt beim Anlegen eines Handles eine stabile
/// [`HandleId`] und meldet spätere Picks mit genau dieser Identität zurück.
pub trait RenderAdapter {
    /// Legt das Handle für Kontrollpunkt `index` an und liefert seine Identität.
    fn draw_handle(&mut self, index: ControlPointIndex, position: Vec2) -> HandleId;

    /// Verschiebt ein bestehendes Handle.
    fn update_handle_position(&mut self, index: ControlPointIndex, position: Vec2);

    /// Zeichnet das Kontrollpolygon (Linien zwischen den Kontrollpunkten).
    fn draw_control_polygon(&mut self, points: &[Vec2]);

    /// Ersetzt das Kontrollpolygon.
    fn update_control_polygon(&mut self, points: &[Vec2]);

    /// Zeichnet die abgetastete Kurve.
    fn draw_curve(&mut self, points: &[Vec2]);

    /// Ersetzt die abgetastete Kurve.
    fn update_curve(&mut self, points: &[Vec2]);

    /// Hebt den aktiven Kontrollpunkt hervor (`None` = keine Hervorhebung).
    fn highlight_handle(&mut self, _index: Option<ControlPointIndex>) {}
}
