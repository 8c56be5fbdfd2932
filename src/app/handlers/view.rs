//! Handler für Viewport und Sichtbarkeit der Hilfslinien.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Blendet das Kontrollpolygon ein oder aus.
pub fn toggle_control_polygon(state: &mut AppState) {
    state.options.show_control_polygon = !state.options.show_control_polygon;
    log::debug!("Kontrollpolygon sichtbar: {}", state.options.show_control_polygon);
}

/// Blendet die Tangenten an P1 und P2 ein oder aus.
pub fn toggle_tangents(state: &mut AppState) {
    state.options.show_tangents = !state.options.show_tangents;
    log::debug!("Tangenten sichtbar: {}", state.options.show_tangents);
}
