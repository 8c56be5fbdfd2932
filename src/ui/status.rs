//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        // Polynome der beiden Achsen
        ui.horizontal(|ui| match state.session.curve().axes() {
            Some(axes) => {
                ui.monospace(format!("x(t) = {}", axes.x));
                ui.separator();
                ui.monospace(format!("y(t) = {}", axes.y));
            }
            None => {
                ui.label("Kurve unvollständig");
            }
        });

        ui.horizontal(|ui| {
            for (index, point) in state.session.curve().control_points().iter().enumerate() {
                if let Some(p) = point {
                    ui.label(format!("P{}: ({:.2}, {:.2})", index, p.x, p.y));
                    ui.separator();
                }
            }

            match state.active_index() {
                Some(index) => ui.label(format!("Aktiv: {}", index)),
                None => ui.label("Aktiv: -"),
            };

            ui.separator();
            ui.label(format!("Tension: {:.2}", state.session.curve().tension()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("P: Polygon | T: Tangenten | Strg+S: Optionen speichern | Esc: Beenden");
            });
        });
    });
}
