//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `ctrl_down` hält den Ctrl-Zustand des Vorframes; nur die Druck-Flanke
/// bricht eine aktive Auswahl ab.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, ctrl_down: &mut bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_escape_pressed, key_p_pressed, key_t_pressed, key_s_pressed) =
        ui.input(|i| {
            (
                i.modifiers,
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::T),
                i.key_pressed(egui::Key::S),
            )
        });

    // Ctrl: Selektion abbrechen (Flanke, nicht Dauerzustand)
    if modifiers.ctrl && !*ctrl_down {
        events.push(AppIntent::SelectionCancelled);
    }
    *ctrl_down = modifiers.ctrl;

    if key_escape_pressed {
        events.push(AppIntent::ExitRequested);
    }

    let command = modifiers.command || modifiers.ctrl;

    if command && key_s_pressed {
        events.push(AppIntent::SaveOptionsRequested);
    }

    if !command && key_p_pressed {
        events.push(AppIntent::ToggleControlPolygonRequested);
    }

    if !command && key_t_pressed {
        events.push(AppIntent::ToggleTangentsRequested);
    }

    events
}
