//! Handler für Anwendungssteuerung und Optionen-Datei.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Speichert die Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    save_options_to(state, &EditorOptions::config_path())
}

/// Speichert die Optionen unter `path`.
///
/// Geschrieben werden nur die Laufzeit-Optionen; die verschobenen
/// Kontrollpunkte bleiben Sitzungszustand.
pub fn save_options_to(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
