use crate::app::CommandLog;
use crate::render::SceneCanvas;
use crate::shared::EditorOptions;
use catmull_rom_engine::{EditorSession, SplineCurve};

use super::ViewState;

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Spline, Selektion und Sample-Cache
    pub session: EditorSession,
    /// Zeichenfläche, auf der die Sitzung ihre Handles und Linien ablegt
    pub canvas: SceneCanvas,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Startpunkte, Farben, Bereiche)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den App-State und baut die Editor-Sitzung auf.
    ///
    /// Schlägt fehl, wenn die Optionen ungültig sind oder die Sitzung sich
    /// nicht auf der Zeichenfläche einrichten lässt.
    pub fn new(options: EditorOptions) -> anyhow::Result<Self> {
        options.validate()?;

        let curve = SplineCurve::from_points_with_tension(options.control_points(), options.tension);
        let mut session = EditorSession::new(curve, options.display_range()?);
        let mut canvas = SceneCanvas::new(options.handle_radius);
        session.setup(&mut canvas)?;

        Ok(Self {
            session,
            canvas,
            view: ViewState::new(&options),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        })
    }

    /// Index des aktuell gegriffenen Kontrollpunkts (für UI-Anzeige)
    pub fn active_index(&self) -> Option<catmull_rom_engine::ControlPointIndex> {
        self.session.selection().active_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_up_session_on_canvas() {
        let state = AppState::new(EditorOptions::default()).expect("Standard-Optionen sind gültig");

        assert_eq!(state.canvas.handles().len(), 4);
        assert_eq!(state.session.selection().handle_count(), 4);
        assert_eq!(state.canvas.curve().len(), 31);
        assert_eq!(state.canvas.control_polygon().len(), 4);
        assert!(state.command_log.is_empty());
        assert!(!state.should_exit);
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let mut options = EditorOptions::default();
        options.sample_step = -0.1;

        assert!(AppState::new(options).is_err());
    }
}
