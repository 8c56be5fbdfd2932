use catmull_rom_engine::HandleId;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Pointer-Down auf einem Handle der Zeichenfläche
    HandlePicked { handle: HandleId },
    /// Pointer bewegt (Weltkoordinaten)
    PointerMoved { world_pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Aktive Auswahl per Ctrl abbrechen
    SelectionCancelled,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Anwendung beenden (Escape)
    ExitRequested,
    /// Kontrollpolygon ein-/ausblenden
    ToggleControlPolygonRequested,
    /// Tangenten an P1/P2 ein-/ausblenden
    ToggleTangentsRequested,
    /// Aktuelle Optionen als TOML neben der Binary speichern
    SaveOptionsRequested,
}
