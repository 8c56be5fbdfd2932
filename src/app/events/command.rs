use catmull_rom_engine::HandleId;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Handle greifen (Selektion aktivieren)
    PickHandle { handle: HandleId },
    /// Aktiven Kontrollpunkt an Weltposition verschieben
    DragActivePoint { world_pos: glam::Vec2 },
    /// Selektion nach dem Loslassen beenden
    ReleaseSelection,
    /// Selektion abbrechen
    CancelSelection,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
    /// Kontrollpolygon umschalten
    ToggleControlPolygon,
    /// Tangenten umschalten
    ToggleTangents,
    /// Optionen speichern
    SaveOptions,
}
