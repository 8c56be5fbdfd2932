use crate::core::Camera2D;
use crate::shared::EditorOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera mit festen Achsengrenzen
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand für die Achsengrenzen der Optionen.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            camera: Camera2D::new(options.axis_x_limits, options.axis_y_limits),
            viewport_size: [0.0, 0.0],
        }
    }
}
