//! 2D-Kamera mit festen Achsengrenzen und gleichem Seitenverhältnis.

use glam::Vec2;

/// 2D-Kamera, die einen festen Weltbereich in den Viewport einpasst.
///
/// Beide Achsen verwenden denselben Maßstab; der Bereich wird im Viewport
/// zentriert. Die y-Achse zeigt nach oben.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Sichtbarer x-Bereich [min, max]
    pub x_limits: [f32; 2],
    /// Sichtbarer y-Bereich [min, max]
    pub y_limits: [f32; 2],
}

impl Camera2D {
    /// Erstellt eine Kamera für die gegebenen Achsengrenzen.
    pub fn new(x_limits: [f32; 2], y_limits: [f32; 2]) -> Self {
        Self { x_limits, y_limits }
    }

    /// Mittelpunkt des sichtbaren Bereichs in Welt-Koordinaten.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            0.5 * (self.x_limits[0] + self.x_limits[1]),
            0.5 * (self.y_limits[0] + self.y_limits[1]),
        )
    }

    /// Pixel pro Welteinheit, sodass beide Achsengrenzen sichtbar sind.
    pub fn pixels_per_unit(&self, screen_size: Vec2) -> f32 {
        let width = (self.x_limits[1] - self.x_limits[0]).max(f32::EPSILON);
        let height = (self.y_limits[1] - self.y_limits[0]).max(f32::EPSILON);
        (screen_size.x / width).min(screen_size.y / height).max(f32::EPSILON)
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Ursprung oben links).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit(screen_size);
        let offset = (world_pos - self.center()) * scale;
        Vec2::new(
            0.5 * screen_size.x + offset.x,
            0.5 * screen_size.y - offset.y,
        )
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.pixels_per_unit(screen_size);
        let local = screen_pos - 0.5 * screen_size;
        self.center() + Vec2::new(local.x, -local.y) / scale
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(
            crate::shared::options::AXIS_X_LIMITS,
            crate::shared::options::AXIS_Y_LIMITS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_screen_center() {
        let camera = Camera2D::default();
        let screen_size = Vec2::new(800.0, 600.0);
        let screen = camera.world_to_screen(camera.center(), screen_size);
        assert_relative_eq!(screen.x, 400.0);
        assert_relative_eq!(screen.y, 300.0);
    }

    #[test]
    fn test_scale_fits_limiting_axis() {
        // 20 × 10 Welteinheiten in 800 × 600 Pixel → x begrenzt: 40 px/Einheit
        let camera = Camera2D::new([-3.0, 17.0], [-3.0, 7.0]);
        assert_relative_eq!(camera.pixels_per_unit(Vec2::new(800.0, 600.0)), 40.0);
        // In 800 × 200 Pixel → y begrenzt: 20 px/Einheit
        assert_relative_eq!(camera.pixels_per_unit(Vec2::new(800.0, 200.0)), 20.0);
    }

    #[test]
    fn test_y_axis_points_up() {
        let camera = Camera2D::default();
        let screen_size = Vec2::new(800.0, 600.0);
        let low = camera.world_to_screen(Vec2::new(0.0, 0.0), screen_size);
        let high = camera.world_to_screen(Vec2::new(0.0, 5.0), screen_size);
        assert!(high.y < low.y, "Größeres y muss weiter oben liegen");
    }

    #[test]
    fn test_screen_world_round_trip() {
        let camera = Camera2D::default();
        let screen_size = Vec2::new(1280.0, 720.0);
        let world = Vec2::new(4.01, 0.01);
        let back = camera.screen_to_world(camera.world_to_screen(world, screen_size), screen_size);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-4);
    }
}
