//! Zeichnet eine `RenderScene` mit dem egui-Painter in den Viewport.

use crate::core::Camera2D;
use crate::shared::RenderScene;
use eframe::egui;
use glam::Vec2;

/// Farbe der Achsen und des Achsenrahmens.
const AXIS_COLOR: egui::Color32 = egui::Color32::from_gray(110);
/// Länge der Striche und Lücken im Kontrollpolygon (Pixel).
const DASH_LENGTH_PX: f32 = 6.0;

/// Zeichnet Achsen, Kurve, Segment, Kontrollpolygon, Tangenten und Handles.
///
/// Zeichenreihenfolge: Achsen zuunterst, Handles zuoberst, damit sie auch
/// über der Kurve greifbar sichtbar bleiben.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let viewport_size = Vec2::new(rect.width(), rect.height());
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return;
    }
    let to_screen = |world: Vec2| world_to_rect(&scene.camera, rect, viewport_size, world);
    let opts = &scene.options;
    let width = opts.line_width_px;

    paint_axes(painter, &scene.camera, &to_screen);

    if scene.has_curve() {
        let points: Vec<egui::Pos2> = scene.curve.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(width, color32(opts.curve_color)),
        ));
    }

    if scene.segment.len() >= 2 {
        let points: Vec<egui::Pos2> = scene.segment.iter().map(|&p| to_screen(p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(width * 2.0, color32(opts.segment_color)),
        ));
    }

    if scene.control_polygon.len() >= 2 {
        let points: Vec<egui::Pos2> = scene
            .control_polygon
            .iter()
            .map(|&p| to_screen(p))
            .collect();
        painter.extend(egui::Shape::dashed_line(
            &points,
            egui::Stroke::new(width * 0.5, color32(opts.control_polygon_color)),
            DASH_LENGTH_PX,
            DASH_LENGTH_PX,
        ));
    }

    let tangent_stroke = egui::Stroke::new(width, color32(opts.tangent_color));
    for [start, end] in &scene.tangents {
        painter.arrow(
            to_screen(*start),
            to_screen(*end) - to_screen(*start),
            tangent_stroke,
        );
    }

    let pixels_per_unit = scene.camera.pixels_per_unit(viewport_size);
    for handle in &scene.handles {
        let center = to_screen(handle.center);
        let radius = handle.radius * pixels_per_unit;
        let fill = color32(opts.handle_colors[handle.index.get()]);
        let outline = if scene.active_index == Some(handle.index) {
            egui::Stroke::new(2.0, color32(opts.handle_active_outline))
        } else {
            egui::Stroke::NONE
        };
        painter.circle(center, radius, fill, outline);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            handle.index.to_string(),
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
}

/// Achsenrahmen der festen Grenzen und die Koordinatenachsen durch den Ursprung.
fn paint_axes(painter: &egui::Painter, camera: &Camera2D, to_screen: &impl Fn(Vec2) -> egui::Pos2) {
    let stroke = egui::Stroke::new(1.0, AXIS_COLOR);
    let [x_min, x_max] = camera.x_limits;
    let [y_min, y_max] = camera.y_limits;

    let corners = [
        Vec2::new(x_min, y_min),
        Vec2::new(x_max, y_min),
        Vec2::new(x_max, y_max),
        Vec2::new(x_min, y_max),
        Vec2::new(x_min, y_min),
    ];
    painter.add(egui::Shape::line(
        corners.iter().map(|&c| to_screen(c)).collect(),
        stroke,
    ));

    if (x_min..=x_max).contains(&0.0) {
        painter.line_segment(
            [to_screen(Vec2::new(0.0, y_min)), to_screen(Vec2::new(0.0, y_max))],
            stroke,
        );
    }
    if (y_min..=y_max).contains(&0.0) {
        painter.line_segment(
            [to_screen(Vec2::new(x_min, 0.0)), to_screen(Vec2::new(x_max, 0.0))],
            stroke,
        );
    }
}

/// Weltposition → absolute Bildschirmposition innerhalb von `rect`.
fn world_to_rect(camera: &Camera2D, rect: egui::Rect, viewport_size: Vec2, world: Vec2) -> egui::Pos2 {
    let sp = camera.world_to_screen(world, viewport_size);
    egui::pos2(rect.min.x + sp.x, rect.min.y + sp.y)
}

/// RGBA-Farbe [0, 1] → egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0].clamp(0.0, 1.0) * 255.0) as u8,
        (rgba[1].clamp(0.0, 1.0) * 255.0) as u8,
        (rgba[2].clamp(0.0, 1.0) * 255.0) as u8,
        (rgba[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_scales_and_clamps() {
        let c = color32([1.0, 0.0, 2.0, 0.5]);
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(255, 0, 255, 127));
    }

    #[test]
    fn test_world_to_rect_applies_rect_offset() {
        let camera = Camera2D::new([0.0, 10.0], [0.0, 10.0]);
        let rect = egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 200.0));
        let size = Vec2::new(200.0, 200.0);

        let origin = world_to_rect(&camera, rect, size, Vec2::ZERO);
        assert_eq!(origin, egui::pos2(100.0, 250.0));

        let center = world_to_rect(&camera, rect, size, Vec2::new(5.0, 5.0));
        assert_eq!(center, egui::pos2(200.0, 150.0));
    }
}
