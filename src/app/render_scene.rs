//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use catmull_rom_engine::SplineCurve;
use glam::Vec2;
use std::sync::Arc;

/// Tangenten werden mit m/3 gezeichnet (Länge des Bézier-Stützvektors).
const TANGENT_SCALE: f32 = 1.0 / 3.0;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let curve = state.session.curve();

    let control_polygon = if state.options.show_control_polygon {
        state.canvas.control_polygon()
    } else {
        Arc::from(Vec::new())
    };

    let segment = state
        .options
        .segment_range()
        .and_then(|range| Ok(curve.sample_range(&range)?))
        .unwrap_or_else(|e| {
            log::warn!("Segment konnte nicht abgetastet werden: {:#}", e);
            Vec::new()
        });

    let tangents = if state.options.show_tangents {
        tangent_lines(curve)
    } else {
        Vec::new()
    };

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        handles: state.canvas.handles().to_vec(),
        active_index: state.canvas.highlighted(),
        control_polygon,
        curve: state.canvas.curve(),
        segment,
        tangents,
        options: state.options.clone(),
    }
}

/// Tangenten an P1 (t = 0) und P2 (t = 1); leer solange die Kurve unvollständig ist.
fn tangent_lines(curve: &SplineCurve) -> Vec<[Vec2; 2]> {
    let Some(axes) = curve.axes() else {
        return Vec::new();
    };
    [0.0, 1.0]
        .into_iter()
        .map(|t| {
            let origin = axes.point_at(t);
            [origin, origin + axes.tangent_at(t) * TANGENT_SCALE]
        })
        .collect()
}
