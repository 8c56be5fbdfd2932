//! Retained Zeichenfläche: hält Handles und Linienzüge zwischen zwei Frames.
//!
//! egui zeichnet jeden Frame neu; der Canvas merkt sich daher, was die
//! Editor-Sitzung zuletzt gezeichnet hat, vergibt die Handle-Identitäten und
//! löst Pointer-Positionen per Hit-Test auf ein Handle auf.

use crate::shared::HandleShape;
use catmull_rom_engine::{ControlPointIndex, HandleId, RenderAdapter};
use glam::Vec2;
use std::sync::Arc;

/// Erste vergebene Handle-Identität.
const FIRST_HANDLE_ID: u64 = 1;

/// Zeichenfläche der Editor-Sitzung.
#[derive(Debug, Clone)]
pub struct SceneCanvas {
    handle_radius: f32,
    next_handle_id: u64,
    handles: Vec<HandleShape>,
    control_polygon: Arc<[Vec2]>,
    curve: Arc<[Vec2]>,
    highlighted: Option<ControlPointIndex>,
    /// Zählt Änderungen (für Repaint-Entscheidungen)
    generation: u64,
}

impl SceneCanvas {
    /// Erstellt einen leeren Canvas; `handle_radius` gilt für alle Handles.
    pub fn new(handle_radius: f32) -> Self {
        Self {
            handle_radius,
            next_handle_id: FIRST_HANDLE_ID,
            handles: Vec::with_capacity(4),
            control_polygon: Arc::from(Vec::new()),
            curve: Arc::from(Vec::new()),
            highlighted: None,
            generation: 0,
        }
    }

    /// Handle unter `world_pos`; bei Überlappung das nächstgelegene.
    pub fn hit_test(&self, world_pos: Vec2) -> Option<HandleId> {
        self.handles
            .iter()
            .filter(|h| h.contains(world_pos))
            .min_by(|a, b| {
                a.center
                    .distance_squared(world_pos)
                    .total_cmp(&b.center.distance_squared(world_pos))
            })
            .map(|h| h.id)
    }

    pub fn handles(&self) -> &[HandleShape] {
        &self.handles
    }

    /// Handle-Form zu einem Kontrollpunkt.
    pub fn handle(&self, index: ControlPointIndex) -> Option<&HandleShape> {
        self.handles.iter().find(|h| h.index == index)
    }

    pub fn control_polygon(&self) -> Arc<[Vec2]> {
        Arc::clone(&self.control_polygon)
    }

    pub fn curve(&self) -> Arc<[Vec2]> {
        Arc::clone(&self.curve)
    }

    pub fn highlighted(&self) -> Option<ControlPointIndex> {
        self.highlighted
    }

    /// Änderungszähler; steigt mit jedem Zeichen- oder Update-Aufruf.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl RenderAdapter for SceneCanvas {
    fn draw_handle(&mut self, index: ControlPointIndex, position: Vec2) -> HandleId {
        let id = HandleId::new(self.next_handle_id);
        self.next_handle_id += 1;
        self.handles.push(HandleShape {
            id,
            index,
            center: position,
            radius: self.handle_radius,
        });
        self.touch();
        id
    }

    fn update_handle_position(&mut self, index: ControlPointIndex, position: Vec2) {
        match self.handles.iter_mut().find(|h| h.index == index) {
            Some(handle) => handle.center = position,
            None => log::warn!("Kein Handle für {} vorhanden", index),
        }
        self.touch();
    }

    fn draw_control_polygon(&mut self, points: &[Vec2]) {
        self.control_polygon = Arc::from(points);
        self.touch();
    }

    fn update_control_polygon(&mut self, points: &[Vec2]) {
        self.draw_control_polygon(points);
    }

    fn draw_curve(&mut self, points: &[Vec2]) {
        self.curve = Arc::from(points);
        self.touch();
    }

    fn update_curve(&mut self, points: &[Vec2]) {
        self.draw_curve(points);
    }

    fn highlight_handle(&mut self, index: Option<ControlPointIndex>) {
        if self.highlighted != index {
            self.highlighted = index;
            self.touch();
        }
    }
}
