//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::Camera2D;
use catmull_rom_engine::{ControlPointIndex, HandleId};
use glam::Vec2;
use std::sync::Arc;

/// Kreisförmiges Handle eines Kontrollpunkts auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleShape {
    /// Vom Canvas vergebene, stabile Identität
    pub id: HandleId,
    /// Zugehöriger Kontrollpunkt
    pub index: ControlPointIndex,
    /// Mittelpunkt in Welteinheiten
    pub center: Vec2,
    /// Radius in Welteinheiten
    pub radius: f32,
}

impl HandleShape {
    /// Gibt zurück, ob `world_pos` innerhalb des Handles liegt.
    pub fn contains(&self, world_pos: Vec2) -> bool {
        self.center.distance(world_pos) <= self.radius
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Handles der vier Kontrollpunkte
    pub handles: Vec<HandleShape>,
    /// Aktuell gegriffener Kontrollpunkt
    pub active_index: Option<ControlPointIndex>,
    /// Linienzug durch die Kontrollpunkte (leer wenn ausgeblendet)
    pub control_polygon: Arc<[Vec2]>,
    /// Abgetastete Kurve über den gesamten Display-Bereich
    pub curve: Arc<[Vec2]>,
    /// Interpoliertes Segment zwischen P1 und P2
    pub segment: Vec<Vec2>,
    /// Tangenten als Linien [Anfang, Ende] in Welteinheiten
    pub tangents: Vec<[Vec2; 2]>,
    /// Farben, Breiten, Radien
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve zum Zeichnen vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.curve.len() >= 2
    }
}
