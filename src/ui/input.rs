//! Viewport-Input-Handling: Maus-Events und Tastatur → AppIntent.

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::render::SceneCanvas;

/// Verwaltet den Input-Zustand für das Viewport (Drag, Ctrl-Flanke, Größe)
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärtaste wurde innerhalb des Viewports gedrückt und ist noch unten
    pointer_down_in_viewport: bool,
    /// Ctrl-Zustand des Vorframes
    ctrl_down: bool,
    last_viewport_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge innerhalb eines Frames: Resize, Tastatur, Pick, Bewegung,
    /// Loslassen. So landet ein Drücken-und-Ziehen im selben Frame erst beim
    /// Pick und dann bei der Bewegung.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        canvas: &SceneCanvas,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if self.last_viewport_size != Some(viewport_size) {
            self.last_viewport_size = Some(viewport_size);
            events.push(AppIntent::ViewportResized {
                size: viewport_size,
            });
        }

        events.extend(keyboard::collect_keyboard_intents(ui, &mut self.ctrl_down));

        let (pressed, down, released, press_origin, latest_pos, delta) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.delta(),
            )
        });

        // press_origin() liefert die exakte Klickposition (vor Drag-Schwelle)
        if pressed {
            if let Some(pointer_pos) = press_origin
                .or(latest_pos)
                .filter(|pos| response.rect.contains(*pos))
            {
                self.pointer_down_in_viewport = true;
                let world_pos = screen_pos_to_world(pointer_pos, response, viewport_size, camera);
                if let Some(handle) = canvas.hit_test(world_pos) {
                    events.push(AppIntent::HandlePicked { handle });
                }
            }
        }

        if self.pointer_down_in_viewport && down && delta != egui::Vec2::ZERO {
            if let Some(pointer_pos) = latest_pos {
                events.push(AppIntent::PointerMoved {
                    world_pos: screen_pos_to_world(pointer_pos, response, viewport_size, camera),
                });
            }
        }

        if released && self.pointer_down_in_viewport {
            self.pointer_down_in_viewport = false;
            events.push(AppIntent::PointerReleased);
        }

        events
    }
}

fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
