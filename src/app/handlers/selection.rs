//! Handler für Pick, Drag, Release und Abbruch der Kontrollpunkt-Selektion.

use crate::app::AppState;
use catmull_rom_engine::HandleId;

/// Greift das Handle; unbekannte Handles werden ignoriert.
pub fn pick_handle(state: &mut AppState, handle: HandleId) {
    state.session.pick_event(handle, &mut state.canvas);
}

/// Verschiebt den aktiven Kontrollpunkt (ohne aktive Auswahl: nichts).
pub fn drag_active_point(state: &mut AppState, world_pos: glam::Vec2) -> anyhow::Result<()> {
    state.session.motion_event(world_pos, &mut state.canvas)?;
    Ok(())
}

/// Beendet die Selektion nach dem Loslassen der Maustaste.
pub fn release(state: &mut AppState) {
    state.session.release_event(&mut state.canvas);
}

/// Bricht die Selektion ab.
pub fn cancel(state: &mut AppState) {
    state.session.cancel_event(&mut state.canvas);
}
