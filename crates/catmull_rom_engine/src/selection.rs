//! Selektions-Zustandsmaschine für Kontrollpunkt-Handles.
//!
//! Zustände: `Idle` und `Active(index)`. Pick-Events wählen über die
//! Handle-Registry einen Kontrollpunkt aus, Drag-Events verschieben ihn,
//! Release/Cancel beenden die Auswahl.

use crate::error::SplineError;
use crate::spline::{CONTROL_POINT_COUNT, ControlPointIndex, SplineCurve};
use glam::Vec2;
use std::collections::HashMap;
use std::fmt;

/// Opaque, stabile Identität eines Handles auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    /// Erstellt eine Handle-Identität aus einem vom Renderer vergebenen Schlüssel.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Roher Schlüssel.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Zustand der Selektion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Kein Kontrollpunkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt wird gezogen
    Active(ControlPointIndex),
}

/// Übersetzt Pick/Drag/Release-Events in Spline-Mutationen.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    handles: HashMap<HandleId, ControlPointIndex>,
    /// Rückrichtung der Registry (hält die Abbildung bijektiv)
    by_index: [Option<HandleId>; CONTROL_POINT_COUNT],
    state: SelectionState,
}

impl SelectionController {
    /// Erstellt einen Controller ohne registrierte Handles im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert ein Handle für den Kontrollpunkt `index`.
    ///
    /// Wird einmal pro Kontrollpunkt beim Aufbau der Zeichenfläche aufgerufen.
    pub fn register_handle(&mut self, handle: HandleId, index: usize) -> Result<(), SplineError> {
        let index = ControlPointIndex::new(index)?;
        if self.handles.contains_key(&handle) {
            return Err(SplineError::DuplicateHandle { handle });
        }
        if self.by_index[index.get()].is_some() {
            return Err(SplineError::IndexAlreadyBound { index: index.get() });
        }
        self.handles.insert(handle, index);
        self.by_index[index.get()] = Some(handle);
        Ok(())
    }

    /// Verarbeitet einen Pick auf `handle`.
    ///
    /// Ein bekanntes Handle aktiviert seinen Kontrollpunkt (ein neuer Pick
    /// ersetzt eine bestehende Auswahl). Ein unbekanntes Handle liefert `None`
    /// und lässt den Zustand unverändert.
    pub fn on_pick(&mut self, handle: HandleId) -> Option<ControlPointIndex> {
        let index = self.handles.get(&handle).copied()?;
        self.state = SelectionState::Active(index);
        Some(index)
    }

    /// Verschiebt den aktiven Kontrollpunkt nach `position`.
    ///
    /// Im Zustand `Idle` passiert nichts (`Ok(None)`), damit verspätete
    /// Motion-Events ohne vorherigen Pick folgenlos bleiben.
    pub fn on_drag(
        &mut self,
        curve: &mut SplineCurve,
        position: Vec2,
    ) -> Result<Option<ControlPointIndex>, SplineError> {
        let SelectionState::Active(index) = self.state else {
            return Ok(None);
        };
        curve.set_control_point(index.get(), position)?;
        Ok(Some(index))
    }

    /// Beendet die Auswahl (Maustaste losgelassen).
    pub fn on_release(&mut self) {
        self.state = SelectionState::Idle;
    }

    /// Bricht die Auswahl ab (z.B. per Taste).
    pub fn on_cancel(&mut self) {
        self.state = SelectionState::Idle;
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Aktiver Kontrollpunkt, falls einer gegriffen ist.
    pub fn active_index(&self) -> Option<ControlPointIndex> {
        match self.state {
            SelectionState::Active(index) => Some(index),
            SelectionState::Idle => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_index().is_some()
    }

    /// Handle, das an `index` gebunden ist.
    pub fn handle_for(&self, index: ControlPointIndex) -> Option<HandleId> {
        self.by_index[index.get()]
    }

    /// Kontrollpunkt, an den `handle` gebunden ist.
    pub fn index_for(&self, handle: HandleId) -> Option<ControlPointIndex> {
        self.handles.get(&handle).copied()
    }

    /// Anzahl registrierter Handles.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered() -> SelectionController {
        let mut selection = SelectionController::new();
        for i in 0..4 {
            selection
                .register_handle(HandleId::new(100 + i as u64), i)
                .expect("Registrierung sollte klappen");
        }
        selection
    }

    fn curve() -> SplineCurve {
        SplineCurve::from_points([
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 1.0),
        ])
    }

    #[test]
    fn test_initial_state_is_idle() {
        let selection = SelectionController::new();
        assert_eq!(selection.state(), SelectionState::Idle);
        assert_eq!(selection.handle_count(), 0);
    }

    #[test]
    fn test_register_rejects_duplicate_handle() {
        let mut selection = registered();
        let err = selection.register_handle(HandleId::new(100), 0).unwrap_err();
        assert_eq!(
            err,
            SplineError::DuplicateHandle {
                handle: HandleId::new(100)
            }
        );
    }

    #[test]
    fn test_register_rejects_bound_index() {
        let mut selection = registered();
        let err = selection.register_handle(HandleId::new(7), 2).unwrap_err();
        assert_eq!(err, SplineError::IndexAlreadyBound { index: 2 });
        assert_eq!(selection.handle_count(), 4);
    }

    #[test]
    fn test_register_rejects_invalid_index() {
        let mut selection = SelectionController::new();
        assert_eq!(
            selection.register_handle(HandleId::new(1), 9),
            Err(SplineError::InvalidIndex { index: 9 })
        );
    }

    #[test]
    fn test_registry_is_bijective() {
        let selection = registered();
        for index in ControlPointIndex::ALL {
            let handle = selection.handle_for(index).expect("Handle fehlt");
            assert_eq!(selection.index_for(handle), Some(index));
        }
    }

    #[test]
    fn test_pick_unknown_handle_keeps_state() {
        let mut selection = registered();
        assert_eq!(selection.on_pick(HandleId::new(999)), None);
        assert_eq!(selection.state(), SelectionState::Idle);

        selection.on_pick(HandleId::new(101));
        assert_eq!(selection.on_pick(HandleId::new(999)), None);
        assert_eq!(selection.active_index().map(ControlPointIndex::get), Some(1));
    }

    #[test]
    fn test_newer_pick_wins() {
        let mut selection = registered();
        selection.on_pick(HandleId::new(100));
        let picked = selection.on_pick(HandleId::new(103));
        assert_eq!(picked.map(ControlPointIndex::get), Some(3));
        assert_eq!(
            selection.state(),
            SelectionState::Active(ControlPointIndex::ALL[3])
        );
    }

    #[test]
    fn test_drag_while_idle_is_noop() {
        let mut selection = registered();
        let mut curve = curve();
        let before = curve.control_points();

        let moved = selection.on_drag(&mut curve, Vec2::new(9.0, 9.0)).unwrap();

        assert_eq!(moved, None);
        assert_eq!(curve.control_points(), before);
        assert_eq!(curve.revision(), 4);
    }

    #[test]
    fn test_pick_drag_release_sequence() {
        let mut selection = registered();
        let mut curve = curve();
        let before = curve.sample(-1.0, 2.0, 0.1).unwrap();

        assert_eq!(
            selection.on_pick(HandleId::new(102)).map(ControlPointIndex::get),
            Some(2)
        );
        let moved = selection.on_drag(&mut curve, Vec2::new(5.0, 5.0)).unwrap();
        assert_eq!(moved.map(ControlPointIndex::get), Some(2));
        assert!(selection.is_active());
        selection.on_release();

        assert_eq!(curve.control_points()[2], Some(Vec2::new(5.0, 5.0)));
        assert_eq!(selection.state(), SelectionState::Idle);
        assert_ne!(curve.sample(-1.0, 2.0, 0.1).unwrap(), before);
    }

    #[test]
    fn test_release_and_cancel_are_idempotent() {
        let mut selection = registered();
        selection.on_release();
        selection.on_cancel();
        assert_eq!(selection.state(), SelectionState::Idle);

        selection.on_pick(HandleId::new(100));
        selection.on_cancel();
        selection.on_cancel();
        assert_eq!(selection.state(), SelectionState::Idle);
    }

    #[test]
    fn test_controllers_do_not_share_state() {
        let mut first = registered();
        let second = SelectionController::new();
        first.on_pick(HandleId::new(100));
        assert!(!second.is_active());
        assert_eq!(second.handle_count(), 0);
    }
}
