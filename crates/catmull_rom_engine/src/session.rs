//! Editor-Sitzung: verbindet Spline, Selektion und Zeichenfläche.
//!
//! Die Sitzung besitzt genau einen Spline und einen Selektions-Controller.
//! Events der Zeichenfläche werden in Ankunftsreihenfolge hineingereicht;
//! nach jeder Mutation schiebt die Sitzung Handle, Kontrollpolygon und Kurve
//! an die Zeichenfläche zurück.

use crate::adapter::RenderAdapter;
use crate::error::SplineError;
use crate::selection::{HandleId, SelectionController};
use crate::spline::{ControlPointIndex, SampleRange, SplineCurve};
use glam::Vec2;
use std::sync::Arc;

/// Zwischengespeicherte Display-Samples, gültig für genau eine Revision.
#[derive(Debug, Clone)]
struct CachedSamples {
    revision: u64,
    range: SampleRange,
    points: Arc<[Vec2]>,
}

/// Interaktive Editor-Sitzung über einem Spline.
#[derive(Debug, Clone)]
pub struct EditorSession {
    curve: SplineCurve,
    selection: SelectionController,
    display_range: SampleRange,
    cache: Option<CachedSamples>,
}

impl EditorSession {
    /// Erstellt eine Sitzung; Handles werden erst in [`EditorSession::setup`] registriert.
    pub fn new(curve: SplineCurve, display_range: SampleRange) -> Self {
        Self {
            curve,
            selection: SelectionController::new(),
            display_range,
            cache: None,
        }
    }

    /// Legt Handles, Kontrollpolygon und Kurve auf der Zeichenfläche an.
    ///
    /// Schlägt mit `NotReady` fehl, solange nicht alle vier Punkte bekannt sind.
    pub fn setup(&mut self, adapter: &mut impl RenderAdapter) -> Result<(), SplineError> {
        let samples = self.display_samples()?;
        let points = self.curve.control_points();

        for index in ControlPointIndex::ALL {
            let position = points[index.get()].ok_or(SplineError::NotReady)?;
            let handle = adapter.draw_handle(index, position);
            self.selection.register_handle(handle, index.get())?;
        }

        adapter.draw_control_polygon(&self.curve.control_polygon());
        adapter.draw_curve(&samples);

        if let Some(axes) = self.curve.axes() {
            log::info!(
                "Editor-Sitzung aufgebaut: x(t) = {}, y(t) = {}",
                axes.x,
                axes.y
            );
        }
        Ok(())
    }

    /// Pick-Event der Zeichenfläche.
    pub fn pick_event(
        &mut self,
        handle: HandleId,
        adapter: &mut impl RenderAdapter,
    ) -> Option<ControlPointIndex> {
        let picked = self.selection.on_pick(handle);
        match picked {
            Some(index) => {
                log::debug!("Handle {} gegriffen → {}", handle, index);
                adapter.highlight_handle(Some(index));
            }
            None => log::debug!("Pick auf unbekanntes Handle {} ignoriert", handle),
        }
        picked
    }

    /// Motion-Event der Zeichenfläche (Weltkoordinaten).
    ///
    /// Verschiebt den aktiven Kontrollpunkt und aktualisiert die Zeichenfläche.
    /// Ohne aktive Auswahl passiert nichts.
    pub fn motion_event(
        &mut self,
        position: Vec2,
        adapter: &mut impl RenderAdapter,
    ) -> Result<Option<ControlPointIndex>, SplineError> {
        let Some(index) = self.selection.on_drag(&mut self.curve, position)? else {
            return Ok(None);
        };
        log::trace!("{} verschoben nach ({:.2}, {:.2})", index, position.x, position.y);

        adapter.update_handle_position(index, position);
        adapter.update_control_polygon(&self.curve.control_polygon());
        if self.curve.is_ready() {
            let samples = self.display_samples()?;
            adapter.update_curve(&samples);
        }
        Ok(Some(index))
    }

    /// Release-Event (Maustaste losgelassen).
    pub fn release_event(&mut self, adapter: &mut impl RenderAdapter) {
        if self.selection.is_active() {
            log::debug!("Selektion beendet");
        }
        self.selection.on_release();
        adapter.highlight_handle(None);
    }

    /// Cancel-Event (Abbruch per Taste).
    pub fn cancel_event(&mut self, adapter: &mut impl RenderAdapter) {
        if self.selection.is_active() {
            log::debug!("Selektion abgebrochen");
        }
        self.selection.on_cancel();
        adapter.highlight_handle(None);
    }

    /// Abgetastete Kurve über dem Display-Bereich.
    ///
    /// Das Ergebnis wird pro Spline-Revision zwischengespeichert; jede
    /// Mutation macht den Cache ungültig.
    pub fn display_samples(&mut self) -> Result<Arc<[Vec2]>, SplineError> {
        let revision = self.curve.revision();
        let display_range = self.display_range;
        if let Some(cache) = self
            .cache
            .as_ref()
            .filter(|c| c.revision == revision && c.range == display_range)
        {
            return Ok(Arc::clone(&cache.points));
        }

        let points: Arc<[Vec2]> = self.curve.sample_range(&self.display_range)?.into();
        self.cache = Some(CachedSamples {
            revision,
            range: self.display_range,
            points: Arc::clone(&points),
        });
        Ok(points)
    }

    /// Setzt einen neuen Display-Bereich (verwirft den Sample-Cache).
    pub fn set_display_range(&mut self, range: SampleRange) {
        self.display_range = range;
        self.cache = None;
    }

    pub fn display_range(&self) -> SampleRange {
        self.display_range
    }

    pub fn curve(&self) -> &SplineCurve {
        &self.curve
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }
}
