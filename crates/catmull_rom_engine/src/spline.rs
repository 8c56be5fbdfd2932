//! Catmull-Rom-Spline über genau vier Kontrollpunkte.
//!
//! Die Kurve wird in zwei unabhängige Achsen-Polynome (x, y) mit gemeinsamem
//! Parameter `t` zerlegt. Die Polynome existieren erst, wenn alle vier
//! Kontrollpunkte mindestens einmal gesetzt wurden.

use crate::basis::{AxisPolynomial, DEFAULT_TENSION};
use crate::error::SplineError;
use glam::Vec2;

/// Anzahl der Kontrollpunkte eines Splines.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Obergrenze für die Anzahl der Punkte pro Sampling-Aufruf.
pub const MAX_SAMPLES: usize = 100_000;

/// Relative Toleranz (in Schritten), mit der `t_end` noch als Gitterpunkt gilt.
///
/// Der f32-Rundungsfehler von `step` wächst mit der Schrittzahl, daher skaliert
/// die Toleranz mit der Spanne.
const RANGE_END_REL_TOLERANCE: f64 = 4.0 * f32::EPSILON as f64;
/// Absolute Untergrenze der Toleranz für sehr kurze Bereiche.
const RANGE_END_ABS_TOLERANCE: f64 = 1e-6;

/// Validierter Kontrollpunkt-Index (0..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlPointIndex(u8);

impl ControlPointIndex {
    /// Alle vier Indizes in aufsteigender Reihenfolge.
    pub const ALL: [ControlPointIndex; CONTROL_POINT_COUNT] = [
        ControlPointIndex(0),
        ControlPointIndex(1),
        ControlPointIndex(2),
        ControlPointIndex(3),
    ];

    /// Prüft `index` und liefert `InvalidIndex` außerhalb von 0..=3.
    pub fn new(index: usize) -> Result<Self, SplineError> {
        if index < CONTROL_POINT_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(SplineError::InvalidIndex { index })
        }
    }

    /// Index als `usize`.
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for ControlPointIndex {
    type Error = SplineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl std::fmt::Display for ControlPointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Parameterbereich für das Sampling (`t_start..=t_end` in Schritten von `step`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub t_start: f32,
    pub t_end: f32,
    pub step: f32,
}

impl SampleRange {
    /// Erstellt einen Bereich und prüft die Schrittweite.
    pub fn new(t_start: f32, t_end: f32, step: f32) -> Result<Self, SplineError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(SplineError::InvalidSampleStep { step });
        }
        Ok(Self {
            t_start,
            t_end,
            step,
        })
    }

    /// Das interpolierte Segment zwischen P1 (t = 0) und P2 (t = 1).
    pub fn segment(step: f32) -> Result<Self, SplineError> {
        Self::new(0.0, 1.0, step)
    }

    /// Anzahl der Parameterwerte, die dieser Bereich erzeugt.
    pub fn sample_count(&self) -> Result<usize, SplineError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SplineError::InvalidSampleStep { step: self.step });
        }
        if self.t_end < self.t_start {
            return Ok(0);
        }
        let span = (f64::from(self.t_end) - f64::from(self.t_start)) / f64::from(self.step);
        let tolerance = span.abs() * RANGE_END_REL_TOLERANCE + RANGE_END_ABS_TOLERANCE;
        let intervals = (span + tolerance).floor();
        if !intervals.is_finite() || intervals >= MAX_SAMPLES as f64 {
            return Err(SplineError::InvalidSampleStep { step: self.step });
        }
        Ok(intervals as usize + 1)
    }

    /// Parameterwert des `i`-ten Samples (ohne Fehler-Akkumulation).
    ///
    /// Wird auf `t_end` begrenzt, damit der letzte Gitterpunkt exakt auf dem
    /// Bereichsende liegt.
    #[inline]
    pub fn t_at(&self, i: usize) -> f32 {
        (self.t_start + i as f32 * self.step).min(self.t_end)
    }
}

/// Die beiden Achsen-Polynome eines vollständigen Splines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineAxes {
    pub x: AxisPolynomial,
    pub y: AxisPolynomial,
}

impl SplineAxes {
    fn from_points(points: [Vec2; CONTROL_POINT_COUNT], tension: f32) -> Self {
        let [p0, p1, p2, p3] = points;
        Self {
            x: AxisPolynomial::construct(p0.x, p1.x, p2.x, p3.x, tension),
            y: AxisPolynomial::construct(p0.y, p1.y, p2.y, p3.y, tension),
        }
    }

    /// Punkt auf der Kurve bei `t`.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        Vec2::new(self.x.evaluate(t), self.y.evaluate(t))
    }

    /// Tangentenvektor bei `t`.
    #[inline]
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        Vec2::new(self.x.derivative(t), self.y.derivative(t))
    }
}

/// Catmull-Rom-Spline mit genau vier Kontrollpunkten.
#[derive(Debug, Clone)]
pub struct SplineCurve {
    points: [Option<Vec2>; CONTROL_POINT_COUNT],
    tension: f32,
    /// `Some` genau dann, wenn alle vier Punkte bekannt sind
    axes: Option<SplineAxes>,
    /// Zählt jede erfolgreiche Mutation (Cache-Schlüssel für Samples)
    revision: u64,
}

impl SplineCurve {
    /// Erstellt einen leeren Spline mit Standard-Tension.
    pub fn new() -> Self {
        Self::with_tension(DEFAULT_TENSION)
    }

    /// Erstellt einen leeren Spline mit eigener Tension.
    pub fn with_tension(tension: f32) -> Self {
        Self {
            points: [None; CONTROL_POINT_COUNT],
            tension,
            axes: None,
            revision: 0,
        }
    }

    /// Erstellt einen vollständigen Spline aus vier Startpunkten (Index = Reihenfolge).
    pub fn from_points(points: [Vec2; CONTROL_POINT_COUNT]) -> Self {
        Self::from_points_with_tension(points, DEFAULT_TENSION)
    }

    /// Wie [`SplineCurve::from_points`], mit eigener Tension.
    pub fn from_points_with_tension(points: [Vec2; CONTROL_POINT_COUNT], tension: f32) -> Self {
        let mut curve = Self::with_tension(tension);
        for (slot, point) in ControlPointIndex::ALL.into_iter().zip(points) {
            curve.store(slot, point);
        }
        curve
    }

    /// Setzt den Kontrollpunkt `index` auf `position`.
    ///
    /// Sobald alle vier Punkte bekannt sind, werden beide Achsen-Polynome
    /// neu aufgebaut. Vorher wird die Neuberechnung nur aufgeschoben.
    pub fn set_control_point(&mut self, index: usize, position: Vec2) -> Result<(), SplineError> {
        let index = ControlPointIndex::new(index)?;
        self.store(index, position);
        Ok(())
    }

    fn store(&mut self, index: ControlPointIndex, position: Vec2) {
        self.points[index.get()] = Some(position);
        self.revision = self.revision.wrapping_add(1);
        self.rebuild_axes();
    }

    fn rebuild_axes(&mut self) {
        let [Some(p0), Some(p1), Some(p2), Some(p3)] = self.points else {
            return;
        };
        let axes = SplineAxes::from_points([p0, p1, p2, p3], self.tension);
        log::debug!("Spline neu berechnet: x(t) = {}, y(t) = {}", axes.x, axes.y);
        self.axes = Some(axes);
    }

    /// Momentaufnahme aller vier Kontrollpunkte (Index 0..=3).
    pub fn control_points(&self) -> [Option<Vec2>; CONTROL_POINT_COUNT] {
        self.points
    }

    /// Einzelner Kontrollpunkt; `None`, solange er nie gesetzt wurde.
    pub fn control_point(&self, index: usize) -> Result<Option<Vec2>, SplineError> {
        let index = ControlPointIndex::new(index)?;
        Ok(self.points[index.get()])
    }

    /// Bekannte Kontrollpunkte in Index-Reihenfolge (Kontrollpolygon).
    pub fn control_polygon(&self) -> Vec<Vec2> {
        self.points.iter().flatten().copied().collect()
    }

    /// Gibt zurück, ob alle vier Punkte gesetzt und die Polynome gültig sind.
    pub fn is_ready(&self) -> bool {
        self.axes.is_some()
    }

    /// Achsen-Polynome, sobald der Spline bereit ist.
    pub fn axes(&self) -> Option<&SplineAxes> {
        self.axes.as_ref()
    }

    /// Mutationszähler; ändert sich mit jedem erfolgreichen `set_control_point`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Verwendete Tension.
    pub fn tension(&self) -> f32 {
        self.tension
    }

    fn ready_axes(&self) -> Result<&SplineAxes, SplineError> {
        self.axes.as_ref().ok_or(SplineError::NotReady)
    }

    /// Punkt auf der Kurve bei `t`.
    pub fn point_at(&self, t: f32) -> Result<Vec2, SplineError> {
        Ok(self.ready_axes()?.point_at(t))
    }

    /// Tangentenvektor bei `t`.
    pub fn tangent_at(&self, t: f32) -> Result<Vec2, SplineError> {
        Ok(self.ready_axes()?.tangent_at(t))
    }

    /// Tastet die Kurve bei `t_start, t_start + step, …` bis einschließlich `t_end` ab.
    ///
    /// Liefert eine leere Folge, wenn `t_end < t_start`.
    pub fn sample(&self, t_start: f32, t_end: f32, step: f32) -> Result<Vec<Vec2>, SplineError> {
        self.sample_range(&SampleRange::new(t_start, t_end, step)?)
    }

    /// Wie [`SplineCurve::sample`], mit vorbereitetem Bereich.
    pub fn sample_range(&self, range: &SampleRange) -> Result<Vec<Vec2>, SplineError> {
        let axes = self.ready_axes()?;
        let count = range.sample_count()?;
        Ok((0..count).map(|i| axes.point_at(range.t_at(i))).collect())
    }
}

impl Default for SplineCurve {
    fn default() -> Self {
        Self::new()
    }
}
