//! Fehlertypen des Spline-Kerns.

use crate::selection::HandleId;
use thiserror::Error;

/// Fehler, die von Spline- und Selektions-Operationen gemeldet werden.
///
/// Jeder Fehler bricht nur die auslösende Operation ab; die Editor-Sitzung
/// läuft danach normal weiter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Kontrollpunkt-Index außerhalb von 0..=3.
    #[error("ungültiger Kontrollpunkt-Index {index} (erlaubt: 0..=3)")]
    InvalidIndex {
        /// Der abgelehnte Index.
        index: usize,
    },

    /// Es wurden noch nicht alle vier Kontrollpunkte gesetzt.
    #[error("Spline nicht bereit: es sind noch nicht alle vier Kontrollpunkte gesetzt")]
    NotReady,

    /// Handle wurde bereits registriert.
    #[error("Handle {handle} ist bereits registriert")]
    DuplicateHandle {
        /// Das doppelt registrierte Handle.
        handle: HandleId,
    },

    /// Kontrollpunkt ist bereits an ein anderes Handle gebunden.
    #[error("Kontrollpunkt {index} ist bereits an ein Handle gebunden")]
    IndexAlreadyBound {
        /// Der bereits belegte Index.
        index: usize,
    },

    /// Schrittweite beim Sampling ist nicht endlich, nicht positiv oder zu klein.
    #[error("ungültige Sampling-Schrittweite {step}")]
    InvalidSampleStep {
        /// Die abgelehnte Schrittweite.
        step: f32,
    },
}
