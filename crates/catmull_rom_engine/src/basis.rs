//! Kubische Hermite-Basis mit Catmull-Rom-Tangentenregel.
//!
//! Ein `AxisPolynomial` beschreibt eine Koordinatenachse eines Spline-Segments
//! als `a·t³ + b·t² + c·t + d`. Bei `t = 0` liegt die Kurve auf dem zweiten,
//! bei `t = 1` auf dem dritten der vier Eingangswerte.

use std::fmt;

/// Standard-Tension für Catmull-Rom (k = 0.5).
pub const DEFAULT_TENSION: f32 = 0.5;

/// Kubisches Polynom einer einzelnen Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPolynomial {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
}

impl AxisPolynomial {
    /// Baut die Koeffizienten aus vier skalaren Stützwerten und der Tension `k`.
    ///
    /// Totale Funktion: jede Kombination endlicher Werte ist gültig.
    pub fn construct(p0: f32, p1: f32, p2: f32, p3: f32, tension: f32) -> Self {
        let k = tension;
        Self {
            a: -k * p0 + (2.0 - k) * p1 + (-2.0 + k) * p2 + k * p3,
            b: 2.0 * k * p0 + (-3.0 + k) * p1 + (3.0 - 2.0 * k) * p2 - k * p3,
            c: -k * p0 + k * p2,
            d: p1,
        }
    }

    /// Catmull-Rom mit Standard-Tension.
    pub fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32) -> Self {
        Self::construct(p0, p1, p2, p3, DEFAULT_TENSION)
    }

    /// Wertet das Polynom bei `t` aus (Horner-Schema).
    ///
    /// `t` außerhalb von [0, 1] extrapoliert die Kurve über das Segment hinaus.
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t + self.d
    }

    /// Erste Ableitung nach `t` (Tangente der Achse).
    #[inline]
    pub fn derivative(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Koeffizienten in der Reihenfolge `[a, b, c, d]`.
    pub fn coefficients(&self) -> [f32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl fmt::Display for AxisPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} t^3 + {:.3} t^2 + {:.3} t + {:.3}",
            self.a, self.b, self.c, self.d
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolates_inner_samples() {
        let poly = AxisPolynomial::catmull_rom(0.01, 4.01, 7.1, 13.1);
        assert_eq!(poly.evaluate(0.0), 4.01);
        assert_relative_eq!(poly.evaluate(1.0), 7.1, epsilon = 1e-5);
    }

    #[test]
    fn test_coefficients_match_formula() {
        // k = 0.5, p = (1, 2, 4, 8)
        let poly = AxisPolynomial::catmull_rom(1.0, 2.0, 4.0, 8.0);
        let [a, b, c, d] = poly.coefficients();
        assert_relative_eq!(a, -0.5 + 3.0 - 6.0 + 4.0);
        assert_relative_eq!(b, 1.0 - 5.0 + 8.0 - 4.0);
        assert_relative_eq!(c, -0.5 + 2.0);
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn test_tangents_follow_neighbours() {
        // Tangente an p1 = k·(p2 − p0), an p2 = k·(p3 − p1)
        let poly = AxisPolynomial::construct(0.0, 1.0, 3.0, 6.0, 0.5);
        assert_relative_eq!(poly.derivative(0.0), 1.5);
        assert_relative_eq!(poly.derivative(1.0), 2.5, epsilon = 1e-5);
    }

    #[test]
    fn test_constant_input_is_constant() {
        let poly = AxisPolynomial::catmull_rom(2.5, 2.5, 2.5, 2.5);
        for t in [-1.0, 0.0, 0.3, 1.0, 2.0] {
            assert_relative_eq!(poly.evaluate(t), 2.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_extrapolation_is_defined() {
        let poly = AxisPolynomial::catmull_rom(0.0, 1.0, 2.0, 3.0);
        // Lineare Stützwerte → lineare Kurve, auch außerhalb von [0, 1]
        assert_relative_eq!(poly.evaluate(-1.0), 0.0, epsilon = 1e-6);
        assert_relative_eq!(poly.evaluate(2.0), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let poly = AxisPolynomial::catmull_rom(0.3, -1.7, 2.9, 5.1);
        let first = poly.evaluate(0.37);
        for _ in 0..10 {
            assert_eq!(poly.evaluate(0.37).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_display_lists_all_terms() {
        let text = AxisPolynomial::catmull_rom(0.0, 1.0, 2.0, 3.0).to_string();
        assert!(text.contains("t^3"));
        assert!(text.ends_with("+ 1.000"), "Unerwartete Darstellung: {text}");
    }
}
