//! Zentrale Konfiguration für den Catmull-Rom-Editor.
//!
//! `EditorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use catmull_rom_engine::{SampleRange, DEFAULT_TENSION};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Start-Kontrollpunkte (Index 0..=3).
pub const INITIAL_CONTROL_POINTS: [[f32; 2]; 4] =
    [[0.01, 3.1], [4.01, 0.01], [7.1, 4.1], [13.1, 1.1]];

// ── Achsen ──────────────────────────────────────────────────────────

/// Sichtbarer x-Bereich in Welteinheiten.
pub const AXIS_X_LIMITS: [f32; 2] = [-3.0, 17.0];
/// Sichtbarer y-Bereich in Welteinheiten.
pub const AXIS_Y_LIMITS: [f32; 2] = [-3.0, 7.0];

// ── Sampling ────────────────────────────────────────────────────────

/// Parameterbereich der angezeigten Kurve (inkl. Extrapolation über [0, 1] hinaus).
pub const DISPLAY_T_RANGE: [f32; 2] = [-1.0, 2.0];
/// Parameter-Schrittweite beim Abtasten.
pub const SAMPLE_STEP: f32 = 0.1;

// ── Handles ─────────────────────────────────────────────────────────

/// Handle-Radius in Welteinheiten.
pub const HANDLE_RADIUS: f32 = 0.5;
/// Füllfarben der vier Handles (RGBA, halbtransparent).
pub const HANDLE_COLORS: [[f32; 4]; 4] = [
    [0.90, 0.30, 0.25, 0.5],
    [0.25, 0.65, 0.95, 0.5],
    [0.35, 0.80, 0.35, 0.5],
    [0.95, 0.75, 0.20, 0.5],
];
/// Randfarbe des aktiven Handles (RGBA: Weiß).
pub const HANDLE_ACTIVE_OUTLINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Linien ──────────────────────────────────────────────────────────

/// Farbe der extrapolierten Gesamtkurve (RGBA: Orange, gedämpft).
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 0.6];
/// Farbe des interpolierten Segments zwischen P1 und P2 (RGBA: Orange).
pub const SEGMENT_COLOR: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
/// Farbe des Kontrollpolygons (RGBA: Blau).
pub const CONTROL_POLYGON_COLOR: [f32; 4] = [0.2, 0.5, 1.0, 0.8];
/// Farbe der Tangenten (RGBA: Grün).
pub const TANGENT_COLOR: [f32; 4] = [0.3, 0.9, 0.4, 0.9];
/// Linienstärke in Screen-Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;

/// Alle beim Start einlesbaren Editor-Optionen.
/// Wird als `catmull_rom_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Spline ──────────────────────────────────────────────────
    /// Start-Kontrollpunkte P0..P3
    #[serde(default = "default_control_points")]
    pub initial_control_points: [[f32; 2]; 4],
    /// Catmull-Rom-Tension (0.5 = Standard)
    #[serde(default = "default_tension")]
    pub tension: f32,

    // ── Sampling ────────────────────────────────────────────────
    /// Angezeigter Parameterbereich [t_start, t_end]
    #[serde(default = "default_display_t_range")]
    pub display_t_range: [f32; 2],
    /// Parameter-Schrittweite
    #[serde(default = "default_sample_step")]
    pub sample_step: f32,

    // ── Achsen ──────────────────────────────────────────────────
    /// Sichtbarer x-Bereich
    #[serde(default = "default_axis_x_limits")]
    pub axis_x_limits: [f32; 2],
    /// Sichtbarer y-Bereich
    #[serde(default = "default_axis_y_limits")]
    pub axis_y_limits: [f32; 2],

    // ── Handles ─────────────────────────────────────────────────
    /// Handle-Radius in Welteinheiten (gleichzeitig Pick-Radius)
    #[serde(default = "default_handle_radius")]
    pub handle_radius: f32,
    /// Füllfarben der Handles
    #[serde(default = "default_handle_colors")]
    pub handle_colors: [[f32; 4]; 4],
    /// Randfarbe des aktiven Handles
    #[serde(default = "default_handle_active_outline")]
    pub handle_active_outline: [f32; 4],

    // ── Linien ──────────────────────────────────────────────────
    #[serde(default = "default_curve_color")]
    pub curve_color: [f32; 4],
    #[serde(default = "default_segment_color")]
    pub segment_color: [f32; 4],
    #[serde(default = "default_control_polygon_color")]
    pub control_polygon_color: [f32; 4],
    #[serde(default = "default_tangent_color")]
    pub tangent_color: [f32; 4],
    /// Linienstärke in Screen-Pixeln
    #[serde(default = "default_line_width_px")]
    pub line_width_px: f32,
    /// Kontrollpolygon anzeigen
    #[serde(default = "default_true")]
    pub show_control_polygon: bool,
    /// Tangenten an P1 und P2 anzeigen
    #[serde(default)]
    pub show_tangents: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            initial_control_points: INITIAL_CONTROL_POINTS,
            tension: DEFAULT_TENSION,

            display_t_range: DISPLAY_T_RANGE,
            sample_step: SAMPLE_STEP,

            axis_x_limits: AXIS_X_LIMITS,
            axis_y_limits: AXIS_Y_LIMITS,

            handle_radius: HANDLE_RADIUS,
            handle_colors: HANDLE_COLORS,
            handle_active_outline: HANDLE_ACTIVE_OUTLINE,

            curve_color: CURVE_COLOR,
            segment_color: SEGMENT_COLOR,
            control_polygon_color: CONTROL_POLYGON_COLOR,
            tangent_color: TANGENT_COLOR,
            line_width_px: LINE_WIDTH_PX,
            show_control_polygon: true,
            show_tangents: false,
        }
    }
}

// Serde-Defaults (Abwärtskompatibilität unvollständiger TOML-Dateien)

fn default_control_points() -> [[f32; 2]; 4] {
    INITIAL_CONTROL_POINTS
}

fn default_tension() -> f32 {
    DEFAULT_TENSION
}

fn default_display_t_range() -> [f32; 2] {
    DISPLAY_T_RANGE
}

fn default_sample_step() -> f32 {
    SAMPLE_STEP
}

fn default_axis_x_limits() -> [f32; 2] {
    AXIS_X_LIMITS
}

fn default_axis_y_limits() -> [f32; 2] {
    AXIS_Y_LIMITS
}

fn default_handle_radius() -> f32 {
    HANDLE_RADIUS
}

fn default_handle_colors() -> [[f32; 4]; 4] {
    HANDLE_COLORS
}

fn default_handle_active_outline() -> [f32; 4] {
    HANDLE_ACTIVE_OUTLINE
}

fn default_curve_color() -> [f32; 4] {
    CURVE_COLOR
}

fn default_segment_color() -> [f32; 4] {
    SEGMENT_COLOR
}

fn default_control_polygon_color() -> [f32; 4] {
    CONTROL_POLYGON_COLOR
}

fn default_tangent_color() -> [f32; 4] {
    TANGENT_COLOR
}

fn default_line_width_px() -> f32 {
    LINE_WIDTH_PX
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst und validiert TOML-Inhalt.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("catmull_rom_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("catmull_rom_editor.toml")
    }

    /// Prüft Werte, die das Editieren unmöglich machen würden.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.tension.is_finite() {
            anyhow::bail!("tension muss endlich sein, ist {}", self.tension);
        }
        if !(self.handle_radius.is_finite() && self.handle_radius > 0.0) {
            anyhow::bail!("handle_radius muss > 0 sein, ist {}", self.handle_radius);
        }
        for (name, [min, max]) in [
            ("axis_x_limits", self.axis_x_limits),
            ("axis_y_limits", self.axis_y_limits),
        ] {
            if !(min.is_finite() && max.is_finite() && min < max) {
                anyhow::bail!("{name} muss ein nicht-leerer Bereich sein, ist [{min}, {max}]");
            }
        }
        if self
            .initial_control_points
            .iter()
            .flatten()
            .any(|v| !v.is_finite())
        {
            anyhow::bail!("initial_control_points enthält nicht-endliche Werte");
        }
        self.display_range()?;
        Ok(())
    }

    /// Start-Kontrollpunkte als Vektoren.
    pub fn control_points(&self) -> [Vec2; 4] {
        self.initial_control_points.map(Vec2::from)
    }

    /// Parameterbereich der angezeigten Kurve.
    pub fn display_range(&self) -> anyhow::Result<SampleRange> {
        let [t_start, t_end] = self.display_t_range;
        let range = SampleRange::new(t_start, t_end, self.sample_step)?;
        range.sample_count()?;
        Ok(range)
    }

    /// Interpoliertes Segment (t ∈ [0, 1]) mit derselben Schrittweite.
    pub fn segment_range(&self) -> anyhow::Result<SampleRange> {
        Ok(SampleRange::segment(self.sample_step)?)
    }
}
