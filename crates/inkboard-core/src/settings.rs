//! Per-tool parameter settings with clamped writes.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Pen stroke width range in canvas units.
pub const PEN_SIZE_MIN: f64 = 0.5;
pub const PEN_SIZE_MAX: f64 = 50.0;

/// Brush stroke width range in canvas units.
pub const BRUSH_SIZE_MIN: f64 = 1.0;
pub const BRUSH_SIZE_MAX: f64 = 100.0;

/// Eraser width range in canvas units.
pub const ERASER_SIZE_MIN: f64 = 1.0;
pub const ERASER_SIZE_MAX: f64 = 200.0;

/// Clamp a proposed field value to its fixed range.
///
/// NaN normalizes to the minimum bound; `f64::clamp` would propagate it and
/// break the "every stored record is valid" contract.
fn clamped(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

/// Serializable color value (RGBA8) with hex-string accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// Tolerant: each malformed component falls back to mid-gray rather
    /// than failing, so user-typed values never produce an error.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(128)
        };
        let alpha = if digits.len() >= 8 { channel(6..8) } else { 255 };
        Self {
            r: channel(0..2),
            g: channel(2..4),
            b: channel(4..6),
            a: alpha,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Pen parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenSettings {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width in canvas units.
    pub size: f64,
    /// Stroke opacity, 0.0 to 1.0.
    pub opacity: f64,
    /// Input smoothing strength, 0.0 to 1.0.
    pub smoothing: f64,
    /// Whether stylus pressure modulates width.
    pub pressure: bool,
}

impl Default for PenSettings {
    fn default() -> Self {
        Self {
            color: Rgba::opaque(0x1a, 0x1a, 0x1a),
            size: 3.0,
            opacity: 1.0,
            smoothing: 0.5,
            pressure: true,
        }
    }
}

/// Brush parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width in canvas units.
    pub size: f64,
    /// Stroke opacity, 0.0 to 1.0.
    pub opacity: f64,
    /// Edge softness, 0.0 (hard) to 1.0 (fully feathered).
    pub softness: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Rgba::opaque(0x4a, 0x90, 0xd9),
            size: 12.0,
            opacity: 0.8,
            softness: 0.4,
        }
    }
}

/// Eraser parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EraserSettings {
    /// Eraser width in canvas units.
    pub size: f64,
    /// Erase strength, 0.0 to 1.0.
    pub opacity: f64,
    /// Edge hardness, 0.0 (soft) to 1.0 (hard).
    pub hardness: f64,
}

impl Default for EraserSettings {
    fn default() -> Self {
        Self {
            size: 24.0,
            opacity: 1.0,
            hardness: 1.0,
        }
    }
}

/// Owns every parametric tool's settings record.
///
/// Each write reads the latest record, changes one field (clamped to its
/// fixed range), and stores the whole record back, so rapid writes to
/// different fields never lose updates. That pattern is only safe under the
/// single UI-thread assumption this core runs with; concurrent mutators
/// would need compare-and-swap over whole records.
///
/// There is no error surface: out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pen: PenSettings,
    brush: BrushSettings,
    eraser: EraserSettings,
}

impl ToolSettings {
    /// Create the settings store with compiled-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pen record.
    pub fn pen(&self) -> PenSettings {
        self.pen
    }

    /// Current brush record.
    pub fn brush(&self) -> BrushSettings {
        self.brush
    }

    /// Current eraser record.
    pub fn eraser(&self) -> EraserSettings {
        self.eraser
    }

    pub fn set_pen_color(&mut self, color: Rgba) {
        let mut pen = self.pen;
        pen.color = color;
        self.pen = pen;
    }

    pub fn set_pen_color_hex(&mut self, hex: &str) {
        self.set_pen_color(Rgba::from_hex(hex));
    }

    pub fn set_pen_size(&mut self, size: f64) {
        let mut pen = self.pen;
        pen.size = clamped(size, PEN_SIZE_MIN, PEN_SIZE_MAX);
        self.pen = pen;
    }

    pub fn set_pen_opacity(&mut self, opacity: f64) {
        let mut pen = self.pen;
        pen.opacity = clamped(opacity, 0.0, 1.0);
        self.pen = pen;
    }

    pub fn set_pen_smoothing(&mut self, smoothing: f64) {
        let mut pen = self.pen;
        pen.smoothing = clamped(smoothing, 0.0, 1.0);
        self.pen = pen;
    }

    pub fn set_pen_pressure(&mut self, pressure: bool) {
        let mut pen = self.pen;
        pen.pressure = pressure;
        self.pen = pen;
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        let mut brush = self.brush;
        brush.color = color;
        self.brush = brush;
    }

    pub fn set_brush_color_hex(&mut self, hex: &str) {
        self.set_brush_color(Rgba::from_hex(hex));
    }

    pub fn set_brush_size(&mut self, size: f64) {
        let mut brush = self.brush;
        brush.size = clamped(size, BRUSH_SIZE_MIN, BRUSH_SIZE_MAX);
        self.brush = brush;
    }

    pub fn set_brush_opacity(&mut self, opacity: f64) {
        let mut brush = self.brush;
        brush.opacity = clamped(opacity, 0.0, 1.0);
        self.brush = brush;
    }

    pub fn set_brush_softness(&mut self, softness: f64) {
        let mut brush = self.brush;
        brush.softness = clamped(softness, 0.0, 1.0);
        self.brush = brush;
    }

    pub fn set_eraser_size(&mut self, size: f64) {
        let mut eraser = self.eraser;
        eraser.size = clamped(size, ERASER_SIZE_MIN, ERASER_SIZE_MAX);
        self.eraser = eraser;
    }

    pub fn set_eraser_opacity(&mut self, opacity: f64) {
        let mut eraser = self.eraser;
        eraser.opacity = clamped(opacity, 0.0, 1.0);
        self.eraser = eraser;
    }

    pub fn set_eraser_hardness(&mut self, hardness: f64) {
        let mut eraser = self.eraser;
        eraser.hardness = clamped(hardness, 0.0, 1.0);
        self.eraser = eraser;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_size_clamps_to_range() {
        let mut settings = ToolSettings::new();

        for (proposed, expected) in [
            (0.0, PEN_SIZE_MIN),
            (0.5, 0.5),
            (3.25, 3.25),
            (50.0, 50.0),
            (1000.0, PEN_SIZE_MAX),
            (-7.0, PEN_SIZE_MIN),
        ] {
            settings.set_pen_size(proposed);
            assert_eq!(settings.pen().size, expected, "proposed {proposed}");
        }
    }

    #[test]
    fn test_eraser_opacity_clamps_to_unit_range() {
        let mut settings = ToolSettings::new();

        for (proposed, expected) in [(-0.5, 0.0), (0.0, 0.0), (0.42, 0.42), (1.0, 1.0), (3.0, 1.0)]
        {
            settings.set_eraser_opacity(proposed);
            assert_eq!(settings.eraser().opacity, expected, "proposed {proposed}");
        }
    }

    #[test]
    fn test_nan_normalizes_to_minimum() {
        let mut settings = ToolSettings::new();
        settings.set_pen_size(f64::NAN);
        assert_eq!(settings.pen().size, PEN_SIZE_MIN);
        settings.set_brush_softness(f64::NAN);
        assert_eq!(settings.brush().softness, 0.0);
    }

    #[test]
    fn test_field_writes_preserve_other_fields() {
        let mut settings = ToolSettings::new();
        settings.set_pen_color_hex("#ff0000");
        settings.set_pen_size(10.0);
        settings.set_pen_opacity(0.5);

        let pen = settings.pen();
        assert_eq!(pen.color, Rgba::opaque(255, 0, 0));
        assert_eq!(pen.size, 10.0);
        assert_eq!(pen.opacity, 0.5);
        assert_eq!(pen.smoothing, PenSettings::default().smoothing);
        assert!(pen.pressure);
    }

    #[test]
    fn test_records_are_independent() {
        let mut settings = ToolSettings::new();
        settings.set_pen_size(40.0);
        assert_eq!(settings.brush().size, BrushSettings::default().size);
        assert_eq!(settings.eraser().size, EraserSettings::default().size);
    }

    #[test]
    fn test_hex_roundtrip() {
        let color = Rgba::from_hex("#4a90d9");
        assert_eq!(color, Rgba::opaque(0x4a, 0x90, 0xd9));
        assert_eq!(color.to_hex(), "#4a90d9");

        let translucent = Rgba::from_hex("#11223380");
        assert_eq!(translucent.a, 0x80);
        assert_eq!(translucent.to_hex(), "#11223380");
    }

    #[test]
    fn test_malformed_hex_falls_back_per_channel() {
        // Bad green component, everything else intact.
        let color = Rgba::from_hex("#ffzz00");
        assert_eq!(color.r, 255);
        assert_eq!(color.g, 128);
        assert_eq!(color.b, 0);

        // Too short: missing channels fall back.
        let short = Rgba::from_hex("#ab");
        assert_eq!(short, Rgba::opaque(0xab, 128, 128));
    }

    #[test]
    fn test_peniko_color_roundtrip() {
        let color = Rgba::new(10, 20, 30, 40);
        let peniko: Color = color.into();
        assert_eq!(Rgba::from(peniko), color);
    }

    #[test]
    fn test_settings_serialize_roundtrip() {
        let mut settings = ToolSettings::new();
        settings.set_pen_color_hex("#d94b4b");
        settings.set_eraser_size(64.0);

        let json = serde_json::to_string(&settings).unwrap();
        let restored: ToolSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
