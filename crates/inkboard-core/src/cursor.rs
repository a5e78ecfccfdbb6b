//! Cursor derivation from the active tool and its settings.

use crate::settings::{Rgba, ToolSettings};
use crate::tools::ToolId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diameter range for generated cursors, in pixels.
///
/// Independent of the settings-level clamps: a 0.5 unit pen stroke is a
/// valid drawing width but not a visible pointer, and anything past 128
/// stops being a cursor.
pub const CURSOR_DIAMETER_MIN: f64 = 8.0;
pub const CURSOR_DIAMETER_MAX: f64 = 128.0;

/// Fixed pointer shapes provided by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedCursor {
    /// Default arrow.
    Default,
    /// Open-hand pan cursor.
    Grab,
    ZoomIn,
    ZoomOut,
    /// Text caret (I-beam).
    Text,
    /// Pointing hand.
    Pointer,
    /// Fallback when no raster surface is available.
    Crosshair,
}

impl NamedCursor {
    /// The CSS `cursor` keyword for this shape.
    pub fn css_name(&self) -> &'static str {
        match self {
            NamedCursor::Default => "default",
            NamedCursor::Grab => "grab",
            NamedCursor::ZoomIn => "zoom-in",
            NamedCursor::ZoomOut => "zoom-out",
            NamedCursor::Text => "text",
            NamedCursor::Pointer => "pointer",
            NamedCursor::Crosshair => "crosshair",
        }
    }
}

/// Raster-surface errors. These never escape [`derive_cursor`], which
/// degrades to a crosshair instead.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("invalid raster surface size: {0}px")]
    InvalidSurfaceSize(u32),
    #[error("PNG encoding failed: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// A generated cursor raster (RGBA8, row-major, width == height).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorBitmap {
    /// Width and height in pixels.
    pub size: u32,
    /// Hot-spot position, at the circle center.
    pub hotspot: (u32, u32),
    /// RGBA8 pixel data, `size * size * 4` bytes.
    pub pixels: Vec<u8>,
}

impl CursorBitmap {
    /// Read one pixel. Panics on out-of-range coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Encode the bitmap as a PNG for hosts that take image cursors.
    pub fn to_png(&self) -> Result<Vec<u8>, CursorError> {
        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, self.size, self.size);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(png_data)
    }
}

/// The pointer appearance for the canvas surface: a named system shape or a
/// generated bitmap plus hot-spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CursorDescriptor {
    Named(NamedCursor),
    Bitmap(CursorBitmap),
}

impl CursorDescriptor {
    /// The CSS `cursor` property value for a web host.
    ///
    /// Bitmaps become a base64 data-URL with the hot-spot appended and
    /// `crosshair` as the mandatory keyword fallback.
    pub fn css_value(&self) -> String {
        use base64::{Engine, engine::general_purpose::STANDARD};

        match self {
            CursorDescriptor::Named(named) => named.css_name().to_string(),
            CursorDescriptor::Bitmap(bitmap) => match bitmap.to_png() {
                Ok(data) => format!(
                    "url(data:image/png;base64,{}) {} {}, crosshair",
                    STANDARD.encode(&data),
                    bitmap.hotspot.0,
                    bitmap.hotspot.1
                ),
                Err(err) => {
                    log::warn!("cursor PNG encoding failed: {err}");
                    NamedCursor::Crosshair.css_name().to_string()
                }
            },
        }
    }
}

/// Derive the pointer appearance for a tool.
///
/// Pure and deterministic; each call rasterizes a fresh ring for the
/// parametric tools (no cache). The caller re-derives whenever the selected
/// tool or its relevant settings change.
pub fn derive_cursor(tool: ToolId, settings: &ToolSettings) -> CursorDescriptor {
    match tool {
        ToolId::Select => CursorDescriptor::Named(NamedCursor::Default),
        ToolId::Hand => CursorDescriptor::Named(NamedCursor::Grab),
        ToolId::ZoomIn => CursorDescriptor::Named(NamedCursor::ZoomIn),
        ToolId::ZoomOut => CursorDescriptor::Named(NamedCursor::ZoomOut),
        ToolId::Text => CursorDescriptor::Named(NamedCursor::Text),
        ToolId::Comment => CursorDescriptor::Named(NamedCursor::Pointer),
        ToolId::Pen => ring_cursor(settings.pen().size, Some(settings.pen().color)),
        ToolId::Brush => ring_cursor(settings.brush().size, Some(settings.brush().color)),
        ToolId::Eraser => ring_cursor(settings.eraser().size, None),
    }
}

/// String-boundary variant of [`derive_cursor`]: unknown tool names fall
/// back to the default arrow, never an error.
pub fn derive_cursor_for_name(name: &str, settings: &ToolSettings) -> CursorDescriptor {
    match ToolId::parse(name) {
        Some(tool) => derive_cursor(tool, settings),
        None => CursorDescriptor::Named(NamedCursor::Default),
    }
}

/// Rasterize a ring cursor, degrading to a crosshair if no surface can be
/// produced (a missing cursor is cosmetic, not fatal).
fn ring_cursor(size: f64, tint: Option<Rgba>) -> CursorDescriptor {
    match render_ring(size, tint) {
        Ok(bitmap) => CursorDescriptor::Bitmap(bitmap),
        Err(err) => {
            log::warn!("cursor raster unavailable, using crosshair: {err}");
            CursorDescriptor::Named(NamedCursor::Crosshair)
        }
    }
}

/// Offscreen RGBA surface for cursor rasterization, allocated per call and
/// not retained.
struct RasterSurface {
    size: u32,
    pixels: Vec<u8>,
}

impl RasterSurface {
    fn new(size: u32) -> Result<Self, CursorError> {
        if size == 0 || size > CURSOR_DIAMETER_MAX as u32 {
            return Err(CursorError::InvalidSurfaceSize(size));
        }
        Ok(Self {
            size,
            pixels: vec![0; (size * size * 4) as usize],
        })
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = ((y * self.size + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }

    fn into_bitmap(self, hotspot: (u32, u32)) -> CursorBitmap {
        CursorBitmap {
            size: self.size,
            hotspot,
            pixels: self.pixels,
        }
    }
}

/// Draw two concentric 1px circle outlines, outer dark and inner light, so
/// the ring stays visible on both light and dark canvas backgrounds.
fn render_ring(size: f64, tint: Option<Rgba>) -> Result<CursorBitmap, CursorError> {
    let diameter = if size.is_nan() {
        CURSOR_DIAMETER_MIN
    } else {
        size.clamp(CURSOR_DIAMETER_MIN, CURSOR_DIAMETER_MAX)
    };
    let side = diameter.round() as u32;
    let mut surface = RasterSurface::new(side)?;

    let (dark, light) = ring_colors(tint);
    let center = (side as f64 - 1.0) / 2.0;
    let outer_radius = side as f64 / 2.0 - 0.5;
    let inner_radius = outer_radius - 1.0;

    for y in 0..side {
        for x in 0..side {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist <= outer_radius && dist > inner_radius {
                surface.set_pixel(x, y, dark);
            } else if dist <= inner_radius && dist > inner_radius - 1.0 {
                surface.set_pixel(x, y, light);
            }
        }
    }

    Ok(surface.into_bitmap((side / 2, side / 2)))
}

/// Outer/inner ring colors: darkened and lightened takes on the tool color,
/// or a neutral gray/white pair when no tint applies (eraser).
fn ring_colors(tint: Option<Rgba>) -> ([u8; 4], [u8; 4]) {
    match tint {
        Some(color) => {
            let dark = [
                scale_channel(color.r, 0.55),
                scale_channel(color.g, 0.55),
                scale_channel(color.b, 0.55),
                230,
            ];
            let light = [
                lift_channel(color.r),
                lift_channel(color.g),
                lift_channel(color.b),
                230,
            ];
            (dark, light)
        }
        None => ([40, 40, 40, 230], [255, 255, 255, 230]),
    }
}

fn scale_channel(channel: u8, factor: f64) -> u8 {
    (channel as f64 * factor).round() as u8
}

fn lift_channel(channel: u8) -> u8 {
    let value = channel as f64;
    (value + (255.0 - value) * 0.7).round() as u8
}
