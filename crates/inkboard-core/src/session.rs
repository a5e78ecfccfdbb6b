//! Editor session context owning the tool-state core.

use crate::cursor::{CursorDescriptor, derive_cursor};
use crate::settings::{Rgba, ToolSettings};
use crate::tools::{ToolGroup, ToolId, ToolSelection};
use serde::{Deserialize, Serialize};

/// Owns the active-tool state machine and settings store for one editing
/// session. Created at session start, dropped at session end; UI
/// collaborators hold a reference and route input events through it.
///
/// Cursor recomputation is pull-based: every mutation that can affect the
/// derived cursor bumps `cursor_epoch`, and hosts call [`EditorSession::cursor`]
/// when the epoch moved since they last looked. Derivation is cheap (bounded
/// by the cursor size cap), so spurious bumps cost little and there is no
/// subscription machinery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorSession {
    tools: ToolSelection,
    settings: ToolSettings,
    /// Bumped on every cursor-relevant mutation. Transient, not persisted.
    #[serde(skip)]
    cursor_epoch: u64,
}

impl EditorSession {
    /// Create a session with the initial tool and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tool selection state (read-only; mutate through the session).
    pub fn tools(&self) -> &ToolSelection {
        &self.tools
    }

    /// Settings store (read-only; mutate through the session).
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Monotonic counter of cursor-relevant mutations.
    pub fn cursor_epoch(&self) -> u64 {
        self.cursor_epoch
    }

    /// Derive the pointer appearance for the current tool and settings.
    pub fn cursor(&self) -> CursorDescriptor {
        derive_cursor(self.tools.selected(), &self.settings)
    }

    fn touch(&mut self) {
        self.cursor_epoch += 1;
    }

    // --- Tool selection ---

    /// Select a tool (toolbar click).
    pub fn select_tool(&mut self, id: ToolId) {
        self.tools.select_tool(id);
        self.touch();
    }

    /// Select a tool by its host-side name. Unknown names are ignored; the
    /// toolbar never fails on bad input.
    pub fn select_tool_by_name(&mut self, name: &str) {
        match ToolId::parse(name) {
            Some(id) => self.select_tool(id),
            None => log::warn!("ignoring unknown tool name: {name:?}"),
        }
    }

    /// Engage the temporary hold-to-pan override.
    pub fn activate_override(&mut self) {
        if self.tools.activate_override() {
            self.touch();
        }
    }

    /// Release the temporary override.
    pub fn deactivate_override(&mut self) {
        if self.tools.deactivate_override() {
            self.touch();
        }
    }

    /// Remember the last-picked member of a grouped toolbar control. Does
    /// not affect the cursor.
    pub fn record_sub_item(&mut self, group: ToolGroup, id: ToolId) {
        self.tools.record_sub_item(group, id);
    }

    // --- Settings (each forwards to the store, then bumps the epoch) ---

    pub fn set_pen_color(&mut self, color: Rgba) {
        self.settings.set_pen_color(color);
        self.touch();
    }

    pub fn set_pen_color_hex(&mut self, hex: &str) {
        self.settings.set_pen_color_hex(hex);
        self.touch();
    }

    pub fn set_pen_size(&mut self, size: f64) {
        self.settings.set_pen_size(size);
        self.touch();
    }

    pub fn set_pen_opacity(&mut self, opacity: f64) {
        self.settings.set_pen_opacity(opacity);
        self.touch();
    }

    pub fn set_pen_smoothing(&mut self, smoothing: f64) {
        self.settings.set_pen_smoothing(smoothing);
        self.touch();
    }

    pub fn set_pen_pressure(&mut self, pressure: bool) {
        self.settings.set_pen_pressure(pressure);
        self.touch();
    }

    pub fn set_brush_color(&mut self, color: Rgba) {
        self.settings.set_brush_color(color);
        self.touch();
    }

    pub fn set_brush_color_hex(&mut self, hex: &str) {
        self.settings.set_brush_color_hex(hex);
        self.touch();
    }

    pub fn set_brush_size(&mut self, size: f64) {
        self.settings.set_brush_size(size);
        self.touch();
    }

    pub fn set_brush_opacity(&mut self, opacity: f64) {
        self.settings.set_brush_opacity(opacity);
        self.touch();
    }

    pub fn set_brush_softness(&mut self, softness: f64) {
        self.settings.set_brush_softness(softness);
        self.touch();
    }

    pub fn set_eraser_size(&mut self, size: f64) {
        self.settings.set_eraser_size(size);
        self.touch();
    }

    pub fn set_eraser_opacity(&mut self, opacity: f64) {
        self.settings.set_eraser_opacity(opacity);
        self.touch();
    }

    pub fn set_eraser_hardness(&mut self, hardness: f64) {
        self.settings.set_eraser_hardness(hardness);
        self.touch();
    }
}
