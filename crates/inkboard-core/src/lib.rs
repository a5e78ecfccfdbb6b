//! Inkboard Core Library
//!
//! Client-side tool-state and geometry core for the Inkboard drawing canvas:
//! active-tool selection, per-tool settings, cursor derivation, and selection
//! bounds accumulation. Rendering, persistence, and UI chrome live in the
//! host layers that consume this crate.

pub mod bounds;
pub mod cursor;
pub mod selection;
pub mod session;
pub mod settings;
pub mod tools;

pub use bounds::Bounds;
pub use cursor::{
    CursorBitmap, CursorDescriptor, NamedCursor, derive_cursor, derive_cursor_for_name,
};
pub use selection::{ObjectId, SelectionBounds};
pub use session::EditorSession;
pub use settings::{BrushSettings, EraserSettings, PenSettings, Rgba, ToolSettings};
pub use tools::{OVERRIDE_TOOL, ToolGroup, ToolId, ToolSelection};
