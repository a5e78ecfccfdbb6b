//! Accumulated selection bounds for the transform overlay.

use crate::bounds::Bounds;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifier of a canvas object tracked by the selection overlay.
pub type ObjectId = Uuid;

/// Per-object bounding boxes for the active selection.
///
/// Selection/transform logic feeds this as objects enter and leave the
/// selection (shift-click, marquee); the overlay reads [`SelectionBounds::total`]
/// to draw the bounding rectangle and resize handles. The fold over
/// [`Bounds::merge`] is order-independent, so the result does not depend on
/// the order objects were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionBounds {
    boxes: HashMap<ObjectId, Bounds>,
}

impl SelectionBounds {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an object entering the selection (or moving: re-inserting
    /// replaces its box).
    pub fn insert(&mut self, id: ObjectId, bounds: Bounds) {
        self.boxes.insert(id, bounds);
    }

    /// Remove an object leaving the selection. Returns its box if it was
    /// tracked.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Bounds> {
        self.boxes.remove(id)
    }

    /// Drop the whole selection.
    pub fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Number of selected objects.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Whether an object is currently tracked.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.boxes.contains_key(id)
    }

    /// Total envelope around the selection, or `None` when nothing is
    /// selected (explicit absence instead of the infinite sentinel).
    pub fn total(&self) -> Option<Bounds> {
        if self.boxes.is_empty() {
            return None;
        }
        Some(Bounds::merge_all(self.boxes.values().copied()))
    }

    /// The overlay rectangle: the total envelope grown by `padding` so
    /// resize handles sit outside the objects themselves.
    pub fn handle_rect(&self, padding: f64) -> Option<Bounds> {
        self.total().map(|bounds| bounds.inflate(padding))
    }
}
