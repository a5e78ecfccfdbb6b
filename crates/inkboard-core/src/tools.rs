//! Active-tool state machine for the canvas toolbar.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolId {
    #[default]
    Select,
    ZoomIn,
    ZoomOut,
    Hand,
    Pen,
    Brush,
    Eraser,
    Text,
    Comment,
}

impl ToolId {
    /// Parse a host-side tool name. Unknown names yield `None`; callers
    /// decide the fallback (toolbars ignore, cursor derivation uses the
    /// default arrow).
    pub fn parse(name: &str) -> Option<ToolId> {
        match name {
            "select" => Some(ToolId::Select),
            "zoomin" => Some(ToolId::ZoomIn),
            "zoomout" => Some(ToolId::ZoomOut),
            "hand" => Some(ToolId::Hand),
            "pen" => Some(ToolId::Pen),
            "brush" => Some(ToolId::Brush),
            "eraser" => Some(ToolId::Eraser),
            "text" => Some(ToolId::Text),
            "comment" => Some(ToolId::Comment),
            _ => None,
        }
    }

    /// The host-side name of this tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Select => "select",
            ToolId::ZoomIn => "zoomin",
            ToolId::ZoomOut => "zoomout",
            ToolId::Hand => "hand",
            ToolId::Pen => "pen",
            ToolId::Brush => "brush",
            ToolId::Eraser => "eraser",
            ToolId::Text => "text",
            ToolId::Comment => "comment",
        }
    }

    /// The toolbar group this tool shares a slot with, if any.
    pub fn group(&self) -> Option<ToolGroup> {
        match self {
            ToolId::Select | ToolId::Hand => Some(ToolGroup::Navigate),
            ToolId::ZoomIn | ToolId::ZoomOut => Some(ToolGroup::Zoom),
            _ => None,
        }
    }
}

/// Toolbar slots that hold more than one tool.
///
/// Grouped tools share one visual slot; the group's icon shows whichever
/// member the user picked last (see [`ToolSelection::record_sub_item`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolGroup {
    /// Select / hand.
    Navigate,
    /// Zoom in / zoom out.
    Zoom,
}

impl ToolGroup {
    /// Members of this group, in toolbar order.
    pub fn members(&self) -> &'static [ToolId] {
        match self {
            ToolGroup::Navigate => &[ToolId::Select, ToolId::Hand],
            ToolGroup::Zoom => &[ToolId::ZoomIn, ToolId::ZoomOut],
        }
    }

    /// First member, used as the default sub-item.
    pub fn primary(&self) -> ToolId {
        self.members()[0]
    }
}

/// Tool engaged while the temporary override (hold-to-pan) is active.
pub const OVERRIDE_TOOL: ToolId = ToolId::Hand;

/// Current tool selection for an editing session.
///
/// Invariant: while `override_active` is true, `selected` is
/// [`OVERRIDE_TOOL`] and `previous` holds the tool that was active before the
/// override began. At most one override can be active; repeated activation
/// (a held key generating repeat events) is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSelection {
    /// Currently active tool.
    selected: ToolId,
    /// Tool active immediately before a temporary override began.
    previous: ToolId,
    /// Whether a temporary override is engaged.
    override_active: bool,
    /// Last-picked member per grouped toolbar slot.
    last_sub_item: HashMap<ToolGroup, ToolId>,
}

impl Default for ToolSelection {
    fn default() -> Self {
        let mut last_sub_item = HashMap::new();
        for group in [ToolGroup::Navigate, ToolGroup::Zoom] {
            last_sub_item.insert(group, group.primary());
        }
        Self {
            selected: ToolId::Select,
            previous: ToolId::Select,
            override_active: false,
            last_sub_item,
        }
    }
}

impl ToolSelection {
    /// Create the initial selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active tool.
    pub fn selected(&self) -> ToolId {
        self.selected
    }

    /// Tool that was active before the current/most recent override.
    pub fn previous(&self) -> ToolId {
        self.previous
    }

    /// Whether a temporary override is engaged.
    pub fn is_override_active(&self) -> bool {
        self.override_active
    }

    /// Select a tool directly (toolbar click).
    ///
    /// Leaves `previous` and the override flag untouched; manual selection
    /// is independent of the override mechanism, including while an
    /// override is active.
    pub fn select_tool(&mut self, id: ToolId) {
        log::debug!("select_tool: {}", id.as_str());
        self.selected = id;
    }

    /// Engage the temporary override (e.g. pan while a key is held).
    ///
    /// No-op if already active, so key-repeat events are harmless. Returns
    /// whether the override was newly engaged.
    pub fn activate_override(&mut self) -> bool {
        if self.override_active {
            return false;
        }
        log::debug!(
            "activate_override: {} -> {}",
            self.selected.as_str(),
            OVERRIDE_TOOL.as_str()
        );
        self.previous = self.selected;
        self.selected = OVERRIDE_TOOL;
        self.override_active = true;
        true
    }

    /// Release the temporary override, restoring the prior tool.
    ///
    /// No-op if no override is active. Returns whether an override was
    /// released.
    pub fn deactivate_override(&mut self) -> bool {
        if !self.override_active {
            return false;
        }
        log::debug!("deactivate_override: restoring {}", self.previous.as_str());
        self.selected = self.previous;
        self.override_active = false;
        true
    }

    /// Remember which member of a grouped control the user picked last, so
    /// the group's icon reflects it the next time the control opens.
    pub fn record_sub_item(&mut self, group: ToolGroup, id: ToolId) {
        self.last_sub_item.insert(group, id);
    }

    /// Last-picked member of a grouped control (the group's primary member
    /// until the user picks one).
    pub fn last_sub_item(&self, group: ToolGroup) -> ToolId {
        self.last_sub_item
            .get(&group)
            .copied()
            .unwrap_or_else(|| group.primary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let ts = ToolSelection::new();
        assert_eq!(ts.selected(), ToolId::Select);
        assert_eq!(ts.previous(), ToolId::Select);
        assert!(!ts.is_override_active());
        assert_eq!(ts.last_sub_item(ToolGroup::Navigate), ToolId::Select);
        assert_eq!(ts.last_sub_item(ToolGroup::Zoom), ToolId::ZoomIn);
    }

    #[test]
    fn test_select_tool() {
        let mut ts = ToolSelection::new();
        ts.select_tool(ToolId::Pen);
        assert_eq!(ts.selected(), ToolId::Pen);
        assert_eq!(ts.previous(), ToolId::Select);
        assert!(!ts.is_override_active());
    }

    #[test]
    fn test_override_roundtrip() {
        let mut ts = ToolSelection::new();
        ts.select_tool(ToolId::Pen);

        assert!(ts.activate_override());
        assert_eq!(ts.selected(), ToolId::Hand);
        assert_eq!(ts.previous(), ToolId::Pen);
        assert!(ts.is_override_active());

        assert!(ts.deactivate_override());
        assert_eq!(ts.selected(), ToolId::Pen);
        assert!(!ts.is_override_active());
    }

    #[test]
    fn test_override_activation_is_idempotent() {
        let mut ts = ToolSelection::new();
        assert!(ts.activate_override());
        let after_first = ts.clone();

        // Key-repeat while held must not re-enter.
        assert!(!ts.activate_override());
        assert_eq!(ts.selected(), after_first.selected());
        assert_eq!(ts.previous(), after_first.previous());
        assert_eq!(ts.is_override_active(), after_first.is_override_active());
    }

    #[test]
    fn test_deactivate_without_override_is_noop() {
        let mut ts = ToolSelection::new();
        ts.select_tool(ToolId::Eraser);
        assert!(!ts.deactivate_override());
        assert_eq!(ts.selected(), ToolId::Eraser);
        assert!(!ts.is_override_active());
    }

    #[test]
    fn test_manual_selection_leaves_override_engaged() {
        let mut ts = ToolSelection::new();
        ts.select_tool(ToolId::Pen);
        ts.activate_override();

        // Reference behavior: a toolbar click during an override changes the
        // selected tool but does not exit the override.
        ts.select_tool(ToolId::Text);
        assert_eq!(ts.selected(), ToolId::Text);
        assert!(ts.is_override_active());
        assert_eq!(ts.previous(), ToolId::Pen);

        // Releasing the override still restores the pre-override tool.
        ts.deactivate_override();
        assert_eq!(ts.selected(), ToolId::Pen);
    }

    #[test]
    fn test_sub_item_memory() {
        let mut ts = ToolSelection::new();
        ts.record_sub_item(ToolGroup::Navigate, ToolId::Hand);
        ts.record_sub_item(ToolGroup::Zoom, ToolId::ZoomOut);
        assert_eq!(ts.last_sub_item(ToolGroup::Navigate), ToolId::Hand);
        assert_eq!(ts.last_sub_item(ToolGroup::Zoom), ToolId::ZoomOut);
    }

    #[test]
    fn test_tool_name_roundtrip() {
        for tool in [
            ToolId::Select,
            ToolId::ZoomIn,
            ToolId::ZoomOut,
            ToolId::Hand,
            ToolId::Pen,
            ToolId::Brush,
            ToolId::Eraser,
            ToolId::Text,
            ToolId::Comment,
        ] {
            assert_eq!(ToolId::parse(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolId::parse("lasso"), None);
    }

    #[test]
    fn test_group_membership() {
        assert_eq!(ToolId::Select.group(), Some(ToolGroup::Navigate));
        assert_eq!(ToolId::Hand.group(), Some(ToolGroup::Navigate));
        assert_eq!(ToolId::ZoomOut.group(), Some(ToolGroup::Zoom));
        assert_eq!(ToolId::Pen.group(), None);
        assert_eq!(ToolGroup::Navigate.primary(), ToolId::Select);
        assert_eq!(ToolGroup::Zoom.primary(), ToolId::ZoomIn);
    }
}
