//! Node expansion state machine
//!
//! Each node on the canvas owns exactly one [`NodeExpansionController`],
//! the single source of truth for its collapsed/expanded mode and active
//! inspector tab. The controller enforces one invariant at all times:
//! a tab can only be active while the node is expanded.
//!
//! All invalid transitions (selecting a tab while collapsed, expanding an
//! already-expanded node) are silent no-ops, never errors. The UI gates
//! these calls by visibility, but the controller stays safe if invoked
//! anyway.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::node::NodeId;
use crate::tabs::InspectorTab;

/// Snapshot of one node's expansion state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExpansionState {
    /// Collapsed vs. expanded visual mode
    pub expanded: bool,
    /// Which tab's panel is open; `None` whenever collapsed
    pub active_tab: Option<InspectorTab>,
}

/// State machine governing one node's expand/tab state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeExpansionController {
    state: NodeExpansionState,
}

impl NodeExpansionController {
    /// Create a controller in the default collapsed state
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state snapshot
    pub fn state(&self) -> NodeExpansionState {
        self.state
    }

    /// Whether the node is expanded
    pub fn is_expanded(&self) -> bool {
        self.state.expanded
    }

    /// Currently active tab, if any
    pub fn active_tab(&self) -> Option<InspectorTab> {
        self.state.active_tab
    }

    /// Collapsed -> Expanded(none). No-op when already expanded, so a
    /// repeated click on the open body cannot flicker the node shut and
    /// open again.
    pub fn request_expand(&mut self) {
        if self.state.expanded {
            return;
        }
        self.state.expanded = true;
    }

    /// Any Expanded(*) -> Collapsed, unconditionally clearing the active
    /// tab. No-op when already collapsed.
    pub fn request_collapse(&mut self) {
        if !self.state.expanded {
            return;
        }
        self.state = NodeExpansionState::default();
    }

    /// Set the active tab. Only valid while expanded; selecting the
    /// already-active tab is idempotent, not a toggle-close.
    pub fn select_tab(&mut self, tab: InspectorTab) {
        if !self.state.expanded {
            return;
        }
        self.state.active_tab = Some(tab);
    }
}

/// Per-node controller storage, keyed by node identity.
///
/// Controllers are created lazily on first access and discarded with
/// [`ExpansionStore::remove`] when a node leaves the graph. Each entry is
/// fully independent; nothing is shared across nodes.
#[derive(Debug, Clone, Default)]
pub struct ExpansionStore {
    controllers: HashMap<NodeId, NodeExpansionController>,
}

impl ExpansionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable access to a node's controller, creating the default
    /// collapsed controller on first use.
    pub fn controller_mut(&mut self, id: &NodeId) -> &mut NodeExpansionController {
        self.controllers.entry(id.clone()).or_default()
    }

    /// Read a node's state without creating an entry. Nodes never touched
    /// report the default collapsed state.
    pub fn state(&self, id: &NodeId) -> NodeExpansionState {
        self.controllers
            .get(id)
            .map(|c| c.state())
            .unwrap_or_default()
    }

    /// Drop a node's state when the node is unmounted
    pub fn remove(&mut self, id: &NodeId) {
        self.controllers.remove(id);
    }

    /// Number of tracked controllers
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no controller has been created yet
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_controller_is_collapsed() {
        let controller = NodeExpansionController::new();
        assert_eq!(
            controller.state(),
            NodeExpansionState {
                expanded: false,
                active_tab: None
            }
        );
    }

    #[test]
    fn test_expand_then_select() {
        let mut controller = NodeExpansionController::new();
        controller.request_expand();
        controller.select_tab(InspectorTab::Sprites);
        assert!(controller.is_expanded());
        assert_eq!(controller.active_tab(), Some(InspectorTab::Sprites));
    }

    #[test]
    fn test_collapse_clears_tab() {
        let mut controller = NodeExpansionController::new();
        controller.request_expand();
        controller.select_tab(InspectorTab::Events);
        controller.request_collapse();
        assert_eq!(controller.state(), NodeExpansionState::default());
    }

    #[test]
    fn test_select_while_collapsed_is_noop() {
        let mut controller = NodeExpansionController::new();
        controller.select_tab(InspectorTab::Physics);
        assert_eq!(controller.state(), NodeExpansionState::default());
    }

    #[test]
    fn test_store_lazily_creates_and_removes() {
        let mut store = ExpansionStore::new();
        let id = NodeId::new("Player");
        assert!(store.is_empty());
        assert_eq!(store.state(&id), NodeExpansionState::default());
        assert!(store.is_empty());

        store.controller_mut(&id).request_expand();
        assert_eq!(store.len(), 1);
        assert!(store.state(&id).expanded);

        store.remove(&id);
        assert!(store.is_empty());
        assert_eq!(store.state(&id), NodeExpansionState::default());
    }
}
