//! Detail panel derivation
//!
//! The detail panel beside an expanded node is a pure function of the
//! node's expansion state and the tab catalog: it is visible exactly when
//! the node is expanded, a tab is active, and that tab has a content
//! surface. The presenter additionally announces enter/leave transitions
//! on visibility edges so the UI layer can play its timed animation; the
//! presenter itself has no notion of time.

use crate::expansion::NodeExpansionState;
use crate::tabs::{InspectorTab, TabRegistry};

/// Derived panel state for one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    /// Whether the panel should be shown
    pub visible: bool,
    /// The tab whose content fills the panel, when visible
    pub tab: Option<InspectorTab>,
}

impl PanelState {
    /// The hidden panel
    pub const HIDDEN: PanelState = PanelState {
        visible: false,
        tab: None,
    };
}

/// Transition announced on a visibility edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// Panel became visible: fade + slide in
    Enter,
    /// Panel became hidden: symmetric fade + slide out
    Leave,
}

/// Tracks the previously derived visibility so visibility edges can be
/// reported alongside the derived state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailPanelPresenter {
    last_visible: bool,
}

impl DetailPanelPresenter {
    /// Create a presenter that has never shown a panel
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure derivation of panel state from node state and catalog.
    ///
    /// A tab nominally selected but lacking content keeps the panel
    /// hidden: tabs under development render nothing rather than an
    /// empty shell.
    pub fn derive(state: &NodeExpansionState, registry: &TabRegistry) -> PanelState {
        match state.active_tab {
            Some(tab) if state.expanded && registry.content_available(tab) => PanelState {
                visible: true,
                tab: Some(tab),
            },
            _ => PanelState::HIDDEN,
        }
    }

    /// Derive the panel state and report a transition if visibility
    /// flipped since the previous observation.
    pub fn observe(
        &mut self,
        state: &NodeExpansionState,
        registry: &TabRegistry,
    ) -> (PanelState, Option<PanelTransition>) {
        let panel = Self::derive(state, registry);
        let transition = match (self.last_visible, panel.visible) {
            (false, true) => Some(PanelTransition::Enter),
            (true, false) => Some(PanelTransition::Leave),
            _ => None,
        };
        self.last_visible = panel.visible;
        (panel, transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(expanded: bool, active_tab: Option<InspectorTab>) -> NodeExpansionState {
        NodeExpansionState {
            expanded,
            active_tab,
        }
    }

    #[test]
    fn test_visible_only_with_content() {
        let registry = TabRegistry::default();
        let events = state(true, Some(InspectorTab::Events));
        let sprites = state(true, Some(InspectorTab::Sprites));
        assert!(DetailPanelPresenter::derive(&events, &registry).visible);
        assert!(!DetailPanelPresenter::derive(&sprites, &registry).visible);
    }

    #[test]
    fn test_enter_and_leave_edges() {
        let registry = TabRegistry::default();
        let mut presenter = DetailPanelPresenter::new();

        let (_, t) = presenter.observe(&state(false, None), &registry);
        assert_eq!(t, None);

        let (panel, t) = presenter.observe(&state(true, Some(InspectorTab::Events)), &registry);
        assert!(panel.visible);
        assert_eq!(t, Some(PanelTransition::Enter));

        // Same state again: no new transition
        let (_, t) = presenter.observe(&state(true, Some(InspectorTab::Events)), &registry);
        assert_eq!(t, None);

        let (panel, t) = presenter.observe(&state(false, None), &registry);
        assert!(!panel.visible);
        assert_eq!(t, Some(PanelTransition::Leave));
    }

    #[test]
    fn test_switch_to_contentless_tab_leaves() {
        let registry = TabRegistry::default();
        let mut presenter = DetailPanelPresenter::new();
        presenter.observe(&state(true, Some(InspectorTab::Events)), &registry);
        let (panel, t) = presenter.observe(&state(true, Some(InspectorTab::Physics)), &registry);
        assert!(!panel.visible);
        assert_eq!(t, Some(PanelTransition::Leave));
    }
}
