use objectflow_core::{
    DetailPanelPresenter, InspectorTab, NodeExpansionController, NodeExpansionState, PanelState,
    PanelTransition, TabRegistry,
};

/// Full truth table over (expanded, tab selected, tab has content).
///
/// The controller cannot reach the two states where a tab is active while
/// collapsed, but the derivation must still report them hidden.
#[test]
fn test_visibility_truth_table() {
    let registry = TabRegistry::default();
    let with_content = InspectorTab::Events;
    let without_content = InspectorTab::Sprites;

    let cases = [
        (false, None, false),
        (false, Some(without_content), false),
        (false, Some(with_content), false),
        (true, None, false),
        (true, Some(without_content), false),
        (true, Some(with_content), true),
    ];

    for (expanded, active_tab, expected) in cases {
        let state = NodeExpansionState {
            expanded,
            active_tab,
        };
        let panel = DetailPanelPresenter::derive(&state, &registry);
        assert_eq!(
            panel.visible, expected,
            "expanded={expanded}, tab={active_tab:?}"
        );
        if expected {
            assert_eq!(panel.tab, active_tab);
        } else {
            assert_eq!(panel, PanelState::HIDDEN);
        }
    }
}

#[test]
fn test_fresh_node_panel_hidden() {
    let registry = TabRegistry::default();
    let controller = NodeExpansionController::new();
    let panel = DetailPanelPresenter::derive(&controller.state(), &registry);
    assert!(!panel.visible);
}

#[test]
fn test_sprites_selection_keeps_panel_hidden() {
    let registry = TabRegistry::default();
    let mut controller = NodeExpansionController::new();
    let mut presenter = DetailPanelPresenter::new();

    controller.request_expand();
    controller.select_tab(InspectorTab::Sprites);

    let (panel, transition) = presenter.observe(&controller.state(), &registry);
    assert!(!panel.visible);
    assert_eq!(transition, None);
}

#[test]
fn test_collapse_announces_leave() {
    let registry = TabRegistry::default();
    let mut controller = NodeExpansionController::new();
    let mut presenter = DetailPanelPresenter::new();

    controller.request_expand();
    controller.select_tab(InspectorTab::Events);
    let (panel, transition) = presenter.observe(&controller.state(), &registry);
    assert!(panel.visible);
    assert_eq!(transition, Some(PanelTransition::Enter));

    controller.request_collapse();
    let (panel, transition) = presenter.observe(&controller.state(), &registry);
    assert!(!panel.visible);
    assert_eq!(transition, Some(PanelTransition::Leave));
}

#[test]
fn test_presenters_are_per_node() {
    let registry = TabRegistry::default();
    let mut presenter_a = DetailPanelPresenter::new();
    let mut presenter_b = DetailPanelPresenter::new();

    let visible = NodeExpansionState {
        expanded: true,
        active_tab: Some(InspectorTab::Events),
    };
    let hidden = NodeExpansionState::default();

    let (_, t) = presenter_a.observe(&visible, &registry);
    assert_eq!(t, Some(PanelTransition::Enter));

    // Node B never showed a panel, so it reports no transition
    let (_, t) = presenter_b.observe(&hidden, &registry);
    assert_eq!(t, None);
}
