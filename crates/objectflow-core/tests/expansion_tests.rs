use objectflow_core::{
    ExpansionStore, InspectorTab, NodeExpansionController, NodeExpansionState, NodeId,
};
use proptest::prelude::*;

#[test]
fn test_fresh_node_state() {
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
fn test_expand_is_idempotent() {
    let mut once = NodeExpansionController::new();
    once.request_expand();

    let mut twice = NodeExpansionController::new();
    twice.request_expand();
    twice.request_expand();

    assert_eq!(once.state(), twice.state());
    assert_eq!(twice.active_tab(), None);
}

#[test]
fn test_expand_after_tab_selection_is_noop() {
    let mut controller = NodeExpansionController::new();
    controller.request_expand();
    controller.select_tab(InspectorTab::Events);
    // A second expand request must not reset the active tab
    controller.request_expand();
    assert_eq!(controller.active_tab(), Some(InspectorTab::Events));
}

#[test]
fn test_select_tab_is_idempotent() {
    let mut once = NodeExpansionController::new();
    once.request_expand();
    once.select_tab(InspectorTab::Sprites);

    let mut twice = NodeExpansionController::new();
    twice.request_expand();
    twice.select_tab(InspectorTab::Sprites);
    twice.select_tab(InspectorTab::Sprites);

    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_reset_law() {
    for tab in [
        InspectorTab::Events,
        InspectorTab::Sprites,
        InspectorTab::Physics,
        InspectorTab::VariableDefinitions,
    ] {
        let mut controller = NodeExpansionController::new();
        controller.request_expand();
        controller.select_tab(tab);
        controller.request_collapse();
        controller.request_expand();
        assert_eq!(
            controller.state(),
            NodeExpansionState {
                expanded: true,
                active_tab: None
            }
        );
    }
}

#[test]
fn test_expand_then_select_sprites() {
    let mut controller = NodeExpansionController::new();
    controller.request_expand();
    controller.select_tab(InspectorTab::Sprites);
    assert_eq!(
        controller.state(),
        NodeExpansionState {
            expanded: true,
            active_tab: Some(InspectorTab::Sprites)
        }
    );
}

#[test]
fn test_expand_select_events_collapse() {
    let mut controller = NodeExpansionController::new();
    controller.request_expand();
    controller.select_tab(InspectorTab::Events);
    controller.request_collapse();
    assert_eq!(
        controller.state(),
        NodeExpansionState {
            expanded: false,
            active_tab: None
        }
    );
}

#[test]
fn test_select_while_collapsed_is_noop() {
    let mut controller = NodeExpansionController::new();
    controller.select_tab(InspectorTab::Physics);
    assert_eq!(
        controller.state(),
        NodeExpansionState {
            expanded: false,
            active_tab: None
        }
    );
}

#[test]
fn test_multi_node_independence() {
    let mut store = ExpansionStore::new();
    let a = NodeId::new("Player");
    let b = NodeId::new("Enemy");

    store.controller_mut(&a).request_expand();
    store.controller_mut(&a).select_tab(InspectorTab::Events);

    assert_eq!(store.state(&b), NodeExpansionState::default());

    store.controller_mut(&b).request_expand();
    store.controller_mut(&b).select_tab(InspectorTab::Physics);
    store.controller_mut(&b).request_collapse();

    // Node A is untouched by everything done to node B
    assert_eq!(
        store.state(&a),
        NodeExpansionState {
            expanded: true,
            active_tab: Some(InspectorTab::Events)
        }
    );
    assert_eq!(store.state(&b), NodeExpansionState::default());
}

// Random transition sequences can never violate the core invariant:
// an active tab implies an expanded node.

#[derive(Debug, Clone, Copy)]
enum Op {
    Expand,
    Collapse,
    Select(InspectorTab),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Expand),
        Just(Op::Collapse),
        prop_oneof![
            Just(InspectorTab::Events),
            Just(InspectorTab::Sprites),
            Just(InspectorTab::Physics),
            Just(InspectorTab::VariableDefinitions),
        ]
        .prop_map(Op::Select),
    ]
}

proptest! {
    #[test]
    fn prop_active_tab_implies_expanded(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut controller = NodeExpansionController::new();
        for op in ops {
            match op {
                Op::Expand => controller.request_expand(),
                Op::Collapse => controller.request_collapse(),
                Op::Select(tab) => controller.select_tab(tab),
            }
            let state = controller.state();
            prop_assert!(state.active_tab.is_none() || state.expanded);
        }
    }
}
