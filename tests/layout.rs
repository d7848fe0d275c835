//! Tests for the stage-based layout heuristic.
//!
//! The heuristic produces *a* legible, deterministic layout for the expected
//! screen-type vocabulary; it makes no optimality claims for arbitrary
//! graphs.
mod common;
use appflow::layout::layout;
use appflow::prelude::*;
use common::*;

#[test]
fn layout_is_deterministic() {
    let arch = FallbackGenerator::generate_at("Build a todo app with login", 1);
    let first = layout(&arch);
    let second = layout(&arch);
    assert_eq!(first, second);
}

#[test]
fn every_screen_gets_a_node_plus_one_start_node() {
    let arch = sample_architecture();
    let diagram = layout(&arch);
    assert_eq!(diagram.nodes.len(), arch.screens.len() + 1);
    assert!(diagram.node(START_NODE_ID).is_some());
    for screen in &arch.screens {
        assert!(diagram.node(&screen.id).is_some(), "missing {}", screen.id);
    }
}

#[test]
fn auth_is_placed_left_of_the_dashboard() {
    let arch = sample_architecture();
    let diagram = layout(&arch);
    let login_x = diagram.node("login").unwrap().position.x;
    let dashboard_x = diagram.node("dashboard").unwrap().position.x;
    let items_x = diagram.node("items").unwrap().position.x;
    assert!(login_x < dashboard_x);
    assert!(dashboard_x < items_x);
}

#[test]
fn start_node_precedes_everything() {
    let arch = sample_architecture();
    let diagram = layout(&arch);
    let start_x = diagram.node(START_NODE_ID).unwrap().position.x;
    for node in &diagram.nodes {
        if node.id != START_NODE_ID {
            assert!(start_x < node.position.x);
        }
    }
}

#[test]
fn start_node_connects_to_the_first_reachable_screen() {
    let arch = sample_architecture();
    let diagram = layout(&arch);
    let start_edge = diagram
        .edges
        .iter()
        .find(|e| e.source == START_NODE_ID)
        .expect("start edge");
    assert_eq!(start_edge.target, "login");
}

#[test]
fn backward_transitions_are_not_drawn() {
    let mut arch = sample_architecture();
    arch.transitions.push(
        Transition::new("back", "item_form", "dashboard", TransitionTrigger::Navigation)
            .with_description("Return to dashboard"),
    );
    let diagram = layout(&arch);
    assert!(
        !diagram
            .edges
            .iter()
            .any(|e| e.source == "item_form" && e.target == "dashboard")
    );
}

#[test]
fn self_loops_are_not_drawn() {
    let mut arch = sample_architecture();
    arch.transitions.push(Transition::new(
        "loop",
        "items",
        "items",
        TransitionTrigger::UserAction,
    ));
    let diagram = layout(&arch);
    assert!(!diagram.edges.iter().any(|e| e.source == e.target));
}

#[test]
fn screens_sharing_a_stage_fan_out_vertically() {
    let arch = Architecture::new(
        "fan",
        "Fan",
        vec![
            Screen::new("login", "Log In", ScreenType::Login),
            Screen::new("signup", "Sign Up", ScreenType::Signup),
            Screen::new("home", "Home", ScreenType::Home),
        ],
        vec![
            Transition::new("t1", "login", "home", TransitionTrigger::ApiSuccess),
            Transition::new("t2", "signup", "home", TransitionTrigger::ApiSuccess),
        ],
    );
    let diagram = layout(&arch);
    let login = diagram.node("login").unwrap().position;
    let signup = diagram.node("signup").unwrap().position;
    assert_eq!(login.x, signup.x);
    assert_ne!(login.y, signup.y);
}

#[test]
fn edge_labels_come_from_the_stage_pair_not_the_description() {
    let arch = sample_architecture();
    let diagram = layout(&arch);
    let edge = diagram
        .edges
        .iter()
        .find(|e| e.source == "dashboard" && e.target == "items")
        .expect("hub -> primary edge");
    assert_eq!(edge.label.as_deref(), Some("browse"));
}

#[test]
fn detail_screens_sit_on_the_secondary_row() {
    let arch = Architecture::new(
        "rows",
        "Rows",
        vec![
            Screen::new("items", "Items", ScreenType::List),
            Screen::new("detail", "Detail", ScreenType::Detail),
        ],
        vec![Transition::new(
            "t1",
            "items",
            "detail",
            TransitionTrigger::UserAction,
        )],
    );
    let diagram = layout(&arch);
    let items_y = diagram.node("items").unwrap().position.y;
    let detail_y = diagram.node("detail").unwrap().position.y;
    // Both are alone in their stage; the detail screen is dropped below the
    // main stage line so it does not visually cross it.
    assert!(detail_y > items_y);
}
