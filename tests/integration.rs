//! End-to-end tests: goal text through generation, layout, editing, and
//! export.
mod common;
use appflow::export;
use appflow::layout::layout;
use appflow::prelude::*;
use common::*;

#[test]
fn todo_app_end_to_end_with_the_service_disabled() {
    let pipeline = GenerationPipeline::for_architectures(StubService::Down);
    let arch =
        tokio_test::block_on(pipeline.generate("Build a todo app with login and dashboard"))
            .expect("non-empty goal");

    // Expected screen categories are present.
    let has = |t: ScreenType| arch.screens.iter().any(|s| s.screen_type == t);
    assert!(has(ScreenType::Login));
    assert!(has(ScreenType::Dashboard));
    assert!(has(ScreenType::List));
    assert!(has(ScreenType::Form));

    // A transition path auth -> dashboard -> list -> form exists.
    let edge = |from: &str, to: &str| arch.transitions.iter().any(|t| t.from == from && t.to == to);
    assert!(edge("login", "dashboard"));
    assert!(edge("dashboard", "task_list"));
    assert!(edge("task_list", "task_form"));

    // Layout places auth before the dashboard on the x-axis.
    let diagram = layout(&arch);
    let login_x = diagram.node("login").unwrap().position.x;
    let dashboard_x = diagram.node("dashboard").unwrap().position.x;
    assert!(login_x < dashboard_x);

    // The exported payload round-trips to an equal architecture.
    let payload = export::architecture_to_json(&arch).unwrap();
    let decoded = export::architecture_from_json(&payload).unwrap();
    assert_eq!(decoded, arch);
}

#[test]
fn generated_diagram_survives_an_editing_session() {
    let arch = FallbackGenerator::generate("an online store");
    let mut editor = DiagramEditor::from_diagram(layout(&arch));
    let initial = editor.diagram();

    editor.select("cart");
    editor.select("checkout");
    editor.align(AlignDirection::Left);
    editor.clear_selection();
    editor.duplicate("product_detail");
    editor.connect("home", "checkout");

    for _ in 0..3 {
        editor.undo();
    }
    assert_eq!(editor.diagram(), initial);
}

#[test]
fn repaired_service_output_lays_out_and_exports() {
    let pipeline = GenerationPipeline::for_architectures(StubService::Replies(MESSY_RESPONSE));
    let arch = tokio_test::block_on(pipeline.generate("a notes app")).unwrap();
    arch.validate().unwrap();

    let diagram = layout(&arch);
    assert_eq!(diagram.nodes.len(), arch.screens.len() + 1);

    let interchange = export::diagram_to_json(&diagram).unwrap();
    let decoded = export::diagram_from_json(&interchange).unwrap();
    assert_eq!(decoded, diagram);
}

#[test]
fn edited_positions_round_trip_through_the_export() {
    let mut arch = FallbackGenerator::generate("todo tracker");
    let mut editor = DiagramEditor::from_diagram(layout(&arch));
    editor.move_node("dashboard", Position::new(640.0, 480.0));
    editor.end_drag();
    editor.write_back(&mut arch);

    let payload = export::architecture_to_json(&arch).unwrap();
    let decoded = export::architecture_from_json(&payload).unwrap();
    assert_eq!(
        decoded.screen("dashboard").unwrap().position,
        Some(Position::new(640.0, 480.0))
    );
}
