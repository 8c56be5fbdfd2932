use catmull_rom_editor::{AppCommand, AppController, AppIntent, AppState, EditorOptions};
use catmull_rom_editor::{ControlPointIndex, HandleId, SelectionState};
use glam::Vec2;

fn make_state() -> AppState {
    let mut state =
        AppState::new(EditorOptions::default()).expect("Standard-Optionen sollten gültig sein");
    state.view.viewport_size = [1280.0, 720.0];
    state
}

fn handle_of(state: &AppState, index: usize) -> HandleId {
    let index = ControlPointIndex::new(index).expect("Index 0..=3");
    state
        .session
        .selection()
        .handle_for(index)
        .expect("Jeder Kontrollpunkt hat ein Handle")
}

#[test]
fn test_pick_drag_release_moves_control_point() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let handle = handle_of(&state, 2);
    let curve_before = state.canvas.curve();

    controller
        .handle_intent(&mut state, AppIntent::HandlePicked { handle })
        .expect("HandlePicked sollte ohne Fehler durchlaufen");
    assert_eq!(
        state.session.selection().state(),
        SelectionState::Active(ControlPointIndex::ALL[2])
    );
    assert_eq!(state.canvas.highlighted(), Some(ControlPointIndex::ALL[2]));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(5.0, 5.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.session.curve().control_point(2).unwrap(),
        Some(Vec2::new(5.0, 5.0))
    );
    assert_eq!(
        state
            .canvas
            .handle(ControlPointIndex::ALL[2])
            .map(|h| h.center),
        Some(Vec2::new(5.0, 5.0))
    );
    assert_eq!(state.canvas.control_polygon()[2], Vec2::new(5.0, 5.0));
    assert_ne!(state.canvas.curve(), curve_before);
    assert_eq!(state.session.selection().state(), SelectionState::Idle);
    assert_eq!(state.canvas.highlighted(), None);

    assert_eq!(
        state.command_log.entries(),
        &[
            AppCommand::PickHandle { handle },
            AppCommand::DragActivePoint {
                world_pos: Vec2::new(5.0, 5.0)
            },
            AppCommand::ReleaseSelection,
        ]
    );
}

#[test]
fn test_pick_unknown_handle_keeps_selection_idle() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::HandlePicked {
                handle: HandleId::new(9999),
            },
        )
        .expect("Unbekanntes Handle ist kein Fehler");

    assert_eq!(state.session.selection().state(), SelectionState::Idle);
    assert_eq!(state.command_log.len(), 1);
}

#[test]
fn test_pointer_moved_while_idle_changes_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let points_before = state.session.curve().control_points();
    let revision_before = state.session.curve().revision();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(1.0, 1.0),
            },
        )
        .expect("Bewegung ohne Auswahl ist kein Fehler");

    assert_eq!(state.session.curve().control_points(), points_before);
    assert_eq!(state.session.curve().revision(), revision_before);
}

#[test]
fn test_selection_cancelled_stops_further_drags() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let handle = handle_of(&state, 0);

    controller
        .handle_intent(&mut state, AppIntent::HandlePicked { handle })
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::SelectionCancelled)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                world_pos: Vec2::new(8.0, 8.0),
            },
        )
        .unwrap();

    assert_eq!(state.session.selection().state(), SelectionState::Idle);
    assert_eq!(
        state.session.curve().control_point(0).unwrap(),
        Some(Vec2::new(0.01, 3.1))
    );
}

#[test]
fn test_repeated_drags_only_keep_last_position() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let handle = handle_of(&state, 1);

    controller
        .handle_intent(&mut state, AppIntent::HandlePicked { handle })
        .unwrap();
    for x in [4.5_f32, 5.0, 5.5] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PointerMoved {
                    world_pos: Vec2::new(x, 1.0),
                },
            )
            .unwrap();
    }

    assert_eq!(
        state.session.curve().control_point(1).unwrap(),
        Some(Vec2::new(5.5, 1.0))
    );
    assert!(state.session.selection().is_active());
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = make_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    match state.command_log.last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_toggle_intents_flip_options() {
    let mut controller = AppController::new();
    let mut state = make_state();
    let polygon_before = state.options.show_control_polygon;
    let tangents_before = state.options.show_tangents;

    controller
        .handle_intent(&mut state, AppIntent::ToggleControlPolygonRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ToggleTangentsRequested)
        .unwrap();

    assert_eq!(state.options.show_control_polygon, !polygon_before);
    assert_eq!(state.options.show_tangents, !tangents_before);

    let scene = controller.build_render_scene(&state, state.view.viewport_size);
    assert_eq!(scene.tangents.len(), 2);
    assert!(scene.control_polygon.is_empty());
}

#[test]
fn test_viewport_resized_updates_view_state() {
    let mut controller = AppController::new();
    let mut state = make_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [640.0, 480.0],
            },
        )
        .unwrap();

    assert_eq!(state.view.viewport_size, [640.0, 480.0]);
}

#[test]
fn test_saved_options_round_trip_through_file() {
    let mut state = make_state();
    state.options.show_tangents = true;
    let path = std::env::temp_dir().join(format!(
        "catmull_rom_editor_test_{}.toml",
        std::process::id()
    ));

    catmull_rom_editor::app::handlers::dialog::save_options_to(&state, &path)
        .expect("Speichern in temp_dir sollte klappen");
    let loaded = EditorOptions::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, state.options);
}
