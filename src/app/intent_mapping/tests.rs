use crate::app::{AppCommand, AppIntent};
use catmull_rom_engine::HandleId;
use glam::Vec2;

use super::map_intent_to_commands;

#[test]
fn handle_picked_maps_to_pick_handle() {
    let handle = HandleId::new(3);

    let commands = map_intent_to_commands(AppIntent::HandlePicked { handle });

    assert_eq!(commands, vec![AppCommand::PickHandle { handle }]);
}

#[test]
fn pointer_moved_keeps_world_position() {
    let commands = map_intent_to_commands(AppIntent::PointerMoved {
        world_pos: Vec2::new(5.0, 5.0),
    });

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::DragActivePoint { world_pos } if world_pos == Vec2::new(5.0, 5.0)
    ));
}

#[test]
fn release_and_cancel_map_to_distinct_commands() {
    assert_eq!(
        map_intent_to_commands(AppIntent::PointerReleased),
        vec![AppCommand::ReleaseSelection]
    );
    assert_eq!(
        map_intent_to_commands(AppIntent::SelectionCancelled),
        vec![AppCommand::CancelSelection]
    );
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let commands = map_intent_to_commands(AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}

#[test]
fn viewport_resized_maps_to_set_viewport_size() {
    let commands = map_intent_to_commands(AppIntent::ViewportResized {
        size: [800.0, 600.0],
    });

    assert_eq!(
        commands,
        vec![AppCommand::SetViewportSize {
            size: [800.0, 600.0]
        }]
    );
}
