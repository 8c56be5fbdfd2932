//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Zeichenflächen-Events werden 1:1 weitergereicht; ob eine Bewegung etwas
/// verschiebt, entscheidet die Selektion selbst.
pub fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::HandlePicked { handle } => vec![AppCommand::PickHandle { handle }],
        AppIntent::PointerMoved { world_pos } => vec![AppCommand::DragActivePoint { world_pos }],
        AppIntent::PointerReleased => vec![AppCommand::ReleaseSelection],
        AppIntent::SelectionCancelled => vec![AppCommand::CancelSelection],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ToggleControlPolygonRequested => vec![AppCommand::ToggleControlPolygon],
        AppIntent::ToggleTangentsRequested => vec![AppCommand::ToggleTangents],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

#[cfg(test)]
mod tests;
