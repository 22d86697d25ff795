use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Manifest and asset loads are in flight.
    #[default]
    Loading,
    /// The model spawned; named nodes still carry their imported materials.
    Binding,
    Running,
}

pub fn transition_to_binding(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.scene_spawned {
        info!("model spawned, binding materials");
        next_state.set(AppState::Binding);
    }
}

pub fn transition_to_running(
    progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.nodes_bound {
        info!("scene bound, entering run loop");
        next_state.set(AppState::Running);
    }
}
