use bevy::prelude::*;

/// Load pipeline checkpoints, flipped in order by the loading systems.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub model_loaded: bool,
    pub scene_spawned: bool,
    pub scene_ready: bool,
    pub nodes_bound: bool,
}
