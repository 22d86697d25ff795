use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;

use crate::constants::scene::MANIFEST_PATH;
use crate::engine::assets::portal_assets::PortalAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::error::SceneError;
use crate::engine::loading::progress::LoadingProgress;

/// Spawn the model once its scene asset resolves. The spawn is the single
/// insertion of the model into the render scene; binding happens after the
/// hierarchy is ready.
pub fn spawn_scene_when_loaded(
    mut progress: ResMut<LoadingProgress>,
    mut assets: ResMut<PortalAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    if progress.scene_spawned || !progress.manifest_loaded {
        return;
    }
    if !matches!(
        asset_server.get_load_state(&assets.scene),
        Some(LoadState::Loaded)
    ) {
        return;
    }

    let root = commands
        .spawn((SceneRoot(assets.scene.clone()), Name::new("portal-model")))
        .observe(mark_scene_ready)
        .id();
    assets.scene_root = Some(root);
    progress.model_loaded = true;
    progress.scene_spawned = true;
    info!("model loaded, scene root spawned");
}

fn mark_scene_ready(
    _trigger: Trigger<SceneInstanceReady>,
    mut progress: ResMut<LoadingProgress>,
) {
    progress.scene_ready = true;
}

/// A `Failed` load state on any tracked asset is a startup fault: report the
/// path and stop, rather than presenting a partially textured scene.
pub fn watch_load_failures(
    assets: Res<PortalAssets>,
    manifests: Res<Assets<SceneManifest>>,
    asset_server: Res<AssetServer>,
    mut exit: EventWriter<AppExit>,
) {
    let failed_path = if load_failed(&asset_server, &assets.manifest) {
        Some(MANIFEST_PATH.to_string())
    } else if load_failed(&asset_server, &assets.scene) {
        manifests.get(&assets.manifest).map(|m| m.model.clone())
    } else if load_failed(&asset_server, &assets.baked_texture) {
        manifests
            .get(&assets.manifest)
            .map(|m| m.baked_texture.clone())
    } else {
        None
    };

    if let Some(path) = failed_path {
        let err = SceneError::AssetLoad { path };
        error!("{err}");
        exit.write(AppExit::error());
    }
}

fn load_failed<A: Asset>(asset_server: &AssetServer, handle: &Handle<A>) -> bool {
    matches!(
        asset_server.get_load_state(handle),
        Some(LoadState::Failed(_))
    )
}
