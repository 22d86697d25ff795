use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

use crate::constants::scene::MANIFEST_PATH;
use crate::engine::assets::portal_assets::{MaterialBank, PortalAssets};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::tools::debug_panel::Tunables;

/// Kick off the manifest load. Everything else hangs off its contents.
pub fn start_loading(mut assets: ResMut<PortalAssets>, asset_server: Res<AssetServer>) {
    assets.manifest = asset_server.load(MANIFEST_PATH);
}

/// Once the manifest resolves: start the model and texture loads, finish the
/// material bank, and seed the tunables with the configured defaults.
pub fn manifest_ready(
    mut progress: ResMut<LoadingProgress>,
    mut assets: ResMut<PortalAssets>,
    mut bank: ResMut<MaterialBank>,
    mut tunables: ResMut<Tunables>,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if progress.manifest_loaded {
        return;
    }
    let Some(manifest) = manifests.get(&assets.manifest) else {
        return;
    };

    info!("manifest loaded, starting asset loads");

    // Baked lighting must be sampled in sRGB to match the export's UV
    // orientation and colour space.
    assets.baked_texture = asset_server.load_with_settings(
        manifest.baked_texture.clone(),
        |settings: &mut ImageLoaderSettings| settings.is_srgb = true,
    );
    assets.scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(manifest.model.clone()));

    bank.baked = standard_materials.add(StandardMaterial {
        base_color_texture: Some(assets.baked_texture.clone()),
        unlit: true,
        ..default()
    });

    tunables.clear_color = manifest.clear_color();
    tunables.portal_color_start = manifest.portal_color_start();
    tunables.portal_color_end = manifest.portal_color_end();
    tunables.firefly_size = manifest.firefly_size;

    progress.manifest_loaded = true;
}
