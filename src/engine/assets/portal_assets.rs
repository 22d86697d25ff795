use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::shaders::{
    FirefliesMaterial, PortalMaterial, WaterMaterial, WindowGlowMaterial,
};

/// Handles for everything the loader resolves, placeholder-initialised and
/// filled in as loading advances.
#[derive(Resource, Default)]
pub struct PortalAssets {
    pub manifest: Handle<SceneManifest>,
    pub scene: Handle<Scene>,
    pub baked_texture: Handle<Image>,
    /// Root entity of the spawned model, set once the scene asset resolves.
    pub scene_root: Option<Entity>,
}

/// One handle per material the scene uses. Uniform edits go through these
/// handles so the renderer observes them on the next frame without
/// re-assignment.
#[derive(Resource)]
pub struct MaterialBank {
    pub baked: Handle<StandardMaterial>,
    pub pole_light: Handle<StandardMaterial>,
    pub portal: Handle<PortalMaterial>,
    pub water: Handle<WaterMaterial>,
    pub window_glow: Handle<WindowGlowMaterial>,
    pub fireflies: Handle<FirefliesMaterial>,
}

/// Build every material that does not depend on a loaded asset. The baked
/// material needs the texture path from the manifest and is filled in when
/// the manifest resolves.
pub fn build_material_bank(
    mut commands: Commands,
    mut standard_materials: ResMut<Assets<StandardMaterial>>,
    mut portal_materials: ResMut<Assets<PortalMaterial>>,
    mut water_materials: ResMut<Assets<WaterMaterial>>,
    mut window_materials: ResMut<Assets<WindowGlowMaterial>>,
    mut firefly_materials: ResMut<Assets<FirefliesMaterial>>,
) {
    let pole_light = standard_materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xab, 0xda, 0xff),
        unlit: true,
        ..default()
    });

    commands.insert_resource(MaterialBank {
        baked: Handle::default(),
        pole_light,
        portal: portal_materials.add(PortalMaterial::default()),
        water: water_materials.add(WaterMaterial::default()),
        window_glow: window_materials.add(WindowGlowMaterial::default()),
        fireflies: firefly_materials.add(FirefliesMaterial::default()),
    });
}
