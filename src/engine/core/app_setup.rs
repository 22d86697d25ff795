use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::engine::assets::portal_assets::{PortalAssets, build_material_bank};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_camera::{camera_controller, spawn_camera};
use crate::engine::core::app_state::{AppState, transition_to_binding, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{manifest_ready, start_loading};
use crate::engine::loading::model_loader::{spawn_scene_when_loaded, watch_load_failures};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::mesh::particle_field::spawn_particle_field;
use crate::engine::scene::mesh_binder::bind_scene_materials;
use crate::engine::shaders::{
    FirefliesMaterial, PortalMaterial, WaterMaterial, WindowGlowMaterial,
};
use crate::engine::systems::fps_overlay::{fps_text_update_system, spawn_fps_overlay};
use crate::engine::systems::frame_loop::push_time_uniforms;
use crate::engine::systems::resize::{handle_resize, init_pixel_ratio};
use crate::tools::debug_panel::{Tunables, debug_panel_ui, sync_tunables};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(EguiPlugin::default())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(MaterialPlugin::<PortalMaterial>::default())
        .add_plugins(MaterialPlugin::<WaterMaterial>::default())
        .add_plugins(MaterialPlugin::<WindowGlowMaterial>::default())
        .add_plugins(MaterialPlugin::<FirefliesMaterial>::default());

    app.init_state::<AppState>()
        .init_resource::<LoadingProgress>()
        .init_resource::<PortalAssets>()
        .init_resource::<Tunables>()
        .insert_resource(ClearColor(Tunables::default().clear_color));

    app.add_systems(
        Startup,
        (
            spawn_camera,
            spawn_fps_overlay,
            (build_material_bank, spawn_particle_field, init_pixel_ratio).chain(),
            start_loading,
        ),
    );

    // Loading pipeline, state-gated so the run loop never waits on it.
    app.add_systems(
        Update,
        (manifest_ready, spawn_scene_when_loaded, transition_to_binding)
            .chain()
            .run_if(in_state(AppState::Loading)),
    )
    .add_systems(
        Update,
        (bind_scene_materials, transition_to_running)
            .chain()
            .run_if(in_state(AppState::Binding)),
    );

    // Run-loop systems are unconditional: rendering, camera damping, and the
    // panel do not depend on the model having arrived.
    app.add_systems(
        Update,
        (
            watch_load_failures,
            push_time_uniforms,
            sync_tunables,
            camera_controller,
            handle_resize,
            fps_text_update_system,
        ),
    )
    .add_systems(EguiPrimaryContextPass, debug_panel_ui);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
