use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::render_settings::{FIREFLY_SIZE_MAX, FIREFLY_SIZE_MIN, PANEL_WIDTH};
use crate::engine::assets::portal_assets::MaterialBank;
use crate::engine::shaders::{
    FirefliesMaterial, PortalMaterial, WaterMaterial, WindowGlowMaterial,
};

/// Live-tunable scene parameters. The panel writes here; the sync system
/// forwards changes to the consumers that take values by copy (the clear
/// colour, the material uniform buffers).
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Tunables {
    pub clear_color: Color,
    pub firefly_size: f32,
    pub portal_color_start: Color,
    pub portal_color_end: Color,
    pub water_ripple_frequency: f32,
    pub water_ripple_speed: f32,
    pub window_glow_intensity: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            clear_color: Color::srgb_u8(0x01, 0x2c, 0x46),
            firefly_size: 200.0,
            portal_color_start: Color::BLACK,
            portal_color_end: Color::WHITE,
            water_ripple_frequency: 6.0,
            water_ripple_speed: 0.6,
            window_glow_intensity: 1.2,
        }
    }
}

/// The tweak window. Edits go into a scratch copy and are committed only on
/// an actual change, so resource change detection stays meaningful.
pub fn debug_panel_ui(mut contexts: EguiContexts, mut tunables: ResMut<Tunables>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut edited = tunables.clone();
    egui::Window::new("Tweaks")
        .default_width(PANEL_WIDTH)
        .default_open(false)
        .show(ctx, |ui| {
            ui.add(
                egui::Slider::new(&mut edited.firefly_size, FIREFLY_SIZE_MIN..=FIREFLY_SIZE_MAX)
                    .step_by(1.0)
                    .text("firefly size"),
            );
            color_row(ui, "portal start", &mut edited.portal_color_start);
            color_row(ui, "portal end", &mut edited.portal_color_end);
            color_row(ui, "background", &mut edited.clear_color);
            ui.separator();
            ui.add(
                egui::Slider::new(&mut edited.water_ripple_frequency, 1.0..=16.0)
                    .text("ripple frequency"),
            );
            ui.add(
                egui::Slider::new(&mut edited.water_ripple_speed, 0.0..=3.0).text("ripple speed"),
            );
            ui.add(
                egui::Slider::new(&mut edited.window_glow_intensity, 0.0..=4.0)
                    .text("window glow"),
            );
        });

    if edited != *tunables {
        *tunables = edited;
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, color: &mut Color) {
    let srgba = color.to_srgba();
    let mut rgb = [srgba.red, srgba.green, srgba.blue];
    ui.horizontal(|ui| {
        if ui.color_edit_button_rgb(&mut rgb).changed() {
            *color = Color::srgb(rgb[0], rgb[1], rgb[2]);
        }
        ui.label(label);
    });
}

/// Forward tunable edits to their consumers when anything changed.
pub fn sync_tunables(
    tunables: Res<Tunables>,
    bank: Res<MaterialBank>,
    mut clear_color: ResMut<ClearColor>,
    mut portal_materials: ResMut<Assets<PortalMaterial>>,
    mut water_materials: ResMut<Assets<WaterMaterial>>,
    mut window_materials: ResMut<Assets<WindowGlowMaterial>>,
    mut firefly_materials: ResMut<Assets<FirefliesMaterial>>,
) {
    if !tunables.is_changed() {
        return;
    }
    apply_tunables(
        &tunables,
        &bank,
        &mut clear_color,
        &mut portal_materials,
        &mut water_materials,
        &mut window_materials,
        &mut firefly_materials,
    );
}

/// The write path, split out so it is testable without a running app.
pub fn apply_tunables(
    tunables: &Tunables,
    bank: &MaterialBank,
    clear_color: &mut ClearColor,
    portal_materials: &mut Assets<PortalMaterial>,
    water_materials: &mut Assets<WaterMaterial>,
    window_materials: &mut Assets<WindowGlowMaterial>,
    firefly_materials: &mut Assets<FirefliesMaterial>,
) {
    // The renderer reads the clear colour by value each frame, so the edit
    // has to be re-applied to the resource rather than observed in place.
    clear_color.0 = tunables.clear_color;

    if let Some(material) = portal_materials.get_mut(&bank.portal) {
        material.color_start = tunables.portal_color_start.to_linear();
        material.color_end = tunables.portal_color_end.to_linear();
    }
    if let Some(material) = water_materials.get_mut(&bank.water) {
        material.set_ripple(tunables.water_ripple_frequency, tunables.water_ripple_speed);
    }
    if let Some(material) = window_materials.get_mut(&bank.window_glow) {
        material.set_intensity(tunables.window_glow_intensity);
    }
    if let Some(material) = firefly_materials.get_mut(&bank.fireflies) {
        material.set_size(tunables.firefly_size);
    }
}
