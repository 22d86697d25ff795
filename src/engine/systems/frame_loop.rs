use bevy::prelude::*;

use crate::engine::assets::portal_assets::MaterialBank;
use crate::engine::shaders::{FirefliesMaterial, PortalMaterial, WaterMaterial};

/// Fan the elapsed clock out to every time-carrying uniform in one step, so
/// the materials never disagree about the current frame's time.
pub fn push_time_uniforms(
    time: Res<Time>,
    bank: Res<MaterialBank>,
    mut portal_materials: ResMut<Assets<PortalMaterial>>,
    mut water_materials: ResMut<Assets<WaterMaterial>>,
    mut firefly_materials: ResMut<Assets<FirefliesMaterial>>,
) {
    write_elapsed(
        time.elapsed_secs(),
        &bank,
        &mut portal_materials,
        &mut water_materials,
        &mut firefly_materials,
    );
}

pub fn write_elapsed(
    elapsed: f32,
    bank: &MaterialBank,
    portal_materials: &mut Assets<PortalMaterial>,
    water_materials: &mut Assets<WaterMaterial>,
    firefly_materials: &mut Assets<FirefliesMaterial>,
) {
    if let Some(material) = portal_materials.get_mut(&bank.portal) {
        material.set_time(elapsed);
    }
    if let Some(material) = water_materials.get_mut(&bank.water) {
        material.set_time(elapsed);
    }
    if let Some(material) = firefly_materials.get_mut(&bank.fireflies) {
        material.set_time(elapsed);
    }
}
