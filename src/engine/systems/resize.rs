use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::constants::render_settings::MAX_PIXEL_RATIO;
use crate::engine::assets::portal_assets::MaterialBank;
use crate::engine::shaders::FirefliesMaterial;

/// Camera aspect for a viewport size.
pub fn viewport_aspect(width: f32, height: f32) -> f32 {
    if height <= 0.0 { 1.0 } else { width / height }
}

/// Device pixel ratio clamped to the hidpi cap.
pub fn effective_pixel_ratio(scale_factor: f32) -> f32 {
    scale_factor.min(MAX_PIXEL_RATIO)
}

/// Keep the projection and the point-sprite density in lockstep with the
/// viewport, in the same frame as the resize event.
pub fn handle_resize(
    mut resize_events: EventReader<WindowResized>,
    mut projections: Query<&mut Projection, With<Camera3d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    bank: Res<MaterialBank>,
    mut firefly_materials: ResMut<Assets<FirefliesMaterial>>,
) {
    let Some(resized) = resize_events.read().last() else {
        return;
    };

    let aspect = viewport_aspect(resized.width, resized.height);
    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }

    write_pixel_ratio(&windows, &bank, &mut firefly_materials);
}

/// Seed the pixel-ratio uniform once at startup; resize events keep it
/// current afterwards.
pub fn init_pixel_ratio(
    windows: Query<&Window, With<PrimaryWindow>>,
    bank: Res<MaterialBank>,
    mut firefly_materials: ResMut<Assets<FirefliesMaterial>>,
) {
    write_pixel_ratio(&windows, &bank, &mut firefly_materials);
}

fn write_pixel_ratio(
    windows: &Query<&Window, With<PrimaryWindow>>,
    bank: &MaterialBank,
    firefly_materials: &mut Assets<FirefliesMaterial>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(material) = firefly_materials.get_mut(&bank.fireflies) {
        material.set_pixel_ratio(effective_pixel_ratio(window.scale_factor()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_is_exactly_width_over_height() {
        assert_eq!(viewport_aspect(1920.0, 1080.0), 1920.0 / 1080.0);
        assert_eq!(viewport_aspect(800.0, 800.0), 1.0);
    }

    #[test]
    fn degenerate_height_falls_back_to_square() {
        assert_eq!(viewport_aspect(1920.0, 0.0), 1.0);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        assert_eq!(effective_pixel_ratio(1.0), 1.0);
        assert_eq!(effective_pixel_ratio(1.5), 1.5);
        assert_eq!(effective_pixel_ratio(3.0), MAX_PIXEL_RATIO);
    }
}
