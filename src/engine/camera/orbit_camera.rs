use std::f32::consts::FRAC_PI_2;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START, ORBIT_DAMPING, ORBIT_MAX_DISTANCE,
    ORBIT_MAX_POLAR, ORBIT_MIN_DISTANCE,
};

/// Orbit rig state: spherical coordinates around a focus point.
#[derive(Resource)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    /// Elevation above the horizon plane, limited by the polar cap.
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitCamera {
    /// Rig looking at `focus` from `eye`.
    pub fn from_position(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
        }
    }

    /// Eye offset from the focus for the current spherical state.
    pub fn offset(&self) -> Vec3 {
        Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        ) * self.distance
    }

    /// Lowest allowed elevation, derived from the polar cap.
    pub fn min_pitch() -> f32 {
        FRAC_PI_2 - ORBIT_MAX_POLAR
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let [x, y, z] = CAMERA_START;
        Self::from_position(Vec3::new(x, y, z), Vec3::ZERO)
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let rig = OrbitCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        // The scene is baked-lit; tonemapping would tint the colour ramps.
        Tonemapping::None,
        Transform::from_translation(rig.focus + rig.offset()).looking_at(rig.focus, Vec3::Y),
    ));
    commands.insert_resource(rig);
}

/// Pointer-drag orbit with wheel zoom, eased toward the target pose each
/// frame.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rig: ResMut<OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        rig.yaw -= mouse_delta.x * 0.005;
        rig.pitch = (rig.pitch + mouse_delta.y * 0.005)
            .clamp(OrbitCamera::min_pitch(), FRAC_PI_2 - 0.01);
    }

    // Line and pixel scroll units arrive from different pointer devices.
    let mut scroll_accum = 0.0;
    for event in scroll_events.read() {
        scroll_accum += match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        rig.distance = (rig.distance * (1.0 - scroll_accum * 0.1))
            .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    let target =
        Transform::from_translation(rig.focus + rig.offset()).looking_at(rig.focus, Vec3::Y);
    let ease = (ORBIT_DAMPING * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target.translation, ease);
    camera_transform.rotation = camera_transform.rotation.slerp(target.rotation, ease);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn from_position_round_trips_through_offset() {
        let eye = Vec3::new(4.0, 2.0, 4.0);
        let rig = OrbitCamera::from_position(eye, Vec3::ZERO);
        let recovered = rig.focus + rig.offset();
        assert!((recovered - eye).length() < EPSILON);
    }

    #[test]
    fn default_rig_matches_the_configured_start() {
        let rig = OrbitCamera::default();
        let [x, y, z] = CAMERA_START;
        assert!((rig.distance - Vec3::new(x, y, z).length()).abs() < EPSILON);
        assert_eq!(rig.focus, Vec3::ZERO);
    }

    #[test]
    fn polar_cap_keeps_the_rig_above_the_floor() {
        // 0.4 pi from the vertical axis leaves 0.1 pi of elevation.
        let min_pitch = OrbitCamera::min_pitch();
        assert!((min_pitch - std::f32::consts::PI * 0.1).abs() < EPSILON);
        assert!(min_pitch > 0.0);
    }
}
