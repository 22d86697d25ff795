//! Camera, viewport, and tweak-panel configuration.

use std::f32::consts::PI;

/// Device pixel ratio is capped so point sprites stay a sane size on
/// hidpi displays.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

/// Initial eye position, looking at the origin.
pub const CAMERA_START: [f32; 3] = [4.0, 2.0, 4.0];

pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 10.0;

/// Polar limit, measured from the vertical axis. Keeps the orbit from
/// dipping below the model's floor plane.
pub const ORBIT_MAX_POLAR: f32 = PI * 0.4;

/// Rate for the orbit smoothing lerp, per second.
pub const ORBIT_DAMPING: f32 = 12.0;

pub const FIREFLY_SIZE_MIN: f32 = 20.0;
pub const FIREFLY_SIZE_MAX: f32 = 500.0;

pub const PANEL_WIDTH: f32 = 300.0;
