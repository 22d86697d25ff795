/// Orbit rig resource and the damped pointer/wheel controller.
pub mod orbit_camera;
