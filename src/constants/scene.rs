//! Names and dimensions baked into the portal scene export.

/// Manifest describing the scene's asset paths and initial tunables.
pub const MANIFEST_PATH: &str = "portal/manifest.json";

pub const NODE_BAKED: &str = "baked";
pub const NODE_POLE_LIGHT_A: &str = "poleLightA";
pub const NODE_POLE_LIGHT_B: &str = "poleLightB";
pub const NODE_PORTAL_LIGHT: &str = "portalLight";
pub const NODE_WATER: &str = "water";
pub const NODE_WINDOW_LIGHT: &str = "windowLight";

/// Every node name the binder must resolve after the model spawns.
/// Order matches the slot order in `PortalNodes`.
pub const EXPECTED_NODES: [&str; 6] = [
    NODE_BAKED,
    NODE_POLE_LIGHT_A,
    NODE_POLE_LIGHT_B,
    NODE_PORTAL_LIGHT,
    NODE_WATER,
    NODE_WINDOW_LIGHT,
];

/// Firefly particles generated at startup.
pub const FIREFLY_COUNT: usize = 20;

/// Horizontal extent of the firefly box, centred on the origin.
pub const FIREFLY_FIELD_WIDTH: f32 = 4.0;

/// Fireflies spawn between ground level and this height.
pub const FIREFLY_FIELD_HEIGHT: f32 = 1.5;
