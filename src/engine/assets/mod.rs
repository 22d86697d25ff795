//! Asset handles and scene configuration.

/// Handle registry and the material bank.
pub mod portal_assets;

/// JSON scene manifest: asset paths and initial tunable values.
pub mod scene_manifest;
