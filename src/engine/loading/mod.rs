//! Asset loading and initialisation systems for the portal scene.
//!
//! Manages the multi-stage loading pipeline from manifest parsing through
//! model spawning with progress tracking.

/// Scene manifest loading and material bank completion.
///
/// Initiates model and texture loading after manifest parsing.
pub mod manifest_loader;

/// Model load polling, scene spawning, and load-failure surfacing.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
