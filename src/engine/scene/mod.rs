/// Post-load node resolution and material assignment.
pub mod mesh_binder;
