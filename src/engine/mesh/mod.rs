/// Firefly particle generation and quad-expansion mesh construction.
pub mod particle_field;
