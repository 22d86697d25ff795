//! Shader materials for the portal scene.
//!
//! Each material owns its uniforms; frame-loop and panel systems mutate them
//! through `Assets::get_mut`, which re-uploads the uniform buffer on the next
//! frame.

use bevy::pbr::{Material, MaterialPipeline, MaterialPipelineKey};
use bevy::prelude::*;
use bevy::render::mesh::MeshVertexBufferLayoutRef;
use bevy::render::render_resource::{
    AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
};

use crate::engine::mesh::particle_field::ATTRIBUTE_PARTICLE_SCALE;

/// Portal surface: animated noise ramp between two live-tunable colours.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct PortalMaterial {
    /// x: elapsed seconds. Remaining lanes unused.
    #[uniform(0)]
    pub params: Vec4,
    #[uniform(1)]
    pub color_start: LinearRgba,
    #[uniform(2)]
    pub color_end: LinearRgba,
}

impl Default for PortalMaterial {
    fn default() -> Self {
        Self {
            params: Vec4::ZERO,
            color_start: LinearRgba::BLACK,
            color_end: LinearRgba::WHITE,
        }
    }
}

impl PortalMaterial {
    pub fn set_time(&mut self, seconds: f32) {
        self.params.x = seconds;
    }

    pub fn time(&self) -> f32 {
        self.params.x
    }
}

impl Material for PortalMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/portal.wgsl".into()
    }
}

/// Pool surface: crossed sine ripples between two depth colours.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct WaterMaterial {
    /// x: elapsed seconds, y: ripple frequency, z: ripple speed.
    #[uniform(0)]
    pub params: Vec4,
    #[uniform(1)]
    pub color_deep: LinearRgba,
    #[uniform(2)]
    pub color_surface: LinearRgba,
}

impl Default for WaterMaterial {
    fn default() -> Self {
        Self {
            params: Vec4::new(0.0, 6.0, 0.6, 0.0),
            color_deep: LinearRgba::rgb(0.012, 0.09, 0.16),
            color_surface: LinearRgba::rgb(0.21, 0.52, 0.67),
        }
    }
}

impl WaterMaterial {
    pub fn set_time(&mut self, seconds: f32) {
        self.params.x = seconds;
    }

    pub fn set_ripple(&mut self, frequency: f32, speed: f32) {
        self.params.y = frequency;
        self.params.z = speed;
    }

    pub fn time(&self) -> f32 {
        self.params.x
    }
}

impl Material for WaterMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/water.wgsl".into()
    }
}

/// Window light: warm emissive falloff. Not animated.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct WindowGlowMaterial {
    /// x: glow intensity. Remaining lanes unused.
    #[uniform(0)]
    pub params: Vec4,
    #[uniform(1)]
    pub color: LinearRgba,
}

impl Default for WindowGlowMaterial {
    fn default() -> Self {
        Self {
            params: Vec4::new(1.2, 0.0, 0.0, 0.0),
            color: LinearRgba::rgb(1.0, 0.88, 0.72),
        }
    }
}

impl WindowGlowMaterial {
    pub fn set_intensity(&mut self, intensity: f32) {
        self.params.x = intensity;
    }

    pub fn intensity(&self) -> f32 {
        self.params.x
    }
}

impl Material for WindowGlowMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/window_glow.wgsl".into()
    }
}

/// Firefly points, expanded to screen-aligned quads in the vertex stage.
/// Additive, depth-read-only, so overlapping sprites sum instead of sorting.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct FirefliesMaterial {
    /// x: elapsed seconds, y: device pixel ratio (capped), z: point size.
    #[uniform(0)]
    pub params: Vec4,
}

impl Default for FirefliesMaterial {
    fn default() -> Self {
        Self {
            params: Vec4::new(0.0, 1.0, 200.0, 0.0),
        }
    }
}

impl FirefliesMaterial {
    pub fn set_time(&mut self, seconds: f32) {
        self.params.x = seconds;
    }

    pub fn set_pixel_ratio(&mut self, ratio: f32) {
        self.params.y = ratio;
    }

    pub fn set_size(&mut self, size: f32) {
        self.params.z = size;
    }

    pub fn time(&self) -> f32 {
        self.params.x
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.params.y
    }

    pub fn size(&self) -> f32 {
        self.params.z
    }
}

impl Material for FirefliesMaterial {
    fn vertex_shader() -> ShaderRef {
        "shaders/fireflies.wgsl".into()
    }

    fn fragment_shader() -> ShaderRef {
        "shaders/fireflies.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            ATTRIBUTE_PARTICLE_SCALE.at_shader_location(1),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_setters_leave_other_lanes_alone() {
        let mut fireflies = FirefliesMaterial::default();
        fireflies.set_pixel_ratio(2.0);
        fireflies.set_size(350.0);
        fireflies.set_time(4.2);
        assert_eq!(fireflies.time(), 4.2);
        assert_eq!(fireflies.pixel_ratio(), 2.0);
        assert_eq!(fireflies.size(), 350.0);

        let mut water = WaterMaterial::default();
        water.set_ripple(9.0, 1.5);
        water.set_time(4.2);
        assert_eq!(water.time(), 4.2);
        assert_eq!(water.params.y, 9.0);
        assert_eq!(water.params.z, 1.5);
    }

    #[test]
    fn portal_defaults_to_a_black_to_white_ramp() {
        let portal = PortalMaterial::default();
        assert_eq!(portal.color_start, LinearRgba::BLACK);
        assert_eq!(portal.color_end, LinearRgba::WHITE);
        assert_eq!(portal.time(), 0.0);
    }
}
