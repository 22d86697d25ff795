use bevy::prelude::*;
use bevy::render::mesh::{MeshVertexAttribute, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::VertexFormat;
use bevy::render::view::NoFrustumCulling;
use rand::Rng;

use crate::constants::scene::{FIREFLY_COUNT, FIREFLY_FIELD_HEIGHT, FIREFLY_FIELD_WIDTH};
use crate::engine::assets::portal_assets::MaterialBank;

/// Per-particle point size factor, consumed by the quad-expansion vertex
/// stage.
pub const ATTRIBUTE_PARTICLE_SCALE: MeshVertexAttribute =
    MeshVertexAttribute::new("ParticleScale", 978105241, VertexFormat::Float32);

/// Vertices emitted per particle: two triangles forming a screen-aligned
/// quad.
pub const VERTICES_PER_PARTICLE: usize = 6;

#[derive(Component)]
pub struct ParticleField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub scale: f32,
}

/// Sample the firefly distribution: positions inside a centred horizontal
/// box from ground level up, scales uniform in [0, 1]. One-time generation;
/// the field never regenerates.
pub fn generate_particles(count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            position: Vec3::new(
                rng.gen_range(-0.5..=0.5) * FIREFLY_FIELD_WIDTH,
                rng.gen_range(0.0..=FIREFLY_FIELD_HEIGHT),
                rng.gen_range(-0.5..=0.5) * FIREFLY_FIELD_WIDTH,
            ),
            scale: rng.gen_range(0.0..=1.0),
        })
        .collect()
}

/// Build the firefly mesh for GPU-side quad expansion. Each particle's
/// centre is repeated six times; the vertex stage offsets each copy to a
/// quad corner by vertex index.
pub fn create_particle_mesh(particles: &[Particle]) -> Mesh {
    let mut positions = Vec::with_capacity(particles.len() * VERTICES_PER_PARTICLE);
    let mut scales = Vec::with_capacity(particles.len() * VERTICES_PER_PARTICLE);
    for particle in particles {
        for _ in 0..VERTICES_PER_PARTICLE {
            positions.push(particle.position.to_array());
            scales.push(particle.scale);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(ATTRIBUTE_PARTICLE_SCALE, scales);
    mesh
}

pub fn spawn_particle_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    bank: Res<MaterialBank>,
) {
    let mut rng = rand::thread_rng();
    let particles = generate_particles(FIREFLY_COUNT, &mut rng);
    let mesh = create_particle_mesh(&particles);

    commands.spawn((
        Name::new("fireflies"),
        ParticleField,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(bank.fireflies.clone()),
        Transform::default(),
        // The vertex stage displaces and expands the particles, so the
        // import-time bounds are wrong for culling.
        NoFrustumCulling,
    ));

    info!("spawned {FIREFLY_COUNT} fireflies");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn field_has_exactly_the_configured_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_particles(FIREFLY_COUNT, &mut rng).len(),
            FIREFLY_COUNT
        );
    }

    #[test]
    fn particles_stay_inside_the_configured_box() {
        let mut rng = StdRng::seed_from_u64(7);
        for particle in generate_particles(512, &mut rng) {
            assert!(particle.position.x.abs() <= FIREFLY_FIELD_WIDTH * 0.5);
            assert!(particle.position.z.abs() <= FIREFLY_FIELD_WIDTH * 0.5);
            assert!((0.0..=FIREFLY_FIELD_HEIGHT).contains(&particle.position.y));
            assert!((0.0..=1.0).contains(&particle.scale));
        }
    }

    #[test]
    fn mesh_expands_six_vertices_per_particle() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate_particles(FIREFLY_COUNT, &mut rng);
        let mesh = create_particle_mesh(&particles);
        assert_eq!(
            mesh.count_vertices(),
            FIREFLY_COUNT * VERTICES_PER_PARTICLE
        );
        let scales = mesh
            .attribute(ATTRIBUTE_PARTICLE_SCALE)
            .expect("scale attribute present");
        assert_eq!(scales.len(), FIREFLY_COUNT * VERTICES_PER_PARTICLE);
    }

    #[test]
    fn quad_vertices_share_their_particle_centre() {
        let particles = vec![
            Particle {
                position: Vec3::new(1.0, 0.5, -1.0),
                scale: 0.25,
            },
            Particle {
                position: Vec3::new(-0.5, 1.0, 0.5),
                scale: 0.75,
            },
        ];
        let mesh = create_particle_mesh(&particles);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .expect("positions present");
        for (index, particle) in particles.iter().enumerate() {
            for vertex in 0..VERTICES_PER_PARTICLE {
                assert_eq!(
                    positions[index * VERTICES_PER_PARTICLE + vertex],
                    particle.position.to_array()
                );
            }
        }
    }
}
