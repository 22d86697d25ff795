use bevy::prelude::*;

use crate::constants::scene::EXPECTED_NODES;
use crate::engine::assets::portal_assets::{MaterialBank, PortalAssets};
use crate::engine::error::SceneError;
use crate::engine::loading::progress::LoadingProgress;

/// The six nodes the export must contain, resolved once after the model
/// spawns. Field order matches `EXPECTED_NODES`.
#[derive(Debug, Clone, Copy)]
pub struct PortalNodes {
    pub baked: Entity,
    pub pole_light_a: Entity,
    pub pole_light_b: Entity,
    pub portal_light: Entity,
    pub water: Entity,
    pub window_light: Entity,
}

/// Resolve every expected node name against the spawned hierarchy.
/// All-or-nothing: a partial scene is a structural mismatch, not a render
/// candidate. Names outside the expected set are ignored; for a duplicated
/// name the first occurrence wins.
pub fn resolve_nodes<'a>(
    named: impl IntoIterator<Item = (Entity, &'a str)>,
) -> Result<PortalNodes, SceneError> {
    let mut found: [Option<Entity>; 6] = [None; 6];
    for (entity, name) in named {
        if let Some(slot) = EXPECTED_NODES.iter().position(|expected| *expected == name) {
            found[slot].get_or_insert(entity);
        }
    }

    match found {
        [
            Some(baked),
            Some(pole_light_a),
            Some(pole_light_b),
            Some(portal_light),
            Some(water),
            Some(window_light),
        ] => Ok(PortalNodes {
            baked,
            pole_light_a,
            pole_light_b,
            portal_light,
            water,
            window_light,
        }),
        _ => Err(SceneError::StructuralMismatch {
            missing: EXPECTED_NODES
                .iter()
                .zip(&found)
                .filter(|(_, slot)| slot.is_none())
                .map(|(name, _)| (*name).to_string())
                .collect(),
        }),
    }
}

/// Once the spawned hierarchy is ready, resolve the expected names and swap
/// each node's imported material for the configured one. Runs to completion
/// exactly once; a missing node is fatal.
pub fn bind_scene_materials(
    mut progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    assets: Res<PortalAssets>,
    bank: Res<MaterialBank>,
    children: Query<&Children>,
    names: Query<(Entity, &Name)>,
    meshes: Query<(), With<Mesh3d>>,
    mut exit: EventWriter<AppExit>,
) {
    if progress.nodes_bound || !progress.scene_ready {
        return;
    }
    let Some(root) = assets.scene_root else {
        return;
    };

    let named: Vec<(Entity, &str)> = children
        .iter_descendants(root)
        .filter_map(|entity| names.get(entity).ok())
        .map(|(entity, name)| (entity, name.as_str()))
        .collect();

    match resolve_nodes(named) {
        Ok(nodes) => {
            assign_materials(&mut commands, &children, &meshes, &nodes, &bank);
            progress.nodes_bound = true;
            info!("bound materials to {} scene nodes", EXPECTED_NODES.len());
        }
        Err(err) => {
            error!("{err}");
            exit.write(AppExit::error());
        }
    }
}

fn assign_materials(
    commands: &mut Commands,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
    nodes: &PortalNodes,
    bank: &MaterialBank,
) {
    apply_material(commands, children, meshes, nodes.baked, &bank.baked);
    apply_material(commands, children, meshes, nodes.pole_light_a, &bank.pole_light);
    apply_material(commands, children, meshes, nodes.pole_light_b, &bank.pole_light);
    apply_material(commands, children, meshes, nodes.portal_light, &bank.portal);
    apply_material(commands, children, meshes, nodes.water, &bank.water);
    apply_material(commands, children, meshes, nodes.window_light, &bank.window_glow);
}

/// Replace the imported material on the named node's meshes. The glTF
/// importer puts `Mesh3d` on primitive child entities, so the node's whole
/// subtree is covered, not just the node itself.
fn apply_material<M: Material>(
    commands: &mut Commands,
    children: &Query<&Children>,
    meshes: &Query<(), With<Mesh3d>>,
    node: Entity,
    material: &Handle<M>,
) {
    for target in std::iter::once(node).chain(children.iter_descendants(node)) {
        if meshes.contains(target) {
            commands
                .entity(target)
                .remove::<MeshMaterial3d<StandardMaterial>>()
                .insert(MeshMaterial3d(material.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::scene::{
        NODE_BAKED, NODE_POLE_LIGHT_A, NODE_POLE_LIGHT_B, NODE_PORTAL_LIGHT, NODE_WATER,
        NODE_WINDOW_LIGHT,
    };

    fn spawn_entities(world: &mut World, count: usize) -> Vec<Entity> {
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn resolves_every_expected_name_to_its_slot() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 6);
        let named = vec![
            (entities[0], NODE_WATER),
            (entities[1], NODE_BAKED),
            (entities[2], NODE_POLE_LIGHT_B),
            (entities[3], NODE_PORTAL_LIGHT),
            (entities[4], NODE_WINDOW_LIGHT),
            (entities[5], NODE_POLE_LIGHT_A),
        ];

        let nodes = resolve_nodes(named).expect("all names present");
        assert_eq!(nodes.water, entities[0]);
        assert_eq!(nodes.baked, entities[1]);
        assert_eq!(nodes.pole_light_b, entities[2]);
        assert_eq!(nodes.portal_light, entities[3]);
        assert_eq!(nodes.window_light, entities[4]);
        assert_eq!(nodes.pole_light_a, entities[5]);
    }

    #[test]
    fn missing_names_produce_a_structural_mismatch_listing_them() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 4);
        let named = vec![
            (entities[0], NODE_BAKED),
            (entities[1], NODE_POLE_LIGHT_A),
            (entities[2], NODE_POLE_LIGHT_B),
            (entities[3], NODE_PORTAL_LIGHT),
        ];

        let err = resolve_nodes(named).expect_err("water and window missing");
        match err {
            SceneError::StructuralMismatch { missing } => {
                assert_eq!(missing, vec![NODE_WATER, NODE_WINDOW_LIGHT]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn an_empty_hierarchy_reports_every_expected_name() {
        let err = resolve_nodes(Vec::new()).expect_err("nothing resolves");
        match err {
            SceneError::StructuralMismatch { missing } => {
                assert_eq!(missing, EXPECTED_NODES.map(String::from).to_vec());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unexpected_names_are_ignored() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 7);
        let mut named: Vec<(Entity, &str)> = EXPECTED_NODES
            .iter()
            .enumerate()
            .map(|(index, name)| (entities[index], *name))
            .collect();
        named.push((entities[6], "fireflies"));

        assert!(resolve_nodes(named).is_ok());
    }

    #[test]
    fn first_occurrence_wins_for_duplicate_names() {
        let mut world = World::new();
        let entities = spawn_entities(&mut world, 7);
        let mut named: Vec<(Entity, &str)> = EXPECTED_NODES
            .iter()
            .enumerate()
            .map(|(index, name)| (entities[index], *name))
            .collect();
        named.push((entities[6], NODE_WATER));

        let nodes = resolve_nodes(named).expect("all names present");
        assert_eq!(nodes.water, entities[4]);
    }
}
