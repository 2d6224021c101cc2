use glam::IVec3;

use crate::entity::Entity;
use crate::grid::{VoxelGrid, VoxelWorld};
use crate::types::{Aabb, Block, WorldId};

/// Immutable world state handed to a single trace.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    pub id: WorldId,
    pub grid: VoxelGrid,
    pub entities: Vec<Entity>,
}

impl WorldSnapshot {
    pub fn new(id: WorldId, grid: VoxelGrid, entities: Vec<Entity>) -> Self {
        Self { id, grid, entities }
    }
}

impl VoxelWorld for WorldSnapshot {
    fn id(&self) -> WorldId {
        self.id
    }

    fn block_at(&self, cell: IVec3) -> Block {
        Block::new(cell, self.grid.material_at(cell))
    }

    fn entities_near(&self, region: &Aabb) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| region.contains(e.location.position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::entity::{EntityId, EntityKind};
    use crate::types::{Location, MapInfo, Material};

    #[test]
    fn block_at_reports_coordinates() {
        let mut grid = VoxelGrid::filled(MapInfo::cube(4, IVec3::ZERO), Material::Air)
            .expect("grid should build");
        grid.set(IVec3::new(1, 2, 3), Material::Bedrock).unwrap();
        let world = WorldSnapshot::new(WorldId(0), grid, Vec::new());
        assert_eq!(
            world.block_at(IVec3::new(1, 2, 3)),
            Block::new(IVec3::new(1, 2, 3), Material::Bedrock)
        );
        assert!(world.block_at(IVec3::new(-5, 0, 0)).is_air());
    }

    #[test]
    fn entities_near_filters_by_region() {
        let world_id = WorldId(0);
        let near = Entity::new(
            EntityId(1),
            EntityKind::Pig,
            Location::new(world_id, 1.0, 0.0, 1.0),
        );
        let far = Entity::new(
            EntityId(2),
            EntityKind::Pig,
            Location::new(world_id, 50.0, 0.0, 1.0),
        );
        let world = WorldSnapshot::new(
            world_id,
            VoxelGrid::filled(MapInfo::default(), Material::Air).expect("grid should build"),
            vec![near, far],
        );
        let region = Aabb::new(DVec3::ZERO, DVec3::splat(2.0));
        let found = world.entities_near(&region);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, EntityId(1));
    }
}
