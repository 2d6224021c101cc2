use std::collections::HashSet;
use std::path::Path;

use glam::{DVec3, IVec3, UVec3};
use serde::Deserialize;

use crate::entity::{Entity, EntityId, EntityKind};
use crate::grid::{VoxelGrid, WorldSnapshot};
use crate::types::{Location, MapInfo, Material, TraceError, WorldId};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WorldMetadata {
    id: u32,
    #[serde(default)]
    origin: IVec3,
    size: UVec3,
    #[serde(default)]
    fill: Material,
    #[serde(default)]
    regions: Vec<RegionMetadata>,
    #[serde(default)]
    entities: Vec<EntityMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegionMetadata {
    min: IVec3,
    max: IVec3,
    material: Material,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityMetadata {
    id: u64,
    kind: EntityKind,
    position: DVec3,
    #[serde(default)]
    yaw: f64,
    #[serde(default)]
    pitch: f64,
    #[serde(default)]
    baby: bool,
    #[serde(default)]
    sneaking: bool,
    #[serde(default)]
    size: Option<u8>,
}

/// Read a world snapshot from a YAML file.
///
/// Regions are applied in file order, so later regions overwrite earlier
/// ones. Entities are placed in the snapshot's world.
pub fn load_world(yaml_path: impl AsRef<Path>) -> Result<WorldSnapshot, TraceError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    let metadata: WorldMetadata = serde_yaml::from_str(&yaml_str)?;

    if metadata.size.min_element() == 0 {
        return Err(TraceError::InvalidMetadata(format!(
            "world size must be at least 1 on every axis, got {}",
            metadata.size
        )));
    }

    let info = MapInfo {
        width: metadata.size.x,
        height: metadata.size.y,
        depth: metadata.size.z,
        origin: metadata.origin,
    };
    let mut grid = VoxelGrid::filled(info, metadata.fill)?;
    for region in &metadata.regions {
        let written = grid.fill_region(region.min, region.max, region.material);
        if written == 0 {
            return Err(TraceError::InvalidMetadata(format!(
                "region {}..{} lies outside the world",
                region.min, region.max
            )));
        }
    }

    let world = WorldId(metadata.id);
    let mut seen = HashSet::new();
    let mut entities = Vec::with_capacity(metadata.entities.len());
    for entity in metadata.entities {
        if !seen.insert(entity.id) {
            return Err(TraceError::InvalidMetadata(format!(
                "duplicate entity id {}",
                entity.id
            )));
        }
        let location =
            Location::at(world, entity.position).with_rotation(entity.yaw, entity.pitch);
        entities.push(Entity {
            id: EntityId(entity.id),
            kind: entity.kind,
            location,
            baby: entity.baby,
            sneaking: entity.sneaking,
            size: entity.size,
        });
    }

    log::debug!(
        "loaded world {} sized {} with {} regions and {} entities",
        metadata.id,
        metadata.size,
        metadata.regions.len(),
        entities.len()
    );
    Ok(WorldSnapshot::new(world, grid, entities))
}
