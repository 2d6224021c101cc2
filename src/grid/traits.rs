use glam::IVec3;

use crate::entity::Entity;
use crate::types::{Aabb, Block, WorldId};

/// Read-only view of a world that traces run against.
///
/// Lookups must be cheap and free of side effects; a trace may query the
/// same cell many times.
pub trait VoxelWorld {
    fn id(&self) -> WorldId;

    /// Cell at `cell`. Cells the world does not store read as air.
    fn block_at(&self, cell: IVec3) -> Block;

    /// Entities whose feet lie inside `region`.
    fn entities_near(&self, region: &Aabb) -> Vec<&Entity>;
}
