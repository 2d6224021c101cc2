pub mod snapshot;
pub mod traits;
pub mod voxel;

pub use snapshot::WorldSnapshot;
pub use traits::VoxelWorld;
pub use voxel::VoxelGrid;
