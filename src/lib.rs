pub mod direction;
pub mod entity;
pub mod grid;
pub mod iterators;
pub mod loaders;
pub mod math;
pub mod raycast;
pub mod trajectory;
pub mod types;

pub use direction::{BlockFace, Direction};
pub use entity::{Entity, EntityId, EntityKind};
pub use grid::{VoxelGrid, VoxelWorld, WorldSnapshot};
pub use loaders::{load_trajectory_config, load_world};
pub use raycast::{LineTrace, LineTraceResults, Tracker};
pub use trajectory::{Trajectory, TrajectoryConfig, TrajectoryResults};
pub use types::{Block, Location, MapInfo, Material, TraceError, WorldId};
