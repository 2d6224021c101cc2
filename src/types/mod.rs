pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;
pub mod material;

pub use constants::*;
pub use error::TraceError;
pub use geometry::{Aabb, Axis, Location, WorldId};
pub use info::MapInfo;
pub use material::{Block, Material};
