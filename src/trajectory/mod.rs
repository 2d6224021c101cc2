pub mod config;
pub mod results;
pub mod sampler;

pub use config::TrajectoryConfig;
pub use results::TrajectoryResults;
pub use sampler::Trajectory;
