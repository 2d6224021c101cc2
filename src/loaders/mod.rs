pub mod config;
pub mod world;

pub use config::load_trajectory_config;
pub use world::load_world;
