use std::path::Path;

use crate::trajectory::TrajectoryConfig;
use crate::types::TraceError;

/// Read trajectory launch parameters from a YAML file.
pub fn load_trajectory_config(yaml_path: impl AsRef<Path>) -> Result<TrajectoryConfig, TraceError> {
    let yaml_str = std::fs::read_to_string(yaml_path.as_ref())?;
    let config: TrajectoryConfig = serde_yaml::from_str(&yaml_str)?;
    if config.min_inertia <= 0.0 || config.max_inertia <= 0.0 {
        return Err(TraceError::InvalidMetadata(format!(
            "inertia exponents must be > 0, got {} and {}",
            config.min_inertia, config.max_inertia
        )));
    }
    Ok(config)
}
