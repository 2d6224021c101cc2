use serde::Deserialize;

use crate::types::{
    DEFAULT_GRAVITY, DEFAULT_MAX_INERTIA, DEFAULT_MIN_INERTIA, DEFAULT_POINTS_PER_BLOCK,
    DEFAULT_TRACE_STEPS, Material, TraceError,
};

/// Launch parameters shared by every trajectory built from them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectoryConfig {
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    #[serde(deserialize_with = "deserialize_velocity")]
    pub velocity: f64,
    #[serde(default = "default_min_inertia")]
    pub min_inertia: f64,
    #[serde(default = "default_max_inertia")]
    pub max_inertia: f64,
    #[serde(
        default = "default_max_trace_points",
        deserialize_with = "deserialize_at_least_one"
    )]
    pub max_trace_points: u32,
    #[serde(
        default = "default_points_per_block",
        deserialize_with = "deserialize_at_least_one"
    )]
    pub points_per_block: u32,
    #[serde(default = "default_ignore_materials")]
    pub ignore_materials: Vec<Material>,
}

impl TrajectoryConfig {
    /// Defaults for everything except the launch velocity.
    pub fn with_velocity(velocity: f64) -> Result<Self, TraceError> {
        if velocity.is_nan() || velocity <= 0.0 {
            return Err(TraceError::InvalidMetadata(format!(
                "velocity must be > 0, got {velocity}"
            )));
        }
        Ok(Self {
            gravity: DEFAULT_GRAVITY,
            velocity,
            min_inertia: DEFAULT_MIN_INERTIA,
            max_inertia: DEFAULT_MAX_INERTIA,
            max_trace_points: DEFAULT_TRACE_STEPS,
            points_per_block: DEFAULT_POINTS_PER_BLOCK,
            ignore_materials: default_ignore_materials(),
        })
    }
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

fn default_min_inertia() -> f64 {
    DEFAULT_MIN_INERTIA
}

fn default_max_inertia() -> f64 {
    DEFAULT_MAX_INERTIA
}

fn default_max_trace_points() -> u32 {
    DEFAULT_TRACE_STEPS
}

fn default_points_per_block() -> u32 {
    DEFAULT_POINTS_PER_BLOCK
}

fn default_ignore_materials() -> Vec<Material> {
    vec![Material::Air]
}

fn deserialize_velocity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(format!(
            "velocity must be > 0, got {value}"
        )))
    }
}

fn deserialize_at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u32::deserialize(deserializer)?;
    if value >= 1 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom("value must be >= 1"))
    }
}
