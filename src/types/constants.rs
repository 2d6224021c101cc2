/// Samples taken per world unit when a trace does not specify otherwise.
pub const DEFAULT_POINTS_PER_BLOCK: u32 = 8;

/// Coarse steps walked by the trajectory sampler.
pub const DEFAULT_TRACE_STEPS: u32 = 64;

/// Number of coarse steps per unit of trajectory time (step `i` is `t = i / 5`).
pub const COARSE_STEPS_PER_TIME_UNIT: f64 = 5.0;

pub const DEFAULT_GRAVITY: f64 = 1.333;
pub const DEFAULT_MIN_INERTIA: f64 = 1.0;
pub const DEFAULT_MAX_INERTIA: f64 = 0.89;

/// How far past the traced segment the world is asked for entity candidates.
/// Covers half of the largest entity footprint in the hit-box table.
pub const ENTITY_SEARCH_MARGIN: f64 = 8.0;

/// Eye height as a fraction of an entity's hit-box height.
pub const EYE_HEIGHT_RATIO: f64 = 0.85;

/// Upper bound on the samples a single line trace walks. Longer traces
/// produce empty results.
pub const MAX_TRACE_SAMPLES: usize = 1 << 20;

/// Upper bound on the cells a `VoxelGrid` may hold.
pub const MAX_GRID_CELLS: usize = 1 << 30;
