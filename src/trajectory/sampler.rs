//! Ballistic arc sampler.
//!
//! The arc lives in a local vertical plane: `x` is horizontal distance along
//! the launch yaw, `y` is height. Horizontal travel is
//! `velocity * t^inertia * cos(pitch)` where the inertia exponent is blended
//! between `min_inertia` (flat shots) and `max_inertia` (straight up) by
//! launch pitch in degrees. Vertical travel is
//! `velocity * t * sin(pitch) - (gravity * t)^2 / 2`.
//!
//! The arc is walked in coarse time steps of `1 / 5`. Whenever two
//! consecutive waypoints fall in different cells, a fine [`LineTrace`]
//! between them resolves collisions; the first impact ends the walk.

use std::collections::HashSet;

use glam::{DVec3, IVec3};

use crate::entity::EntityId;
use crate::grid::VoxelWorld;
use crate::math::{ilerp, ilerp_clamped, lerp};
use crate::raycast::{LineTrace, LineTraceResults, Tracker};
use crate::trajectory::{TrajectoryConfig, TrajectoryResults};
use crate::types::{
    COARSE_STEPS_PER_TIME_UNIT, DEFAULT_POINTS_PER_BLOCK, DEFAULT_TRACE_STEPS, Location, Material,
};

#[derive(Debug, Clone)]
pub struct Trajectory {
    location: Location,
    gravity: f64,
    velocity: f64,
    min_inertia: f64,
    max_inertia: f64,
    max_trace_points: u32,
    points_per_block: u32,

    /// Launch pitch in degrees, used for the inertia blend.
    pitch: f64,
    pitch_cos: f64,
    pitch_sin: f64,
    yaw_cos: f64,
    yaw_sin: f64,

    ignore_entities: HashSet<EntityId>,
    ignore_materials: HashSet<Material>,
}

impl Trajectory {
    /// Launch from `location` along its yaw and pitch. Air is ignored for
    /// impacts; use [`Trajectory::from_config`] to choose the ignored set.
    pub fn new(
        location: Location,
        gravity: f64,
        velocity: f64,
        min_inertia: f64,
        max_inertia: f64,
    ) -> Self {
        let (pitch_sin, pitch_cos) = location.pitch.to_radians().sin_cos();
        let (yaw_sin, yaw_cos) = location.yaw.to_radians().sin_cos();
        Self {
            location,
            gravity,
            velocity,
            min_inertia,
            max_inertia,
            max_trace_points: DEFAULT_TRACE_STEPS,
            points_per_block: DEFAULT_POINTS_PER_BLOCK,
            pitch: location.pitch,
            pitch_cos,
            pitch_sin,
            yaw_cos,
            yaw_sin,
            ignore_entities: HashSet::new(),
            ignore_materials: HashSet::from([Material::Air]),
        }
    }

    /// Launch with the config's parameters. The config's `ignore_materials`
    /// replace the default set, so an empty list makes air impact-worthy.
    pub fn from_config(location: Location, config: &TrajectoryConfig) -> Self {
        let mut trajectory = Self::new(
            location,
            config.gravity,
            config.velocity,
            config.min_inertia,
            config.max_inertia,
        );
        trajectory.ignore_materials = config.ignore_materials.iter().copied().collect();
        trajectory.max_trace_points = config.max_trace_points;
        trajectory.points_per_block = config.points_per_block;
        trajectory
    }

    pub fn ignore_entity(mut self, entity: EntityId) -> Self {
        self.ignore_entities.insert(entity);
        self
    }

    pub fn ignore_entities(mut self, entities: impl IntoIterator<Item = EntityId>) -> Self {
        self.ignore_entities.extend(entities);
        self
    }

    pub fn ignore_material(mut self, material: Material) -> Self {
        self.ignore_materials.insert(material);
        self
    }

    pub fn ignore_materials(mut self, materials: impl IntoIterator<Item = Material>) -> Self {
        self.ignore_materials.extend(materials);
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Horizontal distance travelled at time `t`.
    pub fn x_at(&self, t: f64) -> f64 {
        let ratio = ilerp_clamped(0.0, 90.0, self.pitch);
        let inertia = lerp(self.min_inertia, self.max_inertia, ratio);
        self.velocity * t.powf(inertia) * self.pitch_cos
    }

    /// Height above the launch point at time `t`.
    pub fn y_at(&self, t: f64) -> f64 {
        let drop = self.gravity * t;
        self.velocity * t * self.pitch_sin - drop * drop / 2.0
    }

    /// Time at which horizontal distance `x` is reached, ignoring inertia.
    /// Zero when the launch has no horizontal speed.
    pub fn time_at(&self, x: f64) -> f64 {
        let speed = self.velocity * self.pitch_cos;
        if speed == 0.0 {
            log::debug!("trajectory has no horizontal speed, time at x={x} is 0");
            return 0.0;
        }
        x / speed
    }

    pub fn y_at_x(&self, x: f64) -> f64 {
        self.y_at(self.time_at(x))
    }

    /// Rotate a world point about the vertical axis through the launch point
    /// by the launch yaw.
    pub fn rotate_y(&self, point: DVec3) -> DVec3 {
        let origin = self.location.position;
        let local = point - origin;
        DVec3::new(
            local.x * self.yaw_cos + local.z * self.yaw_sin,
            local.y,
            -local.x * self.yaw_sin + local.z * self.yaw_cos,
        ) + origin
    }

    /// World location of the arc point `(x, y)` in the launch plane.
    fn arc_point(&self, x: f64, y: f64) -> Location {
        let local = self.location.position + DVec3::new(x, y, 0.0);
        self.location.moved_to(self.rotate_y(local))
    }

    pub fn trace<W: VoxelWorld + ?Sized>(&self, world: &W) -> TrajectoryResults {
        self.trace_steps(world, self.max_trace_points)
    }

    pub fn trace_steps<W: VoxelWorld + ?Sized>(&self, world: &W, steps: u32) -> TrajectoryResults {
        let start = self.location;
        let mut waypoints: Vec<Location> = Vec::with_capacity(steps as usize + 1);
        let mut highest = start;
        let mut blocks = Vec::new();
        let mut seen_blocks: HashSet<IVec3> = HashSet::new();
        let mut impact: Option<LineTraceResults> = None;

        for i in 0..steps {
            let t = f64::from(i) / COARSE_STEPS_PER_TIME_UNIT;
            let y = self.y_at(t);
            let point = self.arc_point(self.x_at(t), y);
            waypoints.push(point);
            if start.y() + y > highest.y() {
                highest = point;
            }

            let [.., previous, current] = waypoints.as_slice() else {
                continue;
            };
            if previous.block() == current.block() {
                continue;
            }

            let results = LineTrace::between(*previous, *current, self.points_per_block)
                .track_all([Tracker::Impact, Tracker::Blocks])
                .ignore_entities(self.ignore_entities.iter().copied())
                .ignore_materials(self.ignore_materials.iter().copied())
                .trace(world);
            for block in &results.blocks {
                if seen_blocks.insert(block.position) {
                    blocks.push(*block);
                }
            }
            if let Some(point) = results.impact_point {
                waypoints.push(point);
                impact = Some(results);
                break;
            }
        }

        let end = waypoints.last().copied().unwrap_or(start);
        let mut results = TrajectoryResults {
            start,
            end,
            rough_highest_point: highest,
            impact_point: None,
            impact_normal: None,
            impact_normal_direction: None,
            trace_points: Vec::new(),
            waypoints,
            blocks,
            hit: impact.is_some(),
        };
        if let Some(impact) = impact {
            results.impact_point = impact.impact_point;
            results.impact_normal = impact.impact_normal;
            results.impact_normal_direction = impact.impact_normal_direction;
        }

        if !results.waypoints.is_empty() {
            let count = results.rough_length().ceil().max(1.0);
            let distance = start.distance(&end);
            results.trace_points = (0..count as usize)
                .map(|i| {
                    let x = lerp(0.0, distance, ilerp(0.0, count, i as f64));
                    self.arc_point(x, self.y_at_x(x))
                })
                .collect();
        }

        log::trace!(
            "trajectory walked {} waypoints, {} render points, hit={}",
            results.waypoints.len(),
            results.trace_points.len(),
            results.hit
        );
        results
    }
}
