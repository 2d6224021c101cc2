//! Geometric and spatial types shared by the tracer and the trajectory sampler.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// Identity of a world. Only compared and copied, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldId(pub u32);

/// A position in a world plus an orientation in degrees.
///
/// Yaw 0 faces +X and positive yaw turns toward -Z. Positive pitch faces up.
/// `world` is `None` for detached locations; traces over such locations
/// produce empty results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub world: Option<WorldId>,
    pub position: DVec3,
    pub yaw: f64,
    pub pitch: f64,
}

impl Location {
    pub fn new(world: WorldId, x: f64, y: f64, z: f64) -> Self {
        Self::at(world, DVec3::new(x, y, z))
    }

    pub fn at(world: WorldId, position: DVec3) -> Self {
        Self {
            world: Some(world),
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// A location with no world attached.
    pub fn detached(position: DVec3) -> Self {
        Self {
            world: None,
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn with_rotation(mut self, yaw: f64, pitch: f64) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Cell containing this location.
    #[inline]
    pub fn block(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }

    /// Same world and orientation, different position.
    pub fn moved_to(&self, position: DVec3) -> Self {
        Self { position, ..*self }
    }

    /// Offset the position, keeping world and orientation.
    pub fn add(&self, offset: DVec3) -> Self {
        self.moved_to(self.position + offset)
    }

    pub fn distance(&self, other: &Location) -> f64 {
        self.position.distance(other.position)
    }

    pub fn same_world(&self, other: &Location) -> bool {
        self.world.is_some() && self.world == other.world
    }

    /// Unit vector the orientation faces.
    pub fn direction(&self) -> DVec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        DVec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            -pitch.cos() * yaw.sin(),
        )
    }

    /// Orient this location along `direction`. A zero vector leaves the
    /// orientation unchanged.
    pub fn with_direction(mut self, direction: DVec3) -> Self {
        if direction.length_squared() == 0.0 {
            return self;
        }
        let horizontal = (direction.x * direction.x + direction.z * direction.z).sqrt();
        self.pitch = direction.y.atan2(horizontal).to_degrees();
        self.yaw = if horizontal == 0.0 {
            0.0
        } else {
            (-direction.z).atan2(direction.x).to_degrees()
        };
        self
    }
}

/// Principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axis a normal points along. Vectors that are not axis aligned map to `Y`.
    pub fn from_normal(normal: DVec3) -> Self {
        let normal = normal.normalize_or_zero();
        if normal.x.abs() == 1.0 {
            Axis::X
        } else if normal.y.abs() == 1.0 {
            Axis::Y
        } else if normal.z.abs() == 1.0 {
            Axis::Z
        } else {
            Axis::Y
        }
    }
}

/// Axis-aligned box in world coordinates, inclusive on every face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box standing on `feet`: `height` up, `width` and `length` centred on X and Z.
    pub fn standing(feet: DVec3, height: f64, width: f64, length: f64) -> Self {
        let half = DVec3::new(width / 2.0, 0.0, length / 2.0);
        Self {
            min: feet - half,
            max: feet + half + DVec3::new(0.0, height, 0.0),
        }
    }

    pub fn contains(&self, point: DVec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Expand by a margin in all directions.
    pub fn expand_by(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(margin),
            max: self.max + DVec3::splat(margin),
        }
    }
}
