use crate::direction::Direction;
use crate::types::{Block, Location};

/// Outcome of a [`Trajectory`](crate::trajectory::Trajectory) trace.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryResults {
    pub start: Location,
    /// Last coarse waypoint, or the impact point when the arc hit something.
    pub end: Location,
    /// Highest coarse waypoint, or the start if the arc never rose.
    pub rough_highest_point: Location,
    pub impact_point: Option<Location>,
    pub impact_normal: Option<Location>,
    pub impact_normal_direction: Option<Direction>,
    /// Evenly spaced points along the accepted arc, for display.
    pub trace_points: Vec<Location>,
    /// Coarse collision-walk points, impact point appended.
    pub waypoints: Vec<Location>,
    /// Cells touched by the fine traces, each once.
    pub blocks: Vec<Block>,
    pub hit: bool,
}

impl TrajectoryResults {
    /// Length of the two straight legs start -> highest -> end.
    pub fn rough_length(&self) -> f64 {
        self.start.distance(&self.rough_highest_point)
            + self.rough_highest_point.distance(&self.end)
    }

    pub fn impact_point_or_end(&self) -> Location {
        self.impact_point.unwrap_or(self.end)
    }
}
