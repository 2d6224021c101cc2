pub mod circle;
pub mod line;

pub use circle::{circle_points, circle_points_at};
pub use line::{PointsAlongLine, lerp_vector, points_along_line};
