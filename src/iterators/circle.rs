use glam::DVec3;

use crate::iterators::line::positive_power;
use crate::math::{Ease, ilerp};
use crate::types::{Axis, Location};

/// `count` points on a circle of `radius` around `origin`, in the plane
/// perpendicular to `axis`.
///
/// Point `i` sits at angle `ease(0, 360, i / count) + offset_deg`, so the
/// points never repeat the starting angle. Non-positive radii are accepted
/// and produce coincident or mirrored points.
pub fn circle_points(
    radius: f64,
    count: usize,
    axis: Axis,
    origin: DVec3,
    offset_deg: f64,
    ease: Ease,
    power: Option<f64>,
) -> Vec<DVec3> {
    let power = positive_power(power);
    (0..count)
        .map(|i| {
            let ratio = ilerp(0.0, count as f64, i as f64);
            let angle = match power {
                Some(power) => ease.custom_ease(0.0, 360.0, ratio, power),
                None => ease.ease(0.0, 360.0, ratio),
            } + offset_deg;
            let (sin, cos) = angle.to_radians().sin_cos();
            let (a, b) = (radius * cos, radius * sin);
            match axis {
                Axis::X => origin + DVec3::new(0.0, a, b),
                Axis::Y => origin + DVec3::new(a, 0.0, b),
                Axis::Z => origin + DVec3::new(a, b, 0.0),
            }
        })
        .collect()
}

/// [`circle_points`] around a location, keeping its world and orientation.
pub fn circle_points_at(
    radius: f64,
    count: usize,
    axis: Axis,
    origin: &Location,
    offset_deg: f64,
    ease: Ease,
) -> Vec<Location> {
    circle_points(radius, count, axis, origin.position, offset_deg, ease, None)
        .into_iter()
        .map(|p| origin.moved_to(p))
        .collect()
}
