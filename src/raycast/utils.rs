use glam::DVec3;

use crate::direction::Direction;
use crate::math::ilerp;

/// Fraction of the step `last -> current` at which the boundary of the
/// previous cell facing `face` is crossed. Faces that are not axis aligned
/// give 0.
pub fn entry_ratio(face: Direction, last: DVec3, current: DVec3) -> f64 {
    let cell = last.floor();
    match face {
        Direction::North => ilerp(last.z, current.z, cell.z),
        Direction::East => ilerp(last.x, current.x, cell.x + 1.0),
        Direction::South => ilerp(last.z, current.z, cell.z + 1.0),
        Direction::West => ilerp(last.x, current.x, cell.x),
        Direction::Up => ilerp(last.y, current.y, cell.y + 1.0),
        Direction::Down => ilerp(last.y, current.y, cell.y),
        _ => 0.0,
    }
}

/// Mirror `incoming` about the plane with normal `normal`.
#[inline]
pub fn reflect(incoming: DVec3, normal: DVec3) -> DVec3 {
    let n = normal.normalize_or_zero();
    incoming - n * (2.0 * incoming.dot(n))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ratio_along_each_axis() {
        let last = DVec3::new(0.5, 0.5, 4.75);
        let current = DVec3::new(0.5, 0.5, 5.25);
        assert_relative_eq!(entry_ratio(Direction::South, last, current), 0.5);

        let last = DVec3::new(3.2, 0.0, 0.0);
        let current = DVec3::new(2.8, 0.0, 0.0);
        assert_relative_eq!(entry_ratio(Direction::West, last, current), 0.5, epsilon = 1e-12);

        let last = DVec3::new(0.0, 1.9, 0.0);
        let current = DVec3::new(0.0, 2.3, 0.0);
        assert_relative_eq!(entry_ratio(Direction::Up, last, current), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn diagonal_faces_give_zero() {
        let ratio = entry_ratio(Direction::NorthEast, DVec3::ZERO, DVec3::ONE);
        assert_eq!(ratio, 0.0);
        assert_eq!(entry_ratio(Direction::SelfDir, DVec3::ZERO, DVec3::ONE), 0.0);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let r = reflect(DVec3::new(1.0, -1.0, 0.0), DVec3::Y);
        assert_relative_eq!(r.x, 1.0);
        assert_relative_eq!(r.y, 1.0);
        // Unnormalised normals behave the same.
        let r = reflect(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, -3.0));
        assert_relative_eq!(r.z, -2.0);
    }
}
