use glam::DVec3;

use crate::math::{Ease, ilerp};

/// Iterator over `count` points between `start` and `end`, both inclusive.
///
/// Point `i` sits at ratio `i / (count - 1)`, shaped by the easing curve on
/// each axis independently. A single point sits at `start`.
#[derive(Debug, Clone)]
pub struct PointsAlongLine {
    start: DVec3,
    end: DVec3,
    count: usize,
    index: usize,
    ease: Ease,
    power: Option<f64>,
}

impl PointsAlongLine {
    pub fn new(start: DVec3, end: DVec3, count: usize) -> Self {
        Self {
            start,
            end,
            count,
            index: 0,
            ease: Ease::Linear,
            power: None,
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Override the exponent of power-based curves. Non-positive values are
    /// ignored.
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = positive_power(Some(power));
        self
    }
}

impl Iterator for PointsAlongLine {
    type Item = DVec3;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let ratio = if self.count == 1 {
            0.0
        } else {
            ilerp(0.0, (self.count - 1) as f64, self.index as f64)
        };
        self.index += 1;
        Some(lerp_vector(
            self.start, self.end, ratio, self.ease, self.power,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PointsAlongLine {}

/// `count` evenly spaced points from `start` to `end`.
pub fn points_along_line(start: DVec3, end: DVec3, count: usize) -> Vec<DVec3> {
    PointsAlongLine::new(start, end, count).collect()
}

/// Interpolate each axis independently with `ease`.
pub fn lerp_vector(start: DVec3, end: DVec3, ratio: f64, ease: Ease, power: Option<f64>) -> DVec3 {
    let axis = |a: f64, b: f64| match positive_power(power) {
        Some(power) => ease.custom_ease(a, b, ratio, power),
        None => ease.ease(a, b, ratio),
    };
    DVec3::new(
        axis(start.x, end.x),
        axis(start.y, end.y),
        axis(start.z, end.z),
    )
}

pub(crate) fn positive_power(power: Option<f64>) -> Option<f64> {
    match power {
        Some(p) if p > 0.0 => Some(p),
        Some(p) => {
            log::warn!("ignoring non-positive easing power {p}");
            None
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn returns_requested_count_with_endpoints() {
        let a = DVec3::new(1.0, -2.0, 3.5);
        let b = DVec3::new(-4.0, 8.0, 0.25);
        for n in 2..20 {
            let points = points_along_line(a, b, n);
            assert_eq!(points.len(), n);
            assert_relative_eq!(points[0].distance(a), 0.0);
            assert_relative_eq!(points[n - 1].distance(b), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn evenly_spaced_by_default() {
        let points = points_along_line(DVec3::ZERO, DVec3::new(0.0, 0.0, 4.0), 5);
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(p.z, i as f64);
        }
    }

    #[test]
    fn degenerate_counts() {
        assert!(points_along_line(DVec3::ZERO, DVec3::ONE, 0).is_empty());
        let single = points_along_line(DVec3::ONE, DVec3::splat(5.0), 1);
        assert_eq!(single, vec![DVec3::ONE]);
    }

    #[test]
    fn exact_size() {
        let mut iter = PointsAlongLine::new(DVec3::ZERO, DVec3::X, 3);
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn eased_points_keep_endpoints() {
        let points: Vec<_> = PointsAlongLine::new(DVec3::ZERO, DVec3::splat(8.0), 3)
            .with_ease(Ease::Out)
            .collect();
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[1].x, 2.0);
        assert_relative_eq!(points[2].x, 8.0);
    }

    #[test]
    fn non_positive_power_falls_back_to_curve() {
        let plain: Vec<_> = PointsAlongLine::new(DVec3::ZERO, DVec3::ONE, 4)
            .with_ease(Ease::In)
            .collect();
        let ignored: Vec<_> = PointsAlongLine::new(DVec3::ZERO, DVec3::ONE, 4)
            .with_ease(Ease::In)
            .with_power(-1.0)
            .collect();
        assert_eq!(plain, ignored);

        let cubed = lerp_vector(DVec3::ZERO, DVec3::ONE, 0.5, Ease::Out, Some(3.0));
        assert_relative_eq!(cubed.y, 0.125);
    }
}
