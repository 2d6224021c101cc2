//! Easing curves for eased point generation.

use serde::{Deserialize, Serialize};

use crate::math::interp::{ilerp, lerp, mid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    In,
    In2,
    In3,
    InSine,
    InCirc,
    Out,
    Out2,
    Out3,
    OutSine,
    OutCirc,
    InOut,
    InOut2,
    InOut3,
    InOutSine,
    InOutCirc,
    #[default]
    Linear,
}

impl Ease {
    /// Exponent of the power-based curves.
    fn default_power(self) -> Option<f64> {
        match self {
            Ease::In | Ease::Out | Ease::InOut => Some(2.0),
            Ease::In2 | Ease::Out2 | Ease::InOut2 => Some(3.0),
            Ease::In3 | Ease::Out3 | Ease::InOut3 => Some(4.0),
            _ => None,
        }
    }

    /// Whether [`Ease::custom_ease`] honours its power argument.
    pub fn supports_power(self) -> bool {
        self.default_power().is_some()
    }

    pub fn ease(self, min: f64, max: f64, ratio: f64) -> f64 {
        match self.default_power() {
            Some(power) => self.power_ease(min, max, ratio, power),
            None => self.fixed_ease(min, max, ratio),
        }
    }

    /// Like [`Ease::ease`] with the exponent of a power curve replaced.
    pub fn custom_ease(self, min: f64, max: f64, ratio: f64, power: f64) -> f64 {
        if self.supports_power() {
            self.power_ease(min, max, ratio, power)
        } else {
            self.fixed_ease(min, max, ratio)
        }
    }

    /// Mix this curve with `other`; `blend_ratio` 0 is all `self`.
    pub fn blend(self, other: Ease, min: f64, max: f64, ratio: f64, blend_ratio: f64) -> f64 {
        lerp(
            self.ease(min, max, ratio),
            other.ease(min, max, ratio),
            blend_ratio,
        )
    }

    fn power_ease(self, min: f64, max: f64, ratio: f64, power: f64) -> f64 {
        match self {
            Ease::In | Ease::In2 | Ease::In3 => ease_in(min, max, ratio, power),
            Ease::Out | Ease::Out2 | Ease::Out3 => ease_out(min, max, ratio, power),
            _ => {
                let middle = mid(min, max);
                if ratio > 0.5 {
                    ease_in(middle, max, (ratio - 0.5) * 2.0, power)
                } else {
                    ease_out(min, middle, ratio * 2.0, power)
                }
            }
        }
    }

    fn fixed_ease(self, min: f64, max: f64, ratio: f64) -> f64 {
        match self {
            Ease::InSine => lerp(min, max, lerp(0.0, 90.0, ratio).to_radians().sin().abs()),
            Ease::OutSine => lerp(
                min,
                max,
                1.0 - lerp(0.0, 90.0, ratio).to_radians().cos().abs(),
            ),
            Ease::InOutSine => lerp(
                min,
                max,
                1.0 - ilerp(-1.0, 1.0, lerp(0.0, 180.0, ratio).to_radians().cos()),
            ),
            Ease::InCirc => in_circ(min, max, ratio),
            Ease::OutCirc => out_circ(min, max, ratio),
            Ease::InOutCirc => {
                let middle = mid(min, max);
                if ratio > 0.5 {
                    in_circ(middle, max, (ratio - 0.5) * 2.0)
                } else {
                    out_circ(min, middle, ratio * 2.0)
                }
            }
            _ => lerp(min, max, ratio),
        }
    }
}

fn ease_in(min: f64, max: f64, ratio: f64, power: f64) -> f64 {
    lerp(max, min, (1.0 - ratio).powf(power))
}

fn ease_out(min: f64, max: f64, ratio: f64, power: f64) -> f64 {
    lerp(min, max, ratio.powf(power))
}

fn in_circ(min: f64, max: f64, ratio: f64) -> f64 {
    lerp(min, max, (1.0 - ratio.acos().sin()).abs())
}

fn out_circ(min: f64, max: f64, ratio: f64) -> f64 {
    lerp(max, min, ratio.acos().sin().abs())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const ALL: [Ease; 16] = [
        Ease::In,
        Ease::In2,
        Ease::In3,
        Ease::InSine,
        Ease::InCirc,
        Ease::Out,
        Ease::Out2,
        Ease::Out3,
        Ease::OutSine,
        Ease::OutCirc,
        Ease::InOut,
        Ease::InOut2,
        Ease::InOut3,
        Ease::InOutSine,
        Ease::InOutCirc,
        Ease::Linear,
    ];

    #[test]
    fn every_curve_hits_its_endpoints() {
        for ease in ALL {
            assert_relative_eq!(ease.ease(2.0, 6.0, 0.0), 2.0, epsilon = 1e-9);
            assert_relative_eq!(ease.ease(2.0, 6.0, 1.0), 6.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn linear_is_lerp() {
        assert_relative_eq!(Ease::Linear.ease(0.0, 10.0, 0.3), 3.0);
        assert_eq!(Ease::default(), Ease::Linear);
    }

    #[test]
    fn power_curves() {
        // In: lerp(max, min, (1 - r)^2)
        assert_relative_eq!(Ease::In.ease(0.0, 1.0, 0.5), 0.75);
        assert_relative_eq!(Ease::Out.ease(0.0, 1.0, 0.5), 0.25);
        assert_relative_eq!(Ease::Out2.ease(0.0, 1.0, 0.5), 0.125);
        assert_relative_eq!(Ease::In3.ease(0.0, 1.0, 0.5), 1.0 - 0.0625);
    }

    #[test]
    fn in_out_passes_through_midpoint() {
        for ease in [Ease::InOut, Ease::InOut2, Ease::InOut3, Ease::InOutSine, Ease::InOutCirc] {
            assert_relative_eq!(ease.ease(0.0, 10.0, 0.5), 5.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn custom_power_only_affects_power_curves() {
        assert_relative_eq!(Ease::Out.custom_ease(0.0, 1.0, 0.5, 3.0), 0.125);
        assert_relative_eq!(
            Ease::InSine.custom_ease(0.0, 1.0, 0.5, 7.0),
            Ease::InSine.ease(0.0, 1.0, 0.5)
        );
        assert!(Ease::InOut3.supports_power());
        assert!(!Ease::OutCirc.supports_power());
    }

    #[test]
    fn blend_mixes_two_curves() {
        let blended = Ease::In.blend(Ease::Out, 0.0, 1.0, 0.5, 0.5);
        assert_relative_eq!(blended, 0.5);
        assert_relative_eq!(Ease::In.blend(Ease::Out, 0.0, 1.0, 0.5, 0.0), 0.75);
    }
}
