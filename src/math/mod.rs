pub mod ease;
pub mod interp;

pub use ease::Ease;
pub use interp::{
    Real, clamp, delta_angle, ilerp, ilerp_clamped, lerp, lerp_clamped, mid, remap, round,
    round_to_fraction,
};
