//! Planar geometry shared by the force code and by input handling
//!
//! Angles use the host's convention: 0 points along +x and the direction
//! vector for an angle `a` is `(cos a, -sin a)` (see [`heading`]).

use std::f64::consts::FRAC_PI_2;

use super::states::NVec2;

/// Euclidean distance between two points
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Angle (radians) of the line from `from` towards `to`
pub fn angle_between(from: &NVec2, to: &NVec2) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    // atan2 with swapped arguments, rotated by a quarter turn
    dx.atan2(dy) - FRAC_PI_2
}

/// Unit vector pointing along `angle`
///
/// `heading(angle_between(p, q))` points from `p` to `q`.
pub fn heading(angle: f64) -> NVec2 {
    NVec2::new(angle.cos(), -angle.sin())
}
