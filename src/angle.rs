//! Angle helpers for axis (sign-free) directions.
use nalgebra::Vector2;
use std::f32::consts::{FRAC_PI_2, PI};

/// Wraps an angle into (-π, π].
#[inline]
pub fn wrap_pi(angle: f32) -> f32 {
    let mut a = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if a <= -PI {
        a += 2.0 * PI;
    }
    a
}

/// Signed rotation (radians, in `[-π/2, π/2]`) that brings axis `from` onto
/// axis `to`. A direction and its opposite count as the same axis, so the
/// result never exceeds a quarter turn.
pub fn shortest_rotation_angle(from: &Vector2<f32>, to: &Vector2<f32>) -> f32 {
    let dot = from.dot(to);
    let cross = from.x * to.y - from.y * to.x;
    let mut angle = wrap_pi(cross.atan2(dot));
    if angle > FRAC_PI_2 {
        angle -= PI;
    } else if angle < -FRAC_PI_2 {
        angle += PI;
    }
    angle.clamp(-FRAC_PI_2, FRAC_PI_2)
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: &Vector2<f32>, angle: f32) -> Vector2<f32> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Orientation difference between two vectors treating antipodal directions
/// as equivalent. Returns a value in [0, π/2].
#[inline]
pub fn angle_between_dirless(a: &Vector2<f32>, b: &Vector2<f32>) -> f32 {
    let na = a.norm().max(1e-6);
    let nb = b.norm().max(1e-6);
    (a.dot(b) / (na * nb)).abs().clamp(0.0, 1.0).acos()
}
