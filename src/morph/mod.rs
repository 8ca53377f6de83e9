//! Driver-side state for shape morphing.
//!
//! [`MorphCompensator`] owns the analyses of a start and end keyframe and
//! turns a progress value into the uniforms a morph renderer needs.
//! [`LerpAnimator`] is a standalone 0..1 blend driver. Both advance only
//! through an explicit `step(dt)` called by the host loop; drawing helpers
//! return plain primitives for an external visualizer.

pub mod compensator;
pub mod lerp;
pub mod overlay;

pub use compensator::{MorphCompensator, MorphSettings, MorphUniforms};
pub use lerp::{LerpAnimator, LerpSettings};
pub use overlay::{DebugPrimitive, OverlaySettings};

/// Triangle wave of period `2·length` bouncing between 0 and `length`.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let period = 2.0 * length;
    let wrapped = (t - (t / period).floor() * period).clamp(0.0, period);
    length - (wrapped - length).abs()
}
