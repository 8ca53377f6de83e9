//! Jump Flood distance transform.
//!
//! Given a seed mask, [`generate_distance_field`] computes the Euclidean
//! distance from every pixel to its nearest seed in `O(passes · W · H)`:
//!
//! 1. Seeds store their own coordinate; other pixels start unresolved.
//! 2. A fixed sequence of jump passes (see [`JumpSchedule`]) propagates
//!    nearest-seed coordinates. Two buffers are ping-ponged between passes.
//! 3. A final pass converts coordinates to distances normalized by
//!    `max(w, h)`.
//!
//! The signed variant runs the unsigned transform on the mask and on its
//! inverse and combines them so that interior pixels are negative and
//! exterior pixels positive, offset by half a texel on each side so the field
//! is continuous through the boundary.
//!
//! Pixels that never see a seed (empty mask) get [`unreachable_distance`],
//! the field diagonal in normalized units.

pub mod options;
pub mod seeds;
pub mod sweep;

pub use options::{min_iterations, JfaOptions, JumpSchedule, DEFAULT_ITERATIONS};
pub use seeds::{count_seeds, invert_mask, seeds_from_image, SeedField, SeedRule};

use crate::error::{Error, Result};
use crate::field::parallel::{join, map_pixels};
use crate::field::{Channel, Color, Field2D};
use crate::filters::merge_channels;
use log::debug;
use std::time::Instant;

/// Distances in normalized units (pixels divided by `normalization`).
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    pub values: Field2D<f32>,
    /// Pixel length of one normalized unit, `max(w, h)`.
    pub normalization: f32,
    /// Negative inside, positive outside when set.
    pub signed: bool,
}

impl DistanceField {
    #[inline]
    pub fn width(&self) -> usize {
        self.values.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.values.h
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values.get(x, y)
    }

    /// Value at `(x, y)` converted back to pixels.
    #[inline]
    pub fn get_pixels(&self, x: usize, y: usize) -> f32 {
        self.get(x, y) * self.normalization
    }

    /// Largest absolute value in the field.
    pub fn max_abs(&self) -> f32 {
        self.values.pixels().fold(0.0, |m, v| m.max(v.abs()))
    }

    /// Gray image with the distance in the color channels and opaque alpha.
    pub fn to_color_field(&self) -> Field2D<Color> {
        map_pixels(&self.values, |_, _, v| Color::gray(v))
    }

    /// Rebuild a signed field from the RG-packed layout produced by
    /// [`generate_packed_sdf`]: R = distance to the shape, G = distance to
    /// the background.
    pub fn from_packed(packed: &Field2D<Color>) -> Result<Self> {
        Error::check_dims(packed.w, packed.h)?;
        let normalization = normalization(packed.w, packed.h);
        let half = half_texel(normalization);
        let values = map_pixels(packed, |_, _, px| {
            if px.r <= 0.0 {
                -(px.g - half)
            } else {
                px.r - half
            }
        });
        Ok(Self {
            values,
            normalization,
            signed: true,
        })
    }
}

/// Normalization constant shared by generation and consumption.
#[inline]
pub fn normalization(w: usize, h: usize) -> f32 {
    w.max(h).max(1) as f32
}

/// Distance assigned to pixels with no reachable seed.
#[inline]
pub fn unreachable_distance(w: usize, h: usize) -> f32 {
    ((w * w + h * h) as f32).sqrt() / normalization(w, h)
}

#[inline]
fn half_texel(normalization: f32) -> f32 {
    0.5 / normalization
}

/// Distance field with default options (15 level-indexed passes).
pub fn generate_distance_field(mask: &SeedField, signed: bool) -> Result<DistanceField> {
    generate_distance_field_with(mask, signed, &JfaOptions::default())
}

pub fn generate_distance_field_with(
    mask: &SeedField,
    signed: bool,
    options: &JfaOptions,
) -> Result<DistanceField> {
    Error::check_dims(mask.w, mask.h)?;
    options.validate(mask.w, mask.h)?;
    let t0 = Instant::now();
    let normalization = normalization(mask.w, mask.h);

    let values = if signed {
        let inverted = invert_mask(mask);
        let (outside, inside) = join(
            || unsigned_distance(mask, options),
            || unsigned_distance(&inverted, options),
        );
        let half = half_texel(normalization);
        map_pixels(mask, |x, y, seed| {
            if seed {
                -(inside.get(x, y) - half)
            } else {
                outside.get(x, y) - half
            }
        })
    } else {
        unsigned_distance(mask, options)
    };

    let field = DistanceField {
        values,
        normalization,
        signed,
    };
    debug!(
        "distance field {}x{} signed={} seeds={} max|d|={:.4} in {:.3} ms",
        mask.w,
        mask.h,
        signed,
        count_seeds(mask),
        field.max_abs(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    Ok(field)
}

/// RG-packed signed field: R holds the distance to the nearest seed, G the
/// distance to the nearest non-seed. Both channels are unsigned.
pub fn generate_packed_sdf(mask: &SeedField, options: &JfaOptions) -> Result<Field2D<Color>> {
    Error::check_dims(mask.w, mask.h)?;
    options.validate(mask.w, mask.h)?;
    let inverted = invert_mask(mask);
    let (outside, inside) = join(
        || unsigned_distance(mask, options),
        || unsigned_distance(&inverted, options),
    );
    let r = map_pixels(&outside, |_, _, v| Color::gray(v));
    let g = map_pixels(&inside, |_, _, v| Color::gray(v));
    merge_channels(&r, &g, Channel::R)
}

fn unsigned_distance(mask: &SeedField, options: &JfaOptions) -> Field2D<f32> {
    let offsets = options.offsets(mask.w, mask.h);
    let nearest = sweep::flood(mask, &offsets);
    sweep::resolve_distances(
        &nearest,
        normalization(mask.w, mask.h),
        unreachable_distance(mask.w, mask.h),
    )
}
