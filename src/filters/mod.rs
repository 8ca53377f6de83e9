//! Per-pixel compositing filters.
//!
//! Every filter is a pure function from one (or two) color fields to a new
//! field of the same size; pixels are independent, so each runs as a single
//! parallel pass.

pub mod edge;

pub use edge::{edge_magnitude, sobel_magnitude};

use crate::error::{Error, Result};
use crate::field::parallel::{map_pixels, zip_pixels};
use crate::field::{Channel, Color, Field2D};
use serde::{Deserialize, Serialize};

/// Threshold used by [`binarize`] when none is configured.
pub const DEFAULT_BINARIZE_THRESHOLD: f32 = 0.5;

/// White where luma reaches `threshold`, black elsewhere; alpha kept.
pub fn binarize(image: &Field2D<Color>, threshold: f32) -> Field2D<Color> {
    map_pixels(image, |_, _, px| {
        let v = if px.luma() >= threshold { 1.0 } else { 0.0 };
        Color::new(v, v, v, px.a)
    })
}

/// `1 − x` on the color channels; alpha kept.
pub fn invert(image: &Field2D<Color>) -> Field2D<Color> {
    map_pixels(image, |_, _, px| px.map_rgb(|v| 1.0 - v))
}

pub fn grayscale(image: &Field2D<Color>) -> Field2D<Color> {
    map_pixels(image, |_, _, px| {
        let l = px.luma();
        Color::new(l, l, l, px.a)
    })
}

/// Pack `channel` of `r_src` into R and of `g_src` into G (B = 0, A = 1).
pub fn merge_channels(
    r_src: &Field2D<Color>,
    g_src: &Field2D<Color>,
    channel: Channel,
) -> Result<Field2D<Color>> {
    if !r_src.same_dims(g_src) {
        return Err(Error::invalid(format!(
            "channel merge needs equal sizes, got {}x{} and {}x{}",
            r_src.w, r_src.h, g_src.w, g_src.h
        )));
    }
    Ok(zip_pixels(r_src, g_src, |a, b| {
        Color::rgb(a.channel(channel), b.channel(channel), 0.0)
    }))
}

/// Scalar field holding one channel of `image`.
pub fn extract_channel(image: &Field2D<Color>, channel: Channel) -> Field2D<f32> {
    map_pixels(image, |_, _, px| px.channel(channel))
}

/// Filter selection as it appears in tool configs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    Binarize {
        #[serde(default = "default_binarize_threshold")]
        threshold: f32,
    },
    Invert,
    Grayscale,
    Edge,
}

fn default_binarize_threshold() -> f32 {
    DEFAULT_BINARIZE_THRESHOLD
}

impl FilterKind {
    pub fn apply(&self, image: &Field2D<Color>) -> Field2D<Color> {
        match *self {
            FilterKind::Binarize { threshold } => binarize(image, threshold),
            FilterKind::Invert => invert(image),
            FilterKind::Grayscale => grayscale(image),
            FilterKind::Edge => edge_magnitude(image),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Binarize { .. } => "binarize",
            FilterKind::Invert => "invert",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Edge => "edge",
        }
    }
}
