//! Seed masks derived from images.
use crate::field::parallel::map_pixels;
use crate::field::{Channel, Color, Field2D};
use serde::{Deserialize, Serialize};

/// Per-pixel flag: `true` marks a seed (shape interior).
pub type SeedField = Field2D<bool>;

/// Rule turning an image sample into a seed flag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedRule {
    pub channel: Channel,
    /// A pixel is a seed when its channel value is strictly above this.
    pub threshold: f32,
    /// Swap interior and exterior.
    pub invert: bool,
}

impl Default for SeedRule {
    fn default() -> Self {
        Self {
            channel: Channel::Luma,
            threshold: 0.5,
            invert: false,
        }
    }
}

impl SeedRule {
    pub fn new(channel: Channel, threshold: f32) -> Self {
        Self {
            channel,
            threshold,
            invert: false,
        }
    }

    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    #[inline]
    pub fn is_seed(&self, px: Color) -> bool {
        (px.channel(self.channel) > self.threshold) != self.invert
    }
}

pub fn seeds_from_image(image: &Field2D<Color>, rule: &SeedRule) -> SeedField {
    map_pixels(image, |_, _, px| rule.is_seed(px))
}

pub fn invert_mask(mask: &SeedField) -> SeedField {
    map_pixels(mask, |_, _, seed| !seed)
}

pub fn count_seeds(mask: &SeedField) -> usize {
    mask.pixels().filter(|&s| s).count()
}
