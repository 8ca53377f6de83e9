//! Shape alignment: weighted centroid and principal axis of an image.
//!
//! Each pixel contributes with weight `max(0, channel − threshold)` at its UV
//! position `(x / w, y / h)` (origin at the first row). Non-finite samples,
//! which float EXR inputs can carry, contribute nothing. A single reduction
//! accumulates raw moments; the centroid and weighted covariance follow, and
//! the principal axis is the eigenvector of the larger covariance eigenvalue.
//!
//! Comparing the analyses of two keyframes yields a [`Compensation`]: the
//! centroid translation and the shortest rotation aligning their axes, used to
//! steer a morph between the two shapes.
//!
//! Degenerate inputs never fail inside the analysis. A zero-weight image
//! returns [`CentroidAndDirection::default`] (centroid `(0.5, 0.5)`, direction
//! `(1, 0)`). When the two eigenvalues are nearly equal (discs, squares) the
//! direction is numerically arbitrary; check [`CentroidAndDirection::anisotropy`].

pub mod compensation;
pub mod moments;
pub mod principal;

pub use compensation::Compensation;
pub use moments::{Covariance, WeightedMoments};
pub use principal::{principal_axis, PrincipalAxis};

use crate::error::{Error, Result};
use crate::field::parallel::reduce_rows;
use crate::field::{Channel, Color, Field2D, FieldView};
use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Threshold used when no configuration overrides it.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CentroidAndDirection {
    /// Weighted centroid in UV space, `[0, 1]²`.
    pub centroid: Vector2<f32>,
    /// Unit principal axis in UV space; sign carries no meaning.
    pub main_direction: Vector2<f32>,
    /// Covariance eigenvalues `[λ1, λ2]`, `λ1 ≥ λ2`.
    pub eigenvalues: [f32; 2],
    pub total_weight: f32,
}

impl Default for CentroidAndDirection {
    fn default() -> Self {
        Self {
            centroid: Vector2::new(0.5, 0.5),
            main_direction: Vector2::x(),
            eigenvalues: [0.0, 0.0],
            total_weight: 0.0,
        }
    }
}

impl CentroidAndDirection {
    /// True when no pixel carried weight and the defaults were returned.
    pub fn is_degenerate(&self) -> bool {
        self.total_weight <= f32::EPSILON
    }

    pub fn anisotropy(&self) -> f32 {
        PrincipalAxis {
            direction: self.main_direction,
            lambda_major: self.eigenvalues[0],
            lambda_minor: self.eigenvalues[1],
        }
        .anisotropy()
    }
}

/// Analysis settings as they appear in tool configs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Only pixels whose channel exceeds this contribute.
    pub threshold: f32,
    pub channel: Channel,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel: Channel::G,
        }
    }
}

pub fn analyze(image: &Field2D<Color>, threshold: f32, channel: Channel) -> CentroidAndDirection {
    if image.is_empty() {
        return CentroidAndDirection::default();
    }
    let (w, h) = (image.w as f64, image.h as f64);
    let moments = reduce_rows(
        image.h,
        WeightedMoments::default,
        |mut acc, y| {
            let v = y as f64 / h;
            for (x, px) in image.row(y).iter().enumerate() {
                // NaN already collapses to 0 through `max`; +inf would poison the sums.
                let weight = (px.channel(channel) - threshold).max(0.0);
                if weight > 0.0 && weight.is_finite() {
                    acc.push(x as f64 / w, v, weight as f64);
                }
            }
            acc
        },
        WeightedMoments::merge,
    );

    let (Some(centroid), Some(cov)) = (moments.centroid(), moments.covariance()) else {
        debug!(
            "analyze: no pixel above threshold {threshold} on {}x{}",
            image.w, image.h
        );
        return CentroidAndDirection::default();
    };
    let axis = principal_axis(&cov);
    debug!(
        "analyze: {} of {} pixels weighted, centroid=({:.4}, {:.4}) axis=({:.4}, {:.4}) anisotropy={:.3}",
        moments.count,
        image.pixel_count(),
        centroid[0],
        centroid[1],
        axis.direction.x,
        axis.direction.y,
        axis.anisotropy()
    );

    CentroidAndDirection {
        centroid: Vector2::new(centroid[0] as f32, centroid[1] as f32),
        main_direction: axis.direction,
        eigenvalues: [axis.lambda_major, axis.lambda_minor],
        total_weight: moments.sum_w as f32,
    }
}

/// Entry-point variant that rejects inputs the analysis cannot say anything
/// about: empty images, non-finite thresholds and images with zero weight.
pub fn analyze_checked(
    image: &Field2D<Color>,
    threshold: f32,
    channel: Channel,
) -> Result<CentroidAndDirection> {
    Error::check_dims(image.w, image.h)?;
    if !threshold.is_finite() {
        return Err(Error::invalid(format!("threshold must be finite, got {threshold}")));
    }
    let result = analyze(image, threshold, channel);
    if result.is_degenerate() {
        return Err(Error::invalid(format!(
            "no pixel of the {}x{} image exceeds threshold {threshold} on {channel:?}",
            image.w, image.h
        )));
    }
    Ok(result)
}
