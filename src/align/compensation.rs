use super::CentroidAndDirection;
use crate::angle::{rotate, shortest_rotation_angle};
use nalgebra::Vector2;
use serde::Serialize;

/// Translation and rotation that carry one keyframe's shape onto the next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compensation {
    pub from: CentroidAndDirection,
    pub to: CentroidAndDirection,
    /// `to.centroid − from.centroid` in UV units.
    pub movement: Vector2<f32>,
    /// Radians in `[-π/2, π/2]`.
    pub rotation: f32,
}

impl Default for Compensation {
    fn default() -> Self {
        Self::between(CentroidAndDirection::default(), CentroidAndDirection::default())
    }
}

impl Compensation {
    pub fn between(from: CentroidAndDirection, to: CentroidAndDirection) -> Self {
        Self {
            movement: to.centroid - from.centroid,
            rotation: shortest_rotation_angle(&from.main_direction, &to.main_direction),
            from,
            to,
        }
    }

    /// Centroid linearly interpolated at `progress ∈ [0, 1]`.
    pub fn centroid_at(&self, progress: f32) -> Vector2<f32> {
        self.from.centroid + self.movement * progress
    }

    /// Start axis rotated by the same fraction of the compensation angle.
    pub fn direction_at(&self, progress: f32) -> Vector2<f32> {
        rotate(&self.from.main_direction, self.rotation * progress)
    }
}
