//! Debug primitives for visualizing a morph compensation.
//!
//! UV coordinates map to an overlay plane centred on the origin:
//! `world = ((u − 0.5)·s, (v − 0.5)·s, 0)` with `s = world_scale`.
use crate::align::Compensation;
use crate::angle::rotate;
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DebugPrimitive {
    Sphere {
        center: Vector3<f32>,
        radius: f32,
        color: [f32; 3],
    },
    Line {
        from: Vector3<f32>,
        to: Vector3<f32>,
        color: [f32; 3],
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub world_scale: f32,
    pub marker_size: f32,
    pub draw_compensation_line: bool,
    pub draw_interpolated_point: bool,
    pub trend_line_length: f32,
    pub draw_trend_lines: bool,
    pub draw_interpolated_trend_line: bool,
    pub start_color: [f32; 3],
    pub end_color: [f32; 3],
    pub compensation_color: [f32; 3],
    pub interpolated_color: [f32; 3],
    pub start_trend_color: [f32; 3],
    pub end_trend_color: [f32; 3],
    pub interpolated_trend_color: [f32; 3],
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            world_scale: 8.0,
            marker_size: 0.05,
            draw_compensation_line: true,
            draw_interpolated_point: true,
            trend_line_length: 0.5,
            draw_trend_lines: true,
            draw_interpolated_trend_line: true,
            start_color: [1.0, 0.0, 0.0],
            end_color: [0.0, 1.0, 0.0],
            compensation_color: [0.0, 0.0, 1.0],
            interpolated_color: [1.0, 0.92, 0.016],
            start_trend_color: [1.0, 0.2, 0.2],
            end_trend_color: [0.2, 1.0, 0.2],
            interpolated_trend_color: [1.0, 1.0, 0.2],
        }
    }
}

impl OverlaySettings {
    pub fn uv_to_world(&self, uv: &Vector2<f32>) -> Vector3<f32> {
        Vector3::new(
            (uv.x - 0.5) * self.world_scale,
            (uv.y - 0.5) * self.world_scale,
            0.0,
        )
    }

    /// Directions scale without the centring offset.
    pub fn uv_dir_to_world(&self, dir: &Vector2<f32>) -> Vector3<f32> {
        Vector3::new(dir.x * self.world_scale, dir.y * self.world_scale, 0.0)
    }
}

pub(crate) fn build(
    compensation: &Compensation,
    progress: f32,
    settings: &OverlaySettings,
) -> Vec<DebugPrimitive> {
    let start = settings.uv_to_world(&compensation.from.centroid);
    let end = settings.uv_to_world(&compensation.to.centroid);
    let between = start.lerp(&end, progress);

    let mut out = vec![
        DebugPrimitive::Sphere {
            center: start,
            radius: settings.marker_size,
            color: settings.start_color,
        },
        DebugPrimitive::Sphere {
            center: end,
            radius: settings.marker_size,
            color: settings.end_color,
        },
    ];
    if settings.draw_compensation_line {
        out.push(DebugPrimitive::Line {
            from: start,
            to: end,
            color: settings.compensation_color,
        });
    }
    if settings.draw_interpolated_point {
        out.push(DebugPrimitive::Sphere {
            center: between,
            radius: settings.marker_size * 0.8,
            color: settings.interpolated_color,
        });
    }
    if settings.draw_trend_lines {
        trend_line(
            &mut out,
            settings,
            start,
            &compensation.from.main_direction,
            settings.start_trend_color,
            1.0,
        );
        trend_line(
            &mut out,
            settings,
            end,
            &compensation.to.main_direction,
            settings.end_trend_color,
            1.0,
        );
    }
    if settings.draw_interpolated_trend_line && settings.draw_interpolated_point {
        trend_line(
            &mut out,
            settings,
            between,
            &compensation.direction_at(progress),
            settings.interpolated_trend_color,
            0.8,
        );
    }
    out
}

/// Line through `center` along `uv_dir` with a two-stroke arrow head at the end.
fn trend_line(
    out: &mut Vec<DebugPrimitive>,
    settings: &OverlaySettings,
    center: Vector3<f32>,
    uv_dir: &Vector2<f32>,
    color: [f32; 3],
    length_scale: f32,
) {
    let dir = settings.uv_dir_to_world(uv_dir);
    let len = settings.trend_line_length * length_scale;
    let tip = center + dir * len / 2.0;
    out.push(DebugPrimitive::Line {
        from: center - dir * len / 2.0,
        to: tip,
        color,
    });

    let unit = dir.xy().try_normalize(1e-9).unwrap_or_else(Vector2::x);
    let back = -unit;
    let base = tip.xy() - unit * len * 0.1;
    for wing in [30f32, -30.0] {
        let w = base + rotate(&back, wing.to_radians()) * len * 0.05;
        out.push(DebugPrimitive::Line {
            from: tip,
            to: Vector3::new(w.x, w.y, 0.0),
            color,
        });
    }
}
