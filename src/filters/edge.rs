//! Sobel gradient magnitude on luma.
//!
//! - Convolves the 3×3 Sobel pair over the luma of each pixel with border
//!   clamping (replicate), so the stencil spans exactly one texel in each
//!   direction regardless of resolution.
//! - The raw magnitude of a unit step is 4; outputs are scaled by 1/4 and
//!   clamped to `[0, 1]`.
use crate::field::parallel::{fill_rows, map_pixels};
use crate::field::{Color, Field2D, FieldView};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Magnitude of a unit luma step under the Sobel pair.
const STEP_RESPONSE: f32 = 4.0;

/// Raw Sobel gradient magnitude of a scalar field.
pub fn sobel_magnitude(l: &Field2D<f32>) -> Field2D<f32> {
    let (w, h) = (l.w, l.h);
    let mut mag = Field2D::new(w, h);
    if w == 0 || h == 0 {
        return mag;
    }

    fill_rows(&mut mag, |y, out| {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        for (x, out_px) in out.iter_mut().enumerate() {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }
            *out_px = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    });
    mag
}

/// Edge image: gray magnitude in the color channels, source alpha kept.
pub fn edge_magnitude(image: &Field2D<Color>) -> Field2D<Color> {
    let luma = map_pixels(image, |_, _, px| px.luma());
    let mag = sobel_magnitude(&luma);
    map_pixels(image, |x, y, px| {
        let v = (mag.get(x, y) / STEP_RESPONSE).clamp(0.0, 1.0);
        Color::new(v, v, v, px.a)
    })
}
