use distance_field::field::{Color, Field2D};

/// Mask with a single seed pixel.
pub fn point_mask(width: usize, height: usize, sx: usize, sy: usize) -> Field2D<bool> {
    assert!(sx < width && sy < height, "seed must lie inside the mask");
    Field2D::from_fn(width, height, |x, y| x == sx && y == sy)
}

/// Filled disc of `radius` pixels centred at `(cx, cy)`.
pub fn disc_mask(width: usize, height: usize, cx: f32, cy: f32, radius: f32) -> Field2D<bool> {
    Field2D::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        dx * dx + dy * dy <= radius * radius
    })
}

/// Filled ellipse with semi-axes `a` (along `angle_rad`) and `b`.
pub fn ellipse_mask(
    width: usize,
    height: usize,
    center: (f32, f32),
    a: f32,
    b: f32,
    angle_rad: f32,
) -> Field2D<bool> {
    let (sin, cos) = angle_rad.sin_cos();
    Field2D::from_fn(width, height, |x, y| {
        let dx = x as f32 - center.0;
        let dy = y as f32 - center.1;
        let u = dx * cos + dy * sin;
        let v = -dx * sin + dy * cos;
        (u / a).powi(2) + (v / b).powi(2) <= 1.0
    })
}

/// Paint a mask into the green channel, the analysis channel of keyframes.
pub fn green_image(mask: &Field2D<bool>) -> Field2D<Color> {
    Field2D::from_fn(mask.w, mask.h, |x, y| {
        if mask.get(x, y) {
            Color::rgb(0.0, 1.0, 0.0)
        } else {
            Color::BLACK
        }
    })
}

/// Brute-force Euclidean distance (pixels) to the nearest `true` pixel.
pub fn brute_force_distance(mask: &Field2D<bool>, x: usize, y: usize) -> f32 {
    let mut best = f32::INFINITY;
    for sy in 0..mask.h {
        for sx in 0..mask.w {
            if mask.get(sx, sy) {
                let dx = sx as f32 - x as f32;
                let dy = sy as f32 - y as f32;
                best = best.min((dx * dx + dy * dy).sqrt());
            }
        }
    }
    best
}
