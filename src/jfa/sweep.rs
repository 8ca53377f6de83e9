//! Jump-flood passes over a nearest-seed map.
//!
//! Each pixel carries the coordinate of the closest seed found so far. A pass
//! with offset `s` lets every pixel inspect the 8 pixels at `(±s, ±s)`,
//! `(±s, 0)`, `(0, ±s)` (clamped to the border) plus itself, and adopt the
//! candidate seed closest to it. Passes read the previous buffer and write the
//! other; the two buffers swap roles after every pass.
use crate::field::parallel::{fill_rows, map_pixels};
use crate::field::Field2D;
use log::debug;

use super::seeds::SeedField;

/// Coordinate of the nearest known seed, or [`NO_SEED`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedCoord {
    pub x: i32,
    pub y: i32,
}

pub const NO_SEED: SeedCoord = SeedCoord {
    x: i32::MIN,
    y: i32::MIN,
};

impl Default for SeedCoord {
    fn default() -> Self {
        NO_SEED
    }
}

impl SeedCoord {
    #[inline]
    pub fn is_valid(&self) -> bool {
        *self != NO_SEED
    }

    /// Squared pixel distance from `(x, y)`; exact in integer arithmetic.
    #[inline]
    pub fn dist2(&self, x: i64, y: i64) -> i64 {
        let dx = self.x as i64 - x;
        let dy = self.y as i64 - y;
        dx * dx + dy * dy
    }
}

const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Seed pixels point at themselves, everything else is unresolved.
pub fn init_nearest(mask: &SeedField) -> Field2D<SeedCoord> {
    map_pixels(mask, |x, y, seed| {
        if seed {
            SeedCoord {
                x: x as i32,
                y: y as i32,
            }
        } else {
            NO_SEED
        }
    })
}

/// One jump pass: read `prev`, write `next`.
pub fn jump_pass(prev: &Field2D<SeedCoord>, next: &mut Field2D<SeedCoord>, offset: i64) {
    debug_assert!(prev.same_dims(next));
    fill_rows(next, |y, row| {
        let yi = y as i64;
        for (x, out) in row.iter_mut().enumerate() {
            let xi = x as i64;
            let mut best = prev.get(x, y);
            let mut best_d2 = if best.is_valid() {
                best.dist2(xi, yi)
            } else {
                i64::MAX
            };
            for &(dx, dy) in &NEIGHBOURS {
                let cand = prev.get_clamped(xi + dx * offset, yi + dy * offset);
                if !cand.is_valid() {
                    continue;
                }
                let d2 = cand.dist2(xi, yi);
                if d2 < best_d2 {
                    best_d2 = d2;
                    best = cand;
                }
            }
            *out = best;
        }
    });
}

/// Run the full jump-flood sweep for the given offsets.
pub fn flood(mask: &SeedField, offsets: &[i64]) -> Field2D<SeedCoord> {
    let mut current = init_nearest(mask);
    if current.is_empty() {
        return current;
    }
    let mut scratch = Field2D::filled(mask.w, mask.h, NO_SEED);
    for (pass, &offset) in offsets.iter().enumerate() {
        jump_pass(&current, &mut scratch, offset);
        std::mem::swap(&mut current, &mut scratch);
        debug!(
            "jfa pass {}/{} offset={} on {}x{}",
            pass + 1,
            offsets.len(),
            offset,
            mask.w,
            mask.h
        );
    }
    current
}

/// Convert a nearest-seed map into distances divided by `norm`.
/// Pixels without a seed receive `unreachable`.
pub fn resolve_distances(nearest: &Field2D<SeedCoord>, norm: f32, unreachable: f32) -> Field2D<f32> {
    map_pixels(nearest, |x, y, seed| {
        if seed.is_valid() {
            (seed.dist2(x as i64, y as i64) as f32).sqrt() / norm
        } else {
            unreachable
        }
    })
}
