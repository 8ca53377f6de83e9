//! Dense row-major 2D grids.
//!
//! [`Field2D`] is the common currency between stages: seed masks
//! (`Field2D<bool>`), nearest-seed maps, distance values (`Field2D<f32>`) and
//! color images (`Field2D<Color>`). Storage is a single `Vec<T>` with
//! `stride == w`; rows are exposed through [`FieldView`].
//! Out-of-range reads go through [`Field2D::get_clamped`], which replicates
//! the border.

pub mod color;
pub mod parallel;
pub mod traits;

pub use self::color::{Channel, Color};
pub use self::traits::FieldView;

#[derive(Clone, Debug, PartialEq)]
pub struct Field2D<T> {
    /// Field width in pixels
    pub w: usize,
    /// Field height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy> Field2D<T> {
    /// Construct a `w × h` field with every element set to `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` on a length mismatch.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a field by evaluating `f(x, y)` for every pixel in row order.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Read with signed coordinates, clamping to the field extents.
    ///
    /// Panics on an empty field.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> T {
        let cx = x.clamp(0, self.w as i64 - 1) as usize;
        let cy = y.clamp(0, self.h as i64 - 1) as usize;
        self.get(cx, cy)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    pub fn same_dims<U>(&self, other: &Field2D<U>) -> bool {
        self.w == other.w && self.h == other.h
    }

    pub fn pixels(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }
}

impl<T: Copy + Default> Field2D<T> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, T::default())
    }
}

impl<T: Copy> FieldView for Field2D<T> {
    type Sample = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
