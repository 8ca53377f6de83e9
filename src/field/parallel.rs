//! Parallel-map primitive over field rows.
//!
//! Every helper here is one pass: rows are computed independently (rayon
//! `par_chunks_mut` with the `parallel` feature, a plain loop otherwise) and
//! the call returns only once every row is written. Inputs are borrowed
//! immutably, so a pass can never observe its own writes.
use super::Field2D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Overwrite every row of `out` with `f(y, row)`.
pub fn fill_rows<T, F>(out: &mut Field2D<T>, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    let w = out.w;
    let stride = out.stride;
    if w == 0 || out.h == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    out.data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| f(y, &mut row[..w]));

    #[cfg(not(feature = "parallel"))]
    for (y, row) in out.data.chunks_mut(stride).enumerate() {
        f(y, &mut row[..w]);
    }
}

/// Per-pixel map producing a new field of the same size.
pub fn map_pixels<T, U, F>(src: &Field2D<T>, f: F) -> Field2D<U>
where
    T: Copy + Sync,
    U: Copy + Default + Send,
    F: Fn(usize, usize, T) -> U + Sync + Send,
{
    let mut out = Field2D::new(src.w, src.h);
    fill_rows(&mut out, |y, row| {
        let start = y * src.stride;
        let src_row = &src.data[start..start + src.w];
        for (x, (dst, &px)) in row.iter_mut().zip(src_row).enumerate() {
            *dst = f(x, y, px);
        }
    });
    out
}

/// Per-pixel combination of two equally sized fields.
///
/// Panics if the dimensions differ; callers validate at their entry points.
pub fn zip_pixels<A, B, U, F>(a: &Field2D<A>, b: &Field2D<B>, f: F) -> Field2D<U>
where
    A: Copy + Sync,
    B: Copy + Sync,
    U: Copy + Default + Send,
    F: Fn(A, B) -> U + Sync + Send,
{
    assert!(a.same_dims(b), "zip_pixels requires equal dimensions");
    map_pixels(a, |x, y, pa| f(pa, b.get(x, y)))
}

/// Row-wise reduction: `fold` accumulates one row index into an accumulator,
/// `merge` combines partial accumulators. `merge` must be associative.
pub fn reduce_rows<A, I, F, M>(h: usize, identity: I, fold: F, merge: M) -> A
where
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, usize) -> A + Sync + Send,
    M: Fn(A, A) -> A + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        (0..h)
            .into_par_iter()
            .fold(&identity, &fold)
            .reduce(&identity, &merge)
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = &merge;
        (0..h).fold(identity(), fold)
    }
}

/// Run two independent computations, concurrently when possible.
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    {
        rayon::join(a, b)
    }

    #[cfg(not(feature = "parallel"))]
    {
        (a(), b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldView;

    #[test]
    fn map_pixels_sees_coordinates() {
        let src = Field2D::filled(5, 4, 1u32);
        let out = map_pixels(&src, |x, y, v| v + (x as u32) * 10 + y as u32);
        assert_eq!(out.get(0, 0), 1);
        assert_eq!(out.get(4, 3), 44);
    }

    #[test]
    fn reduce_rows_sums_everything() {
        let src = Field2D::from_fn(7, 9, |x, y| (x * y) as u64);
        let total = reduce_rows(
            src.h,
            || 0u64,
            |acc, y| acc + src.row(y).iter().sum::<u64>(),
            |a, b| a + b,
        );
        assert_eq!(total, src.pixels().sum::<u64>());
    }

    #[test]
    fn fill_rows_on_empty_field_is_noop() {
        let mut empty: Field2D<f32> = Field2D::new(0, 0);
        fill_rows(&mut empty, |_, _| panic!("no rows expected"));
        assert!(empty.is_empty());
    }
}
