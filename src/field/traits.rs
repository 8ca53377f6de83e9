/// Read-only row access to a 2D grid of `Copy` samples.
pub trait FieldView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn row(&self, y: usize) -> &[Self::Sample];

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }
}
