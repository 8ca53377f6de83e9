/// Weighted raw moments of UV positions, accumulated in f64.
///
/// Accumulators merge associatively, so partial sums from separate rows can
/// be combined in any order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WeightedMoments {
    pub sum_w: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_yy: f64,
    pub sum_xy: f64,
    pub count: usize,
}

/// Central second moments normalized by the total weight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Covariance {
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

impl WeightedMoments {
    #[inline]
    pub fn push(&mut self, u: f64, v: f64, w: f64) {
        self.sum_w += w;
        self.sum_x += w * u;
        self.sum_y += w * v;
        self.sum_xx += w * u * u;
        self.sum_yy += w * v * v;
        self.sum_xy += w * u * v;
        self.count += 1;
    }

    pub fn merge(mut self, other: Self) -> Self {
        self.sum_w += other.sum_w;
        self.sum_x += other.sum_x;
        self.sum_y += other.sum_y;
        self.sum_xx += other.sum_xx;
        self.sum_yy += other.sum_yy;
        self.sum_xy += other.sum_xy;
        self.count += other.count;
        self
    }

    /// Weighted mean position, `None` when the total weight is negligible.
    pub fn centroid(&self) -> Option<[f64; 2]> {
        (self.sum_w > f32::EPSILON as f64)
            .then(|| [self.sum_x / self.sum_w, self.sum_y / self.sum_w])
    }

    pub fn covariance(&self) -> Option<Covariance> {
        let [cx, cy] = self.centroid()?;
        let w = self.sum_w;
        Some(Covariance {
            sxx: (self.sum_xx / w - cx * cx).max(0.0),
            syy: (self.sum_yy / w - cy * cy).max(0.0),
            sxy: self.sum_xy / w - cx * cy,
        })
    }
}
