//! Closed-form eigen-decomposition of a symmetric 2×2 covariance.
use super::moments::Covariance;
use nalgebra::Vector2;

/// Off-diagonal magnitude below which the covariance is treated as diagonal.
pub const DIAGONAL_EPS: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrincipalAxis {
    /// Unit eigenvector of the larger eigenvalue. Sign is arbitrary.
    pub direction: Vector2<f32>,
    pub lambda_major: f32,
    pub lambda_minor: f32,
}

impl PrincipalAxis {
    /// `(λ1 − λ2) / (λ1 + λ2)` in `[0, 1]`; near zero the direction carries no
    /// information.
    pub fn anisotropy(&self) -> f32 {
        let sum = self.lambda_major + self.lambda_minor;
        if sum <= f32::EPSILON {
            0.0
        } else {
            ((self.lambda_major - self.lambda_minor) / sum).clamp(0.0, 1.0)
        }
    }
}

pub fn principal_axis(cov: &Covariance) -> PrincipalAxis {
    let trace = cov.sxx + cov.syy;
    let det = cov.sxx * cov.syy - cov.sxy * cov.sxy;
    let disc = (trace * trace / 4.0 - det).max(0.0);
    let root = disc.sqrt();
    let lambda1 = trace / 2.0 + root;
    let lambda2 = trace / 2.0 - root;

    let direction = if cov.sxy.abs() < DIAGONAL_EPS {
        if cov.sxx >= cov.syy {
            Vector2::x()
        } else {
            Vector2::y()
        }
    } else {
        // (Sxx - λ1)·x + Sxy·y = 0 with x = 1
        let y = (lambda1 - cov.sxx) / cov.sxy;
        Vector2::new(1.0f32, y as f32).normalize()
    };

    PrincipalAxis {
        direction,
        lambda_major: lambda1 as f32,
        lambda_minor: lambda2.max(0.0) as f32,
    }
}
