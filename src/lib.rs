#![doc = include_str!("../README.md")]

// Core algorithms
pub mod align;
pub mod angle;
pub mod field;
pub mod filters;
pub mod jfa;

// Drivers, tooling and I/O
pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod io;
pub mod morph;

// --- High-level re-exports -------------------------------------------------

pub use crate::align::{analyze, analyze_checked, CentroidAndDirection, Compensation};
pub use crate::angle::shortest_rotation_angle;
pub use crate::error::{Error, Result};
pub use crate::field::{Channel, Color, Field2D};
pub use crate::jfa::{
    generate_distance_field, generate_distance_field_with, generate_packed_sdf, DistanceField,
    JfaOptions, JumpSchedule, SeedField, SeedRule,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use distance_field::prelude::*;
///
/// # fn main() -> distance_field::Result<()> {
/// let mask = Field2D::from_fn(64, 64, |x, y| x == 32 && y == 32);
/// let df = generate_distance_field(&mask, false)?;
/// println!("corner distance = {:.3} px", df.get_pixels(0, 0));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::align::{analyze, CentroidAndDirection, Compensation};
    pub use crate::field::{Channel, Color, Field2D};
    pub use crate::jfa::{generate_distance_field, DistanceField, JfaOptions, SeedRule};
    pub use crate::morph::{LerpAnimator, MorphCompensator};
}
