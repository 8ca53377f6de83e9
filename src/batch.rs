//! Batch actions over several input images.
//!
//! Each action processes every input independently and writes a sibling file
//! (`_df.exr`, `_sdf.exr`, `_copy.png`). A failing input is logged with
//! `warn!` and recorded as skipped; the remaining inputs are still processed.
use crate::diagnostics::{BatchReport, SkippedInput};
use crate::error::Result;
use crate::field::{Color, Field2D};
use crate::filters::FilterKind;
use crate::io::{
    load_color_image, save_color_field, sibling_output_path, COPY_SUFFIX, DF_SUFFIX, SDF_SUFFIX,
};
use crate::jfa::{
    generate_distance_field_with, generate_packed_sdf, seeds_from_image, JfaOptions, SeedRule,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Unsigned,
    Signed,
}

/// Channel layout of signed outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SdfLayout {
    /// R = distance to the shape, G = distance to the background.
    #[default]
    Packed,
    /// Single signed value replicated in RGB.
    Signed,
}

/// Settings for the distance field actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub seed_rule: SeedRule,
    pub jfa: JfaOptions,
    pub sdf_layout: SdfLayout,
}

/// Distance field image for one decoded input.
pub fn distance_field_image(
    image: &Field2D<Color>,
    kind: FieldKind,
    options: &GenerateOptions,
) -> Result<Field2D<Color>> {
    let mask = seeds_from_image(image, &options.seed_rule);
    match (kind, options.sdf_layout) {
        (FieldKind::Unsigned, _) => {
            Ok(generate_distance_field_with(&mask, false, &options.jfa)?.to_color_field())
        }
        (FieldKind::Signed, SdfLayout::Packed) => generate_packed_sdf(&mask, &options.jfa),
        (FieldKind::Signed, SdfLayout::Signed) => {
            Ok(generate_distance_field_with(&mask, true, &options.jfa)?.to_color_field())
        }
    }
}

/// Generate a distance field next to every input.
pub fn generate_for_paths(
    inputs: &[PathBuf],
    kind: FieldKind,
    options: &GenerateOptions,
) -> BatchReport {
    let suffix = match kind {
        FieldKind::Unsigned => DF_SUFFIX,
        FieldKind::Signed => SDF_SUFFIX,
    };
    run_batch(inputs, suffix, "exr", |image| {
        distance_field_image(image, kind, options)
    })
}

/// Apply `filter` to every input, writing `<name>_copy.png`.
pub fn filter_paths(inputs: &[PathBuf], filter: FilterKind) -> BatchReport {
    run_batch(inputs, COPY_SUFFIX, "png", |image| Ok(filter.apply(image)))
}

fn run_batch<F>(inputs: &[PathBuf], suffix: &str, ext: &str, process: F) -> BatchReport
where
    F: Fn(&Field2D<Color>) -> Result<Field2D<Color>>,
{
    let mut report = BatchReport::default();
    for input in inputs {
        let label = input.display().to_string();
        match report.timing.time(label, || process_one(input, suffix, ext, &process)) {
            Ok(out) => {
                info!("{} -> {}", input.display(), out.display());
                report.written.push(out);
            }
            Err(err) => {
                warn!("skipping {}: {err}", input.display());
                report.skipped.push(SkippedInput {
                    input: input.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    report
}

fn process_one<F>(input: &Path, suffix: &str, ext: &str, process: &F) -> Result<PathBuf>
where
    F: Fn(&Field2D<Color>) -> Result<Field2D<Color>>,
{
    let image = load_color_image(input)?;
    let output = process(&image)?;
    let path = sibling_output_path(input, suffix, ext);
    save_color_field(&output, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disc(n: usize, r: f32) -> Field2D<Color> {
        let c = (n as f32 - 1.0) / 2.0;
        Field2D::from_fn(n, n, |x, y| {
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
            if d <= r {
                Color::WHITE
            } else {
                Color::BLACK
            }
        })
    }

    #[test]
    fn unsigned_image_is_zero_inside() {
        let img = disc(21, 5.0);
        let out =
            distance_field_image(&img, FieldKind::Unsigned, &GenerateOptions::default()).unwrap();
        assert_eq!(out.get(10, 10).r, 0.0);
        assert!(out.get(0, 0).r > 0.0);
        assert_eq!(out.get(0, 0).a, 1.0);
    }

    #[test]
    fn packed_layout_fills_red_and_green() {
        let img = disc(21, 5.0);
        let out =
            distance_field_image(&img, FieldKind::Signed, &GenerateOptions::default()).unwrap();
        let center = out.get(10, 10);
        let corner = out.get(0, 0);
        assert_eq!(center.r, 0.0);
        assert!(center.g > 0.0);
        assert!(corner.r > 0.0);
        assert_eq!(corner.g, 0.0);
    }

    #[test]
    fn missing_input_is_skipped_not_fatal() {
        let inputs = vec![PathBuf::from("does/not/exist.png")];
        let report = generate_for_paths(&inputs, FieldKind::Signed, &GenerateOptions::default());
        assert!(report.written.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.timing.stages.len(), 1);
    }
}
