//! I/O helpers for color fields and JSON.
//!
//! - `load_color_image`: decode any format the `image` crate reads into an
//!   RGBA float field (8-bit sources map to `[0, 1]`).
//! - `save_color_field`: write a field as OpenEXR (RGBA32F) or PNG (RGBA8),
//!   chosen by the path extension.
//! - `sibling_output_path`: `dir/name.png` + `_sdf`, `exr` → `dir/name_sdf.exr`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{Error, Result};
use crate::field::{Color, Field2D};
use image::{DynamicImage, ImageFormat, Rgba32FImage, RgbaImage};
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix of unsigned distance field outputs.
pub const DF_SUFFIX: &str = "_df";
/// Suffix of signed distance field outputs.
pub const SDF_SUFFIX: &str = "_sdf";
/// Suffix of filtered image outputs.
pub const COPY_SUFFIX: &str = "_copy";

pub fn load_color_image(path: &Path) -> Result<Field2D<Color>> {
    let img = image::open(path)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba32f();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img
        .into_raw()
        .chunks_exact(4)
        .map(|px| Color::new(px[0], px[1], px[2], px[3]))
        .collect();
    Field2D::from_vec(w, h, data)
        .ok_or_else(|| Error::invalid(format!("{} decoded to a truncated buffer", path.display())))
}

/// Save as OpenEXR (`.exr`, full float precision) or PNG (`.png`, values
/// clamped to `[0, 1]` and quantized to 8 bits).
pub fn save_color_field(field: &Field2D<Color>, path: &Path) -> Result<()> {
    Error::check_dims(field.w, field.h)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let image = match ext.as_deref() {
        Some("exr") => {
            let raw: Vec<f32> = field.pixels().flat_map(Color::to_array).collect();
            let buf = Rgba32FImage::from_raw(field.w as u32, field.h as u32, raw)
                .ok_or_else(|| Error::invalid("float buffer does not match dimensions"))?;
            (DynamicImage::ImageRgba32F(buf), ImageFormat::OpenExr)
        }
        Some("png") => {
            let raw: Vec<u8> = field
                .pixels()
                .flat_map(Color::to_array)
                .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
                .collect();
            let buf = RgbaImage::from_raw(field.w as u32, field.h as u32, raw)
                .ok_or_else(|| Error::invalid("byte buffer does not match dimensions"))?;
            (DynamicImage::ImageRgba8(buf), ImageFormat::Png)
        }
        other => {
            return Err(Error::UnsupportedFormat(format!(
                "cannot encode {} (extension {:?}); use .exr or .png",
                path.display(),
                other.unwrap_or("")
            )))
        }
    };
    ensure_parent_dir(path)?;
    let (dynamic, format) = image;
    dynamic
        .save_with_format(path, format)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;
    info!("wrote {}x{} field to {}", field.w, field.h, path.display());
    Ok(())
}

/// Path next to `input` with the extension replaced by `suffix` + `.ext`.
/// Inputs without an extension get the suffix appended to the full name.
pub fn sibling_output_path(input: &Path, suffix: &str, ext: &str) -> PathBuf {
    let name = if input.extension().is_some() {
        input.file_stem()
    } else {
        input.file_name()
    };
    let name = name.map(|n| n.to_string_lossy()).unwrap_or_default();
    input.with_file_name(format!("{name}{suffix}.{ext}"))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and deserialize a JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
