pub mod package;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use types::{IconsetEntry, Manifest};

pub use package::{default_output, Backend, Builtin, Iconutil, Packager};

pub const MANIFEST_FILE: &str = "Contents.json";

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{tool}` was not found on PATH")]
    ToolMissing { tool: String },

    #[error("`{tool}` failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("invalid icon size {0}")]
    InvalidSize(u32),

    #[error("unknown packaging backend `{0}` (expected auto, iconutil or builtin)")]
    UnknownBackend(String),
}

pub type Result<T> = std::result::Result<T, IconError>;

pub(crate) fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> IconError + '_ {
    move |source| IconError::Io { path: path.to_path_buf(), source }
}

fn image_err(path: &Path) -> impl FnOnce(image::ImageError) -> IconError + '_ {
    move |source| IconError::Image { path: path.to_path_buf(), source }
}

/// Write `img` as PNG, creating parent directories first.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(io_err(dir))?;
        }
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(image_err(path))
}

/// Open a source image and normalise it to RGBA8.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(image_err(path))?.to_rgba8();
    let (w, h) = img.dimensions();
    if w != h {
        tracing::warn!(width = w, height = h, "source {} is not square; output will be stretched", path.display());
    }
    tracing::debug!(width = w, height = h, "loaded {}", path.display());
    Ok(img)
}

/// Lanczos3 resample to a `pixels` x `pixels` square.
pub fn resize(img: &RgbaImage, pixels: u32) -> Result<RgbaImage> {
    if pixels == 0 {
        return Err(IconError::InvalidSize(pixels));
    }
    if img.dimensions() == (pixels, pixels) {
        return Ok(img.clone());
    }
    Ok(imageops::resize(img, pixels, pixels, FilterType::Lanczos3))
}

/// Populate an `.iconset` directory from one source image.
pub fn write_iconset(source: &RgbaImage, dir: &Path, entries: &[IconsetEntry]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;
    let mut resized: BTreeMap<u32, RgbaImage> = BTreeMap::new();
    let mut written = Vec::with_capacity(entries.len());
    for entry in entries {
        if !resized.contains_key(&entry.pixels) {
            resized.insert(entry.pixels, resize(source, entry.pixels)?);
        }
        let path = dir.join(&entry.filename);
        save_png(&resized[&entry.pixels], &path)?;
        tracing::info!("Generated {}", entry.filename);
        written.push(path);
    }
    Ok(written)
}

/// Write `Contents.json` into an asset catalog directory.
pub fn write_manifest(manifest: &Manifest, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(io_err(dir))?;
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"  ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    manifest.serialize(&mut ser)?;
    buf.push(b'\n');
    let path = dir.join(MANIFEST_FILE);
    std::fs::write(&path, buf).map_err(io_err(&path))?;
    Ok(path)
}

/// Remove the intermediate iconset. Failure only warns.
pub fn remove_iconset(dir: &Path) -> bool {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("could not remove {}: {}", dir.display(), e);
            false
        }
    }
}
