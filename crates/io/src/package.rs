//! Bundling an `.iconset` directory into an `.icns` container.

use crate::{io_err, IconError, Result};
use icns::{IconFamily, IconType, Image};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

pub trait Packager {
    fn name(&self) -> &'static str;
    fn package(&self, iconset: &Path, output: &Path) -> Result<()>;
}

/// `AppIcon.iconset` -> `AppIcon.icns`, next to the iconset like `iconutil` does.
pub fn default_output(iconset: &Path) -> PathBuf {
    iconset.with_extension("icns")
}

/// Apple's `iconutil`, only present on macOS.
pub struct Iconutil;

impl Packager for Iconutil {
    fn name(&self) -> &'static str {
        "iconutil"
    }

    fn package(&self, iconset: &Path, output: &Path) -> Result<()> {
        tracing::debug!("RUN: iconutil -c icns {} -o {}", iconset.display(), output.display());
        let out = Command::new("iconutil")
            .args(["-c", "icns"])
            .arg(iconset)
            .arg("-o")
            .arg(output)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => IconError::ToolMissing { tool: "iconutil".into() },
                _ => IconError::Io { path: PathBuf::from("iconutil"), source: e },
            })?;
        if !out.status.success() {
            return Err(IconError::ToolFailed {
                tool: "iconutil".into(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Pure-Rust encoder backed by the `icns` crate.
pub struct Builtin;

/// icns slot for an iconset file name; `None` for files icns has no slot for.
pub fn icon_type_for(filename: &str) -> Option<IconType> {
    let ty = match filename {
        "icon_16x16.png" => IconType::RGBA32_16x16,
        "icon_16x16@2x.png" => IconType::RGBA32_16x16_2x,
        "icon_32x32.png" => IconType::RGBA32_32x32,
        "icon_32x32@2x.png" => IconType::RGBA32_32x32_2x,
        "icon_128x128.png" => IconType::RGBA32_128x128,
        "icon_128x128@2x.png" => IconType::RGBA32_128x128_2x,
        "icon_256x256.png" => IconType::RGBA32_256x256,
        "icon_256x256@2x.png" => IconType::RGBA32_256x256_2x,
        "icon_512x512.png" => IconType::RGBA32_512x512,
        "icon_512x512@2x.png" => IconType::RGBA32_512x512_2x,
        _ => return None,
    };
    Some(ty)
}

impl Packager for Builtin {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn package(&self, iconset: &Path, output: &Path) -> Result<()> {
        let mut names: Vec<String> = std::fs::read_dir(iconset)
            .map_err(io_err(iconset))?
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();

        let mut family = IconFamily::new();
        for name in names {
            let Some(ty) = icon_type_for(&name) else {
                tracing::debug!("skipping {name}: no icns slot");
                continue;
            };
            let path = iconset.join(&name);
            let reader = BufReader::new(File::open(&path).map_err(io_err(&path))?);
            let image = Image::read_png(reader).map_err(io_err(&path))?;
            family.add_icon_with_type(&image, ty).map_err(io_err(&path))?;
            tracing::debug!("added {name}");
        }

        let file = File::create(output).map_err(io_err(output))?;
        let mut writer = BufWriter::new(file);
        family.write(&mut writer).map_err(io_err(output))?;
        writer.flush().map_err(io_err(output))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    #[default]
    Auto,
    Iconutil,
    Builtin,
}

impl Backend {
    /// `Auto` resolves to `iconutil` on macOS and the builtin encoder elsewhere.
    pub fn resolve(self) -> Backend {
        match self {
            Backend::Auto if cfg!(target_os = "macos") => Backend::Iconutil,
            Backend::Auto => Backend::Builtin,
            other => other,
        }
    }

    pub fn packager(self) -> Box<dyn Packager> {
        match self.resolve() {
            Backend::Iconutil => Box::new(Iconutil),
            _ => Box::new(Builtin),
        }
    }
}

impl FromStr for Backend {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "iconutil" => Ok(Backend::Iconutil),
            "builtin" => Ok(Backend::Builtin),
            _ => Err(IconError::UnknownBackend(s.to_string())),
        }
    }
}
