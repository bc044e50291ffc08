pub mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use io::Backend;
use std::path::PathBuf;
use types::{generated_filename, iconset_entries, Manifest, GENERATED_SIZES};

pub const DEFAULT_OUTPUT_DIR: &str = "Assets.xcassets/AppIcon.appiconset";
pub const DEFAULT_SOURCE: &str = "assets/icons/App Store.png";
pub const DEFAULT_ICONSET: &str = "build/MoPort.app/Contents/Resources/AppIcon.iconset";

/// Build-time generators for the MoPort macOS app icon
#[derive(Parser, Debug)]
#[command(name = "moport-icons", version, about, long_about = None)]
pub struct Args {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw the waveform icon at every size and write the asset catalog
    Generate(GenerateArgs),
    /// Resize a source image into an iconset and bundle it as .icns
    Package(PackageArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Asset catalog directory receiving the PNGs and Contents.json
    #[arg(long, env = "MOPORT_ICON_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Pixel sizes to draw
    #[arg(long, value_delimiter = ',', default_values_t = GENERATED_SIZES.to_vec())]
    pub sizes: Vec<u32>,

    /// Skip writing Contents.json
    #[arg(long)]
    pub no_manifest: bool,
}

#[derive(clap::Args, Debug)]
pub struct PackageArgs {
    /// Square source artwork
    #[arg(long, env = "MOPORT_ICON_SOURCE", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Intermediate .iconset directory
    #[arg(long, env = "MOPORT_ICON_ICONSET", default_value = DEFAULT_ICONSET)]
    pub iconset: PathBuf,

    /// Output .icns (defaults to the iconset path with an .icns extension)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Packaging backend: auto, iconutil or builtin
    #[arg(long, env = "MOPORT_ICON_BACKEND", default_value = "auto")]
    pub backend: Backend,

    /// Leave the iconset directory in place after packaging
    #[arg(long)]
    pub keep_iconset: bool,
}

#[derive(Debug, Default)]
pub struct GenerateReport {
    pub files: Vec<(u32, PathBuf)>,
    pub manifest: Option<PathBuf>,
}

impl GenerateReport {
    pub fn largest(&self) -> Option<&PathBuf> {
        self.files.iter().max_by_key(|(size, _)| *size).map(|(_, path)| path)
    }
}

/// Draw every requested size into `output_dir`, then the manifest.
pub fn run_generate(args: &GenerateArgs) -> Result<GenerateReport> {
    tracing::info!("Output directory: {}", args.output_dir.display());
    let mut report = GenerateReport::default();

    for &size in &args.sizes {
        let img = render::compose_icon(size).with_context(|| format!("drawing {size}x{size} icon"))?;
        let path = args.output_dir.join(generated_filename(size));
        io::save_png(&img, &path).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Generated {size}x{size}");
        report.files.push((size, path));
    }

    if !args.no_manifest {
        let manifest = Manifest::app_icon();
        for px in manifest.pixel_sizes() {
            if !args.sizes.contains(&px) {
                tracing::warn!("{} references {} which was not generated", io::MANIFEST_FILE, generated_filename(px));
            }
        }
        let path = io::write_manifest(&manifest, &args.output_dir).context("writing asset catalog manifest")?;
        tracing::info!("{} created", io::MANIFEST_FILE);
        report.manifest = Some(path);
    }

    Ok(report)
}

/// Resize the source into an iconset, bundle it and drop the iconset.
pub fn run_package(args: &PackageArgs) -> Result<PathBuf> {
    let source = io::load_source(&args.source)
        .with_context(|| format!("loading source image {}", args.source.display()))?;
    io::write_iconset(&source, &args.iconset, &iconset_entries())
        .with_context(|| format!("populating {}", args.iconset.display()))?;

    let output = args.output.clone().unwrap_or_else(|| io::default_output(&args.iconset));
    if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let packager = args.backend.packager();
    tracing::info!("Packaging with {}", packager.name());
    packager
        .package(&args.iconset, &output)
        .with_context(|| format!("{} could not build {}", packager.name(), output.display()))?;
    tracing::info!("Created icns file");

    if !args.keep_iconset && io::remove_iconset(&args.iconset) {
        tracing::debug!("removed {}", args.iconset.display());
    }
    Ok(output)
}
