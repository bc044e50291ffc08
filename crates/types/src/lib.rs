use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Hand-tuned MoPort colours: dark grey body, cyber green waveform.
pub struct Palette;

impl Palette {
    pub const BG_TOP: Color = Color::rgb(46, 46, 51); // #2E2E33
    pub const BG_BOTTOM: Color = Color::rgb(56, 56, 60); // #38383C
    pub const GREEN_LIGHT: Color = Color::rgb(0, 255, 128); // #00FF80
    pub const GREEN_DARK: Color = Color::rgb(0, 179, 77); // #00B34D
    pub const BORDER: Color = Color::rgb(255, 255, 255).with_alpha(15);
    pub const HIGHLIGHT: Color = Color::rgb(255, 255, 255);
}

/// One PNG inside an `.iconset` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconsetEntry {
    pub pixels: u32,
    pub filename: String,
}

impl IconsetEntry {
    pub fn new(pixels: u32, filename: impl Into<String>) -> Self {
        Self { pixels, filename: filename.into() }
    }
}

/// Resolutions `iconutil` expects, plus the 1024 master copy.
pub fn iconset_entries() -> Vec<IconsetEntry> {
    [
        (16, "icon_16x16.png"),
        (32, "icon_16x16@2x.png"),
        (32, "icon_32x32.png"),
        (64, "icon_32x32@2x.png"),
        (128, "icon_128x128.png"),
        (256, "icon_128x128@2x.png"),
        (256, "icon_256x256.png"),
        (512, "icon_256x256@2x.png"),
        (512, "icon_512x512.png"),
        (1024, "icon_512x512@2x.png"),
        (1024, "icon_1024x1024.png"),
    ]
    .into_iter()
    .map(|(px, name)| IconsetEntry::new(px, name))
    .collect()
}

/// Pixel sizes written by the procedural generator.
pub const GENERATED_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

pub fn generated_filename(size: u32) -> String {
    format!("icon_{size}x{size}.png")
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    #[serde(rename = "1x")]
    One,
    #[serde(rename = "2x")]
    Two,
}

impl Scale {
    pub fn factor(self) -> u32 {
        match self {
            Scale::One => 1,
            Scale::Two => 2,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: Scale,
    pub size: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

/// `Contents.json` of an Xcode `AppIcon.appiconset`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// The mac app icon slots, each pointing at a file from [`GENERATED_SIZES`].
    pub fn app_icon() -> Self {
        let mut images = Vec::new();
        for points in [16u32, 32, 128, 256, 512] {
            for scale in [Scale::One, Scale::Two] {
                images.push(ManifestImage {
                    filename: generated_filename(points * scale.factor()),
                    idiom: "mac".into(),
                    scale,
                    size: format!("{points}x{points}"),
                });
            }
        }
        Self {
            images,
            info: ManifestInfo { author: "xcode".into(), version: 1 },
        }
    }

    /// Pixel size each entry's file must have.
    pub fn pixel_sizes(&self) -> Vec<u32> {
        self.images
            .iter()
            .filter_map(|img| {
                let (w, _) = img.size.split_once('x')?;
                w.parse::<u32>().ok().map(|p| p * img.scale.factor())
            })
            .collect()
    }
}
