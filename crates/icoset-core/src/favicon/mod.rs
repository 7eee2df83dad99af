//! Favicon set generation for web projects.
//!
//! A set is eight artifacts, produced in this order:
//! - `{prefix}favicon.ico` (16, 32 and 48 px)
//! - `{prefix}favicon-16x16.png`, `{prefix}favicon-32x32.png`
//! - `{prefix}android-chrome-192x192.png`, `{prefix}android-chrome-512x512.png`
//! - `{prefix}apple-touch-icon.png` (180 px, flattened onto a background)
//! - `manifest.json`
//! - `favicon.html`

pub mod html;
pub mod manifest;

use image::DynamicImage;
use tracing::info;

use crate::color::Color;
use crate::container::ico_from_source;
use crate::error::IconError;
use crate::flatten::apple_touch_icon;
use crate::png::encode_png;
use crate::resize::resize;
use crate::sizes::SizeSet;

use self::html::{HTML_FILENAME, HtmlLinks};
use self::manifest::{MANIFEST_FILENAME, ManifestIcon, WebManifest};

/// Inputs to [`generate_favicon_set`] beyond the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconOptions {
    /// Prepended verbatim to image filenames and hrefs. Not validated here.
    pub prefix: String,
    /// Fill behind the apple-touch-icon.
    pub background: Color,
    pub theme_color: Color,
    pub manifest_background: Color,
    pub name: String,
    pub short_name: String,
}

impl FaviconOptions {
    pub fn new(prefix: impl Into<String>, background: Color) -> Self {
        FaviconOptions {
            prefix: prefix.into(),
            background,
            ..FaviconOptions::default()
        }
    }
}

impl Default for FaviconOptions {
    fn default() -> Self {
        FaviconOptions {
            prefix: String::new(),
            background: Color::WHITE,
            theme_color: Color::WHITE,
            manifest_background: Color::WHITE,
            name: String::new(),
            short_name: String::new(),
        }
    }
}

/// One generated file, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Artifact {
            name: name.into(),
            bytes,
        }
    }
}

/// The full set of favicon artifacts, in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconSet {
    pub artifacts: Vec<Artifact>,
}

impl FaviconSet {
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.artifacts
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.bytes.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.artifacts.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// The HTML snippet, as text.
    pub fn html(&self) -> Option<&str> {
        self.get(HTML_FILENAME)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

/// Build every favicon artifact from `source`.
///
/// Stops at the first failure; no partial set is returned.
pub fn generate_favicon_set(
    source: &DynamicImage,
    options: &FaviconOptions,
) -> Result<FaviconSet, IconError> {
    let prefix = options.prefix.as_str();
    let mut artifacts = Vec::with_capacity(8);

    let ico_name = format!("{}favicon.ico", prefix);
    let ico = ico_from_source(source, &SizeSet::favicon_ico())?;
    artifacts.push(Artifact::new(ico_name.clone(), ico));

    let png_16 = format!("{}favicon-16x16.png", prefix);
    let png_32 = format!("{}favicon-32x32.png", prefix);
    let chrome_192 = format!("{}android-chrome-192x192.png", prefix);
    let chrome_512 = format!("{}android-chrome-512x512.png", prefix);
    for (name, size) in [
        (&png_16, 16),
        (&png_32, 32),
        (&chrome_192, 192),
        (&chrome_512, 512),
    ] {
        let bytes = encode_png(&resize(source, size)?)?;
        artifacts.push(Artifact::new(name.clone(), bytes));
    }

    let apple_name = format!("{}apple-touch-icon.png", prefix);
    let apple = encode_png(&apple_touch_icon(source, options.background)?)?;
    artifacts.push(Artifact::new(apple_name.clone(), apple));

    let manifest = WebManifest {
        name: options.name.clone(),
        short_name: options.short_name.clone(),
        icons: vec![
            ManifestIcon::png(format!("/{}", chrome_192), 192),
            ManifestIcon::png(format!("/{}", chrome_512), 512),
        ],
        theme_color: options.theme_color,
        background_color: options.manifest_background,
        display: "standalone".to_string(),
    };
    artifacts.push(Artifact::new(MANIFEST_FILENAME, manifest.to_json()?));

    let snippet = html::render(
        &HtmlLinks {
            ico: &ico_name,
            png_32: &png_32,
            png_16: &png_16,
            apple_touch: &apple_name,
            manifest: MANIFEST_FILENAME,
        },
        options.theme_color,
    );
    artifacts.push(Artifact::new(HTML_FILENAME, snippet.into_bytes()));

    info!(prefix, artifacts = artifacts.len(), "generated favicon set");
    Ok(FaviconSet { artifacts })
}
