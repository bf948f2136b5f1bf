//! Font metadata produced for each detected font.
//!
//! Field names serialize in camelCase to match the JSON that downstream
//! font catalogs already consume.

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::IMAGE_HEIGHT;

/// Vendor that generated a kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontProvider {
    #[serde(rename = "Fonts.com")]
    FontsCom,
    #[serde(rename = "FontShop")]
    FontShop,
    #[serde(rename = "Font Squirrel")]
    FontSquirrel,
    #[serde(rename = "Linotype")]
    Linotype,
    #[serde(rename = "MyFonts")]
    MyFonts,
    #[serde(rename = "Transfonter")]
    Transfonter,
}

impl FontProvider {
    pub fn name(self) -> &'static str {
        match self {
            Self::FontsCom => "Fonts.com",
            Self::FontShop => "FontShop",
            Self::FontSquirrel => "Font Squirrel",
            Self::Linotype => "Linotype",
            Self::MyFonts => "MyFonts",
            Self::Transfonter => "Transfonter",
        }
    }

    pub fn web_site(self) -> &'static str {
        match self {
            Self::FontsCom => "fonts.com",
            Self::FontShop => "fontshop.com",
            Self::FontSquirrel => "fontsquirrel.com",
            Self::Linotype => "linotype.com",
            Self::MyFonts => "myfonts.com",
            Self::Transfonter => "transfonter.org",
        }
    }
}

impl fmt::Display for FontProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a font reaches the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontType {
    /// Served by a hosted font service.
    Standard,
    /// Shipped as files with the page.
    Upload,
}

/// Preview image placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontImage {
    pub height: String,
    pub src: String,
    pub top: i32,
}

impl Default for FontImage {
    fn default() -> Self {
        Self { height: IMAGE_HEIGHT.to_owned(), src: String::new(), top: 0 }
    }
}

/// Vendor license and tracking snippets lifted from a kit's demo page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_script: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontImport {
    pub code: KitCode,
    pub url_base: String,
}

/// One selectable style of a font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontVariation {
    pub display_name: String,
    pub font_family: String,
}

impl FontVariation {
    pub fn new(display_name: impl Into<String>, font_family: impl Into<String>) -> Self {
        Self { display_name: display_name.into(), font_family: font_family.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub display_name: String,
    pub font_family: String,
    pub font_provider: FontProvider,
    pub font_provider_web_site: String,
    pub font_type: FontType,
    pub image: FontImage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<FontImport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kit_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variation: Option<FontVariation>,
    pub variations: Vec<FontVariation>,
}

impl Font {
    /// An uploaded font with a single variation named after the font.
    pub fn new(
        provider: FontProvider,
        display_name: impl Into<String>,
        font_family: impl Into<String>,
    ) -> Self {
        let display_name = display_name.into();
        let font_family = font_family.into();
        let variation = FontVariation::new(display_name.clone(), font_family.clone());

        Self {
            display_name,
            font_family,
            font_provider: provider,
            font_provider_web_site: provider.web_site().to_owned(),
            font_type: FontType::Upload,
            image: FontImage::default(),
            import: Some(FontImport::default()),
            kit_version: None,
            selected_variation: None,
            variations: vec![variation],
        }
    }

    pub fn with_kit_version(mut self, version: &str) -> Self {
        self.kit_version = Some(version.to_owned());
        self
    }

    pub fn with_code(mut self, code: KitCode) -> Self {
        self.import = Some(FontImport { code, url_base: String::new() });
        self
    }

    pub fn with_variations(mut self, variations: Vec<FontVariation>) -> Self {
        self.variations = variations;
        self
    }
}

/// Metadata for one font found in a kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMeta {
    /// Absolute directory the file paths are relative to.
    pub dir: PathBuf,
    /// Stylesheet first, then font files; no duplicates.
    pub files: Vec<String>,
    pub font: Font,
}

impl FontMeta {
    pub fn new(dir: impl Into<PathBuf>, files: Vec<String>, font: Font) -> Self {
        Self { dir: dir.into(), files, font }
    }
}
