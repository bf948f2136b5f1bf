//! Vendor kit detection and per-vendor metadata builders.

mod font_shop;
mod font_squirrel;
mod fonts_com;
mod fonts_com_multi;
mod linotype;
mod monotype;
mod my_fonts;
mod transfonter;

use std::{fmt, path::Path};

use indexmap::IndexSet;
use log::{debug, info};
use webfont_kit_css::FontFaceRule;

use crate::{
    error::{Error, Result},
    model::FontMeta,
};

pub use fonts_com_multi::variation_label;

/// Vendor kit layouts this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KitKind {
    FontsComMulti,
    FontsCom,
    FontSquirrel,
    FontShop,
    Linotype,
    MyFonts,
    Transfonter,
}

impl KitKind {
    /// Every kind in detection priority order.
    pub const ALL: [KitKind; 7] = [
        KitKind::FontsComMulti,
        KitKind::FontsCom,
        KitKind::FontSquirrel,
        KitKind::FontShop,
        KitKind::Linotype,
        KitKind::MyFonts,
        KitKind::Transfonter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::FontsComMulti => "Fonts.com (multi)",
            Self::FontsCom => "Fonts.com",
            Self::FontSquirrel => "Font Squirrel",
            Self::FontShop => "FontShop",
            Self::Linotype => "Linotype",
            Self::MyFonts => "MyFonts",
            Self::Transfonter => "Transfonter",
        }
    }

    /// Whether `dir` looks like a kit of this kind.
    ///
    /// Missing marker files mean `false`; other I/O errors propagate.
    pub fn detect(self, dir: &Path) -> Result<bool> {
        match self {
            Self::FontsComMulti => fonts_com_multi::detect(dir),
            Self::FontsCom => fonts_com::detect(dir),
            Self::FontSquirrel => font_squirrel::detect(dir),
            Self::FontShop => font_shop::detect(dir),
            Self::Linotype => linotype::detect(dir),
            Self::MyFonts => my_fonts::detect(dir),
            Self::Transfonter => transfonter::detect(dir),
        }
    }

    /// Build metadata for a kit of this kind unpacked in `dir`.
    pub fn build_meta(self, dir: &Path) -> Result<Vec<FontMeta>> {
        match self {
            Self::FontsComMulti => fonts_com_multi::build_meta(dir),
            Self::FontsCom => fonts_com::build_meta(dir),
            Self::FontSquirrel => font_squirrel::build_meta(dir),
            Self::FontShop => font_shop::build_meta(dir),
            Self::Linotype => linotype::build_meta(dir),
            Self::MyFonts => my_fonts::build_meta(dir),
            Self::Transfonter => transfonter::build_meta(dir),
        }
    }
}

impl fmt::Display for KitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First kit kind, in priority order, whose detector accepts `dir`.
pub fn detect_kit_kind(dir: &Path) -> Result<Option<KitKind>> {
    for kind in KitKind::ALL {
        debug!("Probing {} for a {kind} kit", dir.display());
        if kind.detect(dir)? {
            info!("Detected {kind} kit in {}", dir.display());
            return Ok(Some(kind));
        }
    }
    Ok(None)
}

/// Detect the kit in `dir` and build metadata for every font it contains.
pub fn generate_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let dir = std::path::absolute(dir).map_err(|e| Error::io(dir, e))?;
    let kind = detect_kit_kind(&dir)?.ok_or_else(|| Error::UnsupportedKit { dir: dir.clone() })?;

    let metas = kind.build_meta(&dir)?;
    info!("Built metadata for {} font(s)", metas.len());
    Ok(metas)
}

/// `font-family` of `rule`, which must not be empty.
fn require_font_family(rule: &FontFaceRule) -> Result<String> {
    let family = rule.font_family();
    if family.is_empty() {
        return Err(Error::MissingFontFamily);
    }
    Ok(family)
}

/// Stylesheet path followed by the fonts it references, relative to the kit
/// root and deduplicated.
fn stylesheet_files(stylesheet: &str, rule: &FontFaceRule) -> Vec<String> {
    let base = stylesheet.rsplit_once('/').map(|(parent, _)| parent);

    let mut files = IndexSet::new();
    files.insert(stylesheet.to_owned());
    for path in rule.font_file_paths() {
        let path = path.strip_prefix("./").unwrap_or(&path);
        files.insert(match base {
            Some(base) => format!("{base}/{path}"),
            None => path.to_owned(),
        });
    }
    files.into_iter().collect()
}
