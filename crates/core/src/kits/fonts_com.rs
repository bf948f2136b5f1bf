//! Fonts.com single-font kits.

use std::path::Path;

use webfont_kit_css::{Error as CssError, find_font_face_rules};

use super::monotype::{build_demo_meta, has_demo_banner};
use crate::{
    config::{DEMO_ASYNC_CSS, FONTS_COM_BANNER},
    error::Result,
    model::{FontMeta, FontProvider},
};

pub(super) fn detect(dir: &Path) -> Result<bool> {
    has_demo_banner(dir, FONTS_COM_BANNER)
}

/// The first `@font-face` of `demo-async.css` describes the font.
pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let rule = find_font_face_rules(dir.join(DEMO_ASYNC_CSS))?
        .into_iter()
        .next()
        .ok_or(CssError::NotFound)?;
    build_demo_meta(dir, FontProvider::FontsCom, &rule)
}
