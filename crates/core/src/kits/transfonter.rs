//! Transfonter converter kits.

use std::path::Path;

use webfont_kit_css::find_one_font_face_rule;

use super::{require_font_family, stylesheet_files};
use crate::{
    config::{STYLESHEET_CSS, TRANSFONTER_HTML, TRANSFONTER_KIT_VERSION, TRANSFONTER_TITLE},
    error::Result,
    html::pick_up_simple_tag_content,
    io::{marker_contains, read_text},
    model::{Font, FontMeta, FontProvider},
};

pub(super) fn detect(dir: &Path) -> Result<bool> {
    marker_contains(&dir.join(TRANSFONTER_HTML), TRANSFONTER_TITLE)
}

pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let rule = find_one_font_face_rule(dir.join(STYLESHEET_CSS))?;
    let font_family = require_font_family(&rule)?;

    let html = read_text(&dir.join(TRANSFONTER_HTML))?;
    let display_name = pick_up_simple_tag_content(&html, "<h1>", "</h1>")?;

    let font = Font::new(FontProvider::Transfonter, display_name, font_family)
        .with_kit_version(TRANSFONTER_KIT_VERSION);
    Ok(vec![FontMeta::new(dir, stylesheet_files(STYLESHEET_CSS, &rule), font)])
}
