//! Font Squirrel webfont generator kits.
//!
//! One `stylesheet.css` holds every font; each `@font-face` rule becomes its
//! own meta. Display names live in per-font `<prefix>-demo.html` pages.

use std::path::Path;

use rayon::prelude::*;
use webfont_kit_css::{Error as CssError, FontFaceRule, find_font_face_rules};

use super::{require_font_family, stylesheet_files};
use crate::{
    config::{
        FONT_SQUIRREL_BANNER, FONT_SQUIRREL_CONFIG, FONT_SQUIRREL_KIT_VERSION, STYLESHEET_CSS,
    },
    error::{Error, Result},
    html::pick_up_simple_tag_content,
    io::{find_files_by_extension, read_marker, read_text},
    model::{Font, FontMeta, FontProvider},
};

const HEADER_TAG: &str = r#"<div id="header">"#;

pub(super) fn detect(dir: &Path) -> Result<bool> {
    let config = read_marker(&dir.join(FONT_SQUIRREL_CONFIG))?;
    Ok(config.is_some_and(|text| text.starts_with(FONT_SQUIRREL_BANNER)))
}

pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let rules = find_font_face_rules(dir.join(STYLESHEET_CSS))?;
    if rules.is_empty() {
        return Err(CssError::NotFound.into());
    }

    let html_files = find_files_by_extension(dir, "html")?;
    let single = rules.len() == 1;

    rules.par_iter().map(|rule| build_one(dir, rule, &html_files, single)).collect()
}

fn build_one(
    dir: &Path,
    rule: &FontFaceRule,
    html_files: &[String],
    single: bool,
) -> Result<FontMeta> {
    let font_family = require_font_family(rule)?;
    let html_name = demo_html_name(rule, html_files, single)?;
    let html = read_text(&dir.join(html_name))?;
    let display_name = pick_up_simple_tag_content(&html, HEADER_TAG, "</div>")?;

    let font = Font::new(FontProvider::FontSquirrel, display_name, font_family)
        .with_kit_version(FONT_SQUIRREL_KIT_VERSION);
    Ok(FontMeta::new(dir, stylesheet_files(STYLESHEET_CSS, rule), font))
}

/// Demo page describing `rule`.
///
/// A single-font kit uses its only HTML page; otherwise the page is picked
/// by the font file prefix.
fn demo_html_name<'a>(
    rule: &FontFaceRule,
    html_files: &'a [String],
    single: bool,
) -> Result<&'a str> {
    match html_files {
        [] => return Err(Error::MissingHtml),
        [only] if single => return Ok(only.as_str()),
        _ => {}
    }

    let expected = format!("{}-demo.html", file_prefix(rule)?);
    if let Some(found) = html_files.iter().find(|name| **name == expected) {
        return Ok(found.as_str());
    }
    match html_files.first() {
        Some(first) if single => Ok(first.as_str()),
        _ => Err(Error::MissingHtml),
    }
}

/// `nice_font-webfont.woff` -> `nice_font`.
fn file_prefix(rule: &FontFaceRule) -> Result<String> {
    let paths = rule.font_file_paths();
    let first = paths
        .first()
        .ok_or_else(|| Error::UnexpectedLayout("font face rule has no src declaration".into()))?;
    let file_name = first.rsplit('/').next().unwrap_or(first);

    file_name
        .rfind('-')
        .map(|dash| file_name[..dash].to_owned())
        .ok_or_else(|| {
            Error::UnexpectedLayout(format!("unknown font file name structure: {first}"))
        })
}
