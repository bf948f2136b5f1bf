//! FontShop (FontFont) kits.
//!
//! These ship no stylesheet: each specimen page names one WOFF font, and a
//! one-rule stylesheet is written next to it.

use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::{
    config::{FONT_SHOP_COPYRIGHT_LINK, FONT_SHOP_KIT_VERSION},
    error::{Error, Result},
    html::pick_up_simple_tag_content,
    io::{find_files_by_extension, find_sub_dirs, marker_contains, read_text, write_text},
    model::{Font, FontMeta, FontProvider},
};

pub(super) fn detect(dir: &Path) -> Result<bool> {
    let sub_dirs = find_sub_dirs(dir)?;
    let [sub_dir] = sub_dirs.as_slice() else {
        return Ok(false);
    };

    let kit_dir = dir.join(sub_dir);
    let html_files = find_files_by_extension(&kit_dir, "html")?;
    match html_files.first() {
        Some(html) => marker_contains(&kit_dir.join(html), FONT_SHOP_COPYRIGHT_LINK),
        None => Ok(false),
    }
}

/// One meta per specimen page, in file name order.
pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let sub_dirs = find_sub_dirs(dir)?;
    let [sub_dir] = sub_dirs.as_slice() else {
        return Err(Error::UnexpectedLayout(format!(
            "expected exactly one sub directory, found {}",
            sub_dirs.len()
        )));
    };

    let kit_dir = dir.join(sub_dir);
    let html_files = find_files_by_extension(&kit_dir, "html")?;
    if html_files.is_empty() {
        return Err(Error::MissingHtml);
    }

    html_files.par_iter().map(|html_name| build_one(&kit_dir, html_name)).collect()
}

fn build_one(kit_dir: &Path, html_name: &str) -> Result<FontMeta> {
    let display_name = html_name.strip_suffix(".html").unwrap_or(html_name);
    let font_file = format!("{display_name}Web.woff");
    let css_file = format!("{display_name}.css");

    let html = read_text(&kit_dir.join(html_name))?;
    let font_family = pick_up_simple_tag_content(&html, "<h2>", "</h2>")?;

    let css_path = kit_dir.join(&css_file);
    write_text(&css_path, &font_face_css(&font_family, &font_file))?;
    debug!("Wrote {}", css_path.display());

    let font = Font::new(FontProvider::FontShop, display_name, font_family)
        .with_kit_version(FONT_SHOP_KIT_VERSION);
    Ok(FontMeta::new(kit_dir, vec![css_file, font_file], font))
}

fn font_face_css(font_family: &str, font_file: &str) -> String {
    format!(
        "@font-face {{\n  font-family: {font_family};\n  src: url(\"{font_file}\") format(\"woff\");\n}}\n"
    )
}
