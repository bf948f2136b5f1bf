//! MyFonts kits, shipped under `MyFontsWebfontsKit/`.

use std::path::Path;

use webfont_kit_css::{Stylesheet, single_font_face_rule};

use super::{require_font_family, stylesheet_files};
use crate::{
    config::{MY_FONTS_BUILD_ID, MY_FONTS_CSS, MY_FONTS_HTML},
    error::Result,
    html::{pick_up_enclosed_block, pick_up_simple_tag_content},
    io::{marker_contains, read_marker, read_text},
    model::{Font, FontMeta, FontProvider, KitCode},
};

pub(super) fn detect(dir: &Path) -> Result<bool> {
    let Some(css) = read_marker(&dir.join(MY_FONTS_CSS))? else {
        return Ok(false);
    };
    if css.contains(MY_FONTS_BUILD_ID) {
        return Ok(true);
    }
    marker_contains(&dir.join(MY_FONTS_HTML), MY_FONTS_BUILD_ID)
}

pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let css = read_text(&dir.join(MY_FONTS_CSS))?;
    let rule = single_font_face_rule(Stylesheet::parse(&css)?.into_font_face_rules())?;
    let font_family = require_font_family(&rule)?;

    let html = read_text(&dir.join(MY_FONTS_HTML))?;
    let display_name = pick_up_simple_tag_content(
        &html,
        &format!(r#"<span class="{font_family}" contenteditable="true">"#),
        "</span>",
    )?;

    let code = KitCode { license_text: license_comment(&css), tracker_script: None };
    let font = Font::new(FontProvider::MyFonts, display_name, font_family).with_code(code);
    Ok(vec![FontMeta::new(dir, stylesheet_files(MY_FONTS_CSS, &rule), font)])
}

/// The comment block carrying the build ID, delimiters included.
fn license_comment(css: &str) -> Option<String> {
    let at = css.find(MY_FONTS_BUILD_ID)?;
    let start = css[..at].rfind("/*")?;
    pick_up_enclosed_block(&css[start..], "/*", "*/").ok()
}
