//! Pieces shared by the Monotype-family kits (Fonts.com and Linotype).
//!
//! Both ship `demo-async.htm` and `demo-async.css` built from one template.

use std::path::Path;

use log::debug;
use webfont_kit_css::FontFaceRule;

use super::{require_font_family, stylesheet_files};
use crate::{
    config::{DEMO_ASYNC_CSS, DEMO_ASYNC_HTML},
    error::Result,
    html::{pick_up_simple_tag_content, pick_up_wrapped_tag_content},
    io::{marker_contains, read_text},
    model::{Font, FontMeta, FontProvider, KitCode},
};

const FONT_DISPLAY_TAG: &str = r#"<div class="fontdisplay">"#;
const LICENSE_START_TAG: &str = "<pre>";
const LICENSE_END_TAG: &str = "</pre>";
const TRACKER_START_TAG: &str = r#"<script type="text/javascript">"#;
const TRACKER_END_TAG: &str = "</script>";

/// Whether the demo page carries the vendor's banner heading.
pub(super) fn has_demo_banner(dir: &Path, banner: &str) -> Result<bool> {
    marker_contains(&dir.join(DEMO_ASYNC_HTML), banner)
}

/// Font name shown in the demo page's `fontdisplay` block.
pub(super) fn demo_display_name(html: &str) -> Result<String> {
    pick_up_wrapped_tag_content(html, FONT_DISPLAY_TAG, "</div>")
}

/// License comment and tracking script embedded in the demo page.
///
/// Either block may be missing from older pages; that leaves the field unset.
pub(super) fn demo_code(html: &str) -> KitCode {
    let license_text = pick_up_simple_tag_content(html, LICENSE_START_TAG, LICENSE_END_TAG).ok();
    let tracker_script = pick_up_simple_tag_content(html, TRACKER_START_TAG, TRACKER_END_TAG).ok();
    if license_text.is_none() {
        debug!("Demo page has no license block");
    }
    if tracker_script.is_none() {
        debug!("Demo page has no tracking script");
    }
    KitCode { license_text, tracker_script }
}

/// Metadata for a single-font kit laid out as `demo-async.{htm,css}`.
pub(super) fn build_demo_meta(
    dir: &Path,
    provider: FontProvider,
    rule: &FontFaceRule,
) -> Result<Vec<FontMeta>> {
    let font_family = require_font_family(rule)?;
    let html = read_text(&dir.join(DEMO_ASYNC_HTML))?;
    let display_name = demo_display_name(&html)?;

    let font = Font::new(provider, display_name, font_family).with_code(demo_code(&html));
    Ok(vec![FontMeta::new(dir, stylesheet_files(DEMO_ASYNC_CSS, rule), font)])
}
