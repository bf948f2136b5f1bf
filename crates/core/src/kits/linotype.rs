//! Linotype kits.

use std::path::Path;

use webfont_kit_css::find_one_font_face_rule;

use super::monotype::{build_demo_meta, has_demo_banner};
use crate::{
    config::{DEMO_ASYNC_CSS, LINOTYPE_BANNER},
    error::Result,
    model::{FontMeta, FontProvider},
};

pub(super) fn detect(dir: &Path) -> Result<bool> {
    has_demo_banner(dir, LINOTYPE_BANNER)
}

pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let rule = find_one_font_face_rule(dir.join(DEMO_ASYNC_CSS))?;
    build_demo_meta(dir, FontProvider::Linotype, &rule)
}
