//! # Webfont kit stylesheet reader
//!
//! Pulls `@font-face` rules out of the stylesheets that ship inside vendor
//! webfont kits. Only what the kit readers need is modelled: the
//! `font-family` value and the `url()`/`format()` pairs of `src`.
//!
//! ## Example
//!
//! ```
//! use webfont_kit_css::{Stylesheet, font_face_rules};
//!
//! let css = "@font-face { font-family: 'Foo'; src: url('foo.woff2') format('woff2'); }";
//! let sheet = Stylesheet::parse(css).unwrap();
//! let rules = font_face_rules(&sheet.rules);
//! assert_eq!(rules[0].font_family(), "Foo");
//! assert_eq!(rules[0].font_file_paths(), ["foo.woff2"]);
//! ```

mod error;
mod font_face;
mod stylesheet;

use std::{fs::read, path::Path};

pub use error::{Error, Result};
pub use font_face::{FontFaceRule, FontFormat, SourceFileReference, parse_src_value};
pub use stylesheet::{CssRule, Stylesheet, font_face_rules};

/// Read a stylesheet from disk and parse it.
///
/// Bytes that are not UTF-8 are replaced rather than rejected.
pub fn parse_css_file(path: impl AsRef<Path>) -> Result<Stylesheet> {
    let path = path.as_ref();
    let bytes = read(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    Stylesheet::parse(&String::from_utf8_lossy(&bytes))
}

/// Read every `@font-face` rule of a stylesheet, in source order.
pub fn find_font_face_rules(path: impl AsRef<Path>) -> Result<Vec<FontFaceRule>> {
    Ok(parse_css_file(path)?.into_font_face_rules())
}

/// Read the single `@font-face` rule of a stylesheet.
///
/// Kits that bundle one font carry exactly one rule; zero rules is
/// [`Error::NotFound`] and more than one is [`Error::Ambiguous`].
pub fn find_one_font_face_rule(path: impl AsRef<Path>) -> Result<FontFaceRule> {
    single_font_face_rule(find_font_face_rules(path)?)
}

/// The only rule of `rules`; zero or several rules are errors.
pub fn single_font_face_rule(mut rules: Vec<FontFaceRule>) -> Result<FontFaceRule> {
    match rules.len() {
        0 => Err(Error::NotFound),
        1 => Ok(rules.remove(0)),
        _ => Err(Error::Ambiguous),
    }
}
