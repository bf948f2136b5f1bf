//! `@font-face` declarations: family names and `src` references.

use std::fmt;

use cssparser::{Delimiter, ParseError, Parser, ParserInput, Token};
use indexmap::IndexSet;

/// One `@font-face` block: its declarations in source order.
///
/// Property names are lower-cased; values are the raw CSS text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontFaceRule {
    declarations: Vec<(String, String)>,
}

impl FontFaceRule {
    pub fn new(declarations: Vec<(String, String)>) -> Self {
        Self { declarations }
    }

    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// First value declared for `property`.
    pub fn value(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Every value declared for `property`, in source order.
    pub fn values<'a>(&'a self, property: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.declarations
            .iter()
            .filter(move |(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// The `font-family` value with its quotes removed.
    ///
    /// Returns an empty string when the declaration is missing or is not a
    /// single quoted string.
    pub fn font_family(&self) -> String {
        let Some(value) = self.value("font-family") else {
            return String::new();
        };

        let mut input = ParserInput::new(value);
        let mut parser = Parser::new(&mut input);
        parser.parse_entirely(quoted_string).unwrap_or_default()
    }

    /// Every `url()` of every `src` declaration, with its format hint.
    pub fn sources(&self) -> Vec<SourceFileReference> {
        self.values("src").flat_map(parse_src_value).collect()
    }

    /// Font file paths referenced by `src`, deduplicated in first-seen order.
    pub fn font_file_paths(&self) -> Vec<String> {
        let paths: IndexSet<String> = self.sources().into_iter().map(|source| source.url).collect();
        paths.into_iter().collect()
    }
}

/// Format hint of a `src` entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFormat {
    Woff,
    Woff2,
    EmbeddedOpentype,
    Svg,
    Truetype,
    Opentype,
    Other(String),
    /// No `format()` was given.
    Fallback,
}

impl FontFormat {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "woff" => Self::Woff,
            "woff2" => Self::Woff2,
            "embedded-opentype" => Self::EmbeddedOpentype,
            "svg" => Self::Svg,
            "truetype" => Self::Truetype,
            "opentype" => Self::Opentype,
            _ => Self::Other(keyword.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Woff => "woff",
            Self::Woff2 => "woff2",
            Self::EmbeddedOpentype => "embedded-opentype",
            Self::Svg => "svg",
            Self::Truetype => "truetype",
            Self::Opentype => "opentype",
            Self::Other(keyword) => keyword,
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `url(...) format(...)` entry of a `src` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceFileReference {
    /// File path with any `?query` or `#fragment` suffix removed.
    pub url: String,
    pub format: FontFormat,
}

impl SourceFileReference {
    pub fn new(url: &str, format: Option<&str>) -> Self {
        Self {
            url: strip_query_and_fragment(url).to_owned(),
            format: format.map_or(FontFormat::Fallback, FontFormat::from_keyword),
        }
    }
}

/// Split a `src` value on its top-level commas and read each entry.
///
/// Entries without a usable `url()` (such as `local()`) are skipped.
pub fn parse_src_value(value: &str) -> Vec<SourceFileReference> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut sources = Vec::new();

    loop {
        if let Ok(Some(source)) = parser.parse_until_before(Delimiter::Comma, src_entry) {
            sources.push(source);
        }
        match parser.next() {
            Ok(Token::Comma) => continue,
            _ => break,
        }
    }

    sources
}

fn src_entry<'i>(
    input: &mut Parser<'i, '_>,
) -> Result<Option<SourceFileReference>, ParseError<'i, ()>> {
    let mut url = None;
    let mut format = None;

    while let Ok(token) = input.next() {
        match token.clone() {
            Token::UnquotedUrl(value) => url = Some(value.as_ref().to_owned()),
            Token::Function(name) if name.eq_ignore_ascii_case("url") => {
                url = input.parse_nested_block(quoted_string).ok();
            }
            Token::Function(name) if name.eq_ignore_ascii_case("format") => {
                format = input.parse_nested_block(ident_or_string).ok();
            }
            _ => {}
        }
    }

    Ok(url
        .filter(|url| !strip_query_and_fragment(url).is_empty())
        .map(|url| SourceFileReference::new(&url, format.as_deref())))
}

fn quoted_string<'i>(input: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    Ok(input.expect_string()?.as_ref().to_owned())
}

fn ident_or_string<'i>(input: &mut Parser<'i, '_>) -> Result<String, ParseError<'i, ()>> {
    Ok(input.expect_ident_or_string()?.as_ref().to_owned())
}

/// `my-font.eot?#iefix` -> `my-font.eot`, `font.svg#Name` -> `font.svg`.
fn strip_query_and_fragment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}
