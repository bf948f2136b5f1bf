//! Fonts.com multi-font kits described by `fontlist.xml`.

use std::{collections::HashMap, path::Path};

use indexmap::IndexSet;
use quick_xml::{
    Reader,
    escape::unescape,
    events::{BytesStart, Event},
};

use super::monotype::demo_code;
use crate::{
    config::{
        DEMO_ASYNC_CSS, DEMO_ASYNC_HTML, FONT_LIST_FONT_DIR, FONT_LIST_XML, MTI_TRACKING_SCRIPT,
        REGULAR_LABEL,
    },
    error::{Error, Result},
    io::{exists, read_marker, read_text},
    model::{Font, FontMeta, FontProvider, FontVariation},
};

/// Font file fields of a `<font>` row, in the order they are listed.
const FILE_FIELDS: [&str; 5] = ["eot", "svg", "ttf", "woff", "woff2"];

/// One `<font>` row of `fontlist.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FontListRecord {
    css_family_name: String,
    family_name: String,
    /// Font files relative to the kit root.
    files: Vec<String>,
}

impl FontListRecord {
    fn from_fields(fields: &HashMap<String, String>) -> Result<Self> {
        let field = |name: &str| {
            fields
                .get(name)
                .filter(|value| !value.is_empty())
                .cloned()
                .ok_or_else(|| Error::InvalidFontList(format!("<font> without {name}")))
        };

        let files = FILE_FIELDS
            .iter()
            .filter_map(|name| fields.get(*name))
            .filter(|file| !file.is_empty())
            .map(|file| format!("{FONT_LIST_FONT_DIR}/{file}"))
            .collect();

        Ok(Self {
            css_family_name: field("CssFamilyName")?,
            family_name: field("FamilyName")?,
            files,
        })
    }
}

pub(super) fn detect(dir: &Path) -> Result<bool> {
    exists(&dir.join(FONT_LIST_XML))
}

/// One meta for the whole kit, one variation per `<font>` row.
pub(super) fn build_meta(dir: &Path) -> Result<Vec<FontMeta>> {
    let records = parse_font_list(&read_text(&dir.join(FONT_LIST_XML))?)?;
    let Some(first) = records.first() else {
        return Err(Error::InvalidFontList("no <font> entries".into()));
    };

    let code = read_marker(&dir.join(DEMO_ASYNC_HTML))?
        .map(|html| demo_code(&html))
        .unwrap_or_default();

    let mut files = IndexSet::new();
    files.insert(DEMO_ASYNC_CSS.to_owned());
    files.insert(MTI_TRACKING_SCRIPT.to_owned());
    files.extend(records.iter().flat_map(|record| record.files.iter().cloned()));

    let variations = records
        .iter()
        .map(|record| {
            let label = variation_label(&record.family_name, &record.css_family_name);
            FontVariation::new(label, &record.css_family_name)
        })
        .collect();

    let font = Font::new(FontProvider::FontsCom, &first.family_name, &first.family_name)
        .with_code(code)
        .with_variations(variations);
    Ok(vec![FontMeta::new(dir, files.into_iter().collect(), font)])
}

/// Style label of a CSS family relative to its family name.
///
/// `("Neue Helvetica", "Neue Helvetica Bold")` is `Bold`; a CSS family equal
/// to the family name is `Regular`; an unrelated CSS family is kept whole.
pub fn variation_label(family_name: &str, css_family_name: &str) -> String {
    match css_family_name.strip_prefix(family_name) {
        Some(rest) if rest.trim().is_empty() => REGULAR_LABEL.to_owned(),
        Some(rest) => rest.trim().to_owned(),
        None => css_family_name.to_owned(),
    }
}

/// Read every `<font>` row; fields may be attributes or child elements.
fn parse_font_list(xml: &str) -> Result<Vec<FontListRecord>> {
    // Field text arrives in pieces around entity references; trim once per field.
    let mut reader = Reader::from_str(xml);

    let mut records = Vec::new();
    let mut fields: Option<HashMap<String, String>> = None;
    let mut child: Option<(String, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"font" => {
                fields = Some(attribute_fields(&e)?);
            }
            Event::Empty(e) if e.name().as_ref() == b"font" => {
                records.push(FontListRecord::from_fields(&attribute_fields(&e)?)?);
            }
            Event::Start(e) if fields.is_some() => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                child = Some((name, String::new()));
            }
            Event::Text(e) => {
                if let Some((_, text)) = child.as_mut() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::GeneralRef(e) => {
                if let Some((_, text)) = child.as_mut() {
                    let entity = format!("&{};", String::from_utf8_lossy(e.as_ref()));
                    let resolved =
                        unescape(&entity).map_err(|e| Error::InvalidFontList(e.to_string()))?;
                    text.push_str(&resolved);
                }
            }
            Event::End(e) if e.name().as_ref() == b"font" => {
                if let Some(fields) = fields.take() {
                    records.push(FontListRecord::from_fields(&fields)?);
                }
            }
            Event::End(_) => {
                if let (Some((name, text)), Some(fields)) = (child.take(), fields.as_mut()) {
                    fields.insert(name, text.trim().to_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(records)
}

fn attribute_fields(element: &BytesStart<'_>) -> Result<HashMap<String, String>> {
    let mut fields = HashMap::new();
    for attr in element.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = unescape(&raw).map_err(|e| Error::InvalidFontList(e.to_string()))?;
        fields.insert(key, value.into_owned());
    }
    Ok(fields)
}
