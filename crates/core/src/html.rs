//! Marker-based text extraction from vendor demo pages.
//!
//! Vendor pages are generated from fixed templates, so plain substring
//! search between known tags is enough. Extracted text has CRLF folded to
//! LF and is trimmed.

use crate::error::{Error, Result};

/// Text between the first `start_tag` and the next `end_tag`.
pub fn pick_up_simple_tag_content(source: &str, start_tag: &str, end_tag: &str) -> Result<String> {
    let start = find_after(source, start_tag, 0)
        .ok_or_else(|| Error::StartTagNotFound(start_tag.to_owned()))?;
    let end = source[start..]
        .find(end_tag)
        .map(|offset| start + offset)
        .ok_or_else(|| Error::EndTagNotFound(end_tag.to_owned()))?;

    Ok(normalize(&source[start..end]))
}

/// The first `open ... close` block, delimiters included.
pub fn pick_up_enclosed_block(source: &str, open: &str, close: &str) -> Result<String> {
    let start = source.find(open).ok_or_else(|| Error::StartTagNotFound(open.to_owned()))?;
    let end = source[start + open.len()..]
        .find(close)
        .map(|offset| start + open.len() + offset + close.len())
        .ok_or_else(|| Error::EndTagNotFound(close.to_owned()))?;

    Ok(normalize(&source[start..end]))
}

/// Content of the element nested directly inside `wrapper_tag`.
///
/// `<div class="fontdisplay"><div style="...">Name</div></div>` yields
/// `Name`: the inner opening tag is skipped and the text runs to the first
/// `end_tag` after it.
pub fn pick_up_wrapped_tag_content(
    source: &str,
    wrapper_tag: &str,
    end_tag: &str,
) -> Result<String> {
    let wrapper_end = find_after(source, wrapper_tag, 0)
        .ok_or_else(|| Error::StartTagNotFound(wrapper_tag.to_owned()))?;
    let start = source[wrapper_end..]
        .find('<')
        .and_then(|offset| find_after(source, ">", wrapper_end + offset))
        .ok_or_else(|| Error::StartTagNotFound(format!("{wrapper_tag}<...>")))?;
    let end = source[start..]
        .find(end_tag)
        .map(|offset| start + offset)
        .ok_or_else(|| Error::EndTagNotFound(end_tag.to_owned()))?;

    Ok(normalize(&source[start..end]))
}

/// Byte offset just past the first `needle` at or after `from`.
fn find_after(source: &str, needle: &str, from: usize) -> Option<usize> {
    source[from..].find(needle).map(|offset| from + offset + needle.len())
}

fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_owned()
}
