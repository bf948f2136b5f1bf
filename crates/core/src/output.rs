//! JSON output helpers for generated metadata.

use std::io::Write;

use crate::{error::Result, model::FontMeta};

/// Write metadata as a prettified JSON array.
pub fn write_json_pretty(metas: &[FontMeta], mut w: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut w, metas)?;
    w.write_all(b"\n").map_err(serde_json::Error::io)?;
    Ok(())
}

/// Write metadata as newline-delimited JSON, one font per line.
pub fn write_ndjson(metas: &[FontMeta], mut w: impl Write) -> Result<()> {
    for meta in metas {
        serde_json::to_writer(&mut w, meta)?;
        w.write_all(b"\n").map_err(serde_json::Error::io)?;
    }
    Ok(())
}
