mod unpack;

use std::path::PathBuf;

use log::info;

use crate::{error::Result, kits::generate_meta, model::FontMeta};

pub use unpack::unpack_kit;

/// Inputs of [`extract_kit`].
#[derive(Debug, Clone)]
pub struct ExtractKitOptions {
    pub zip_path: PathBuf,
    /// Created when missing; the kit is unpacked directly into it.
    pub out_dir: PathBuf,
}

/// Unpack a kit archive and build metadata for the fonts inside it.
pub fn extract_kit(options: &ExtractKitOptions) -> Result<Vec<FontMeta>> {
    info!("Unpacking {}", options.zip_path.display());
    let files = unpack_kit(&options.zip_path, &options.out_dir)?;
    info!("Extracted {} files into {}", files.len(), options.out_dir.display());

    generate_meta(&options.out_dir)
}
