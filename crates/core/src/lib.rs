//! Webfont Kit Core - detects vendor webfont kits and extracts font metadata.

pub mod config;
pub mod error;
pub mod html;
pub mod io;
pub mod kits;
pub mod model;
pub mod output;
pub mod pipeline;

pub use error::{Error, Result};
pub use kits::{KitKind, detect_kit_kind, generate_meta, variation_label};
pub use model::{
    Font, FontImage, FontImport, FontMeta, FontProvider, FontType, FontVariation, KitCode,
};
pub use output::{write_json_pretty, write_ndjson};
pub use pipeline::{ExtractKitOptions, extract_kit, unpack_kit};
