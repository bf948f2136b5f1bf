//! CLI definitions and command dispatch.

use std::{
    fs::File,
    io::{BufWriter, Write, stdout},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use webfont_kit_core::{
    Error, ExtractKitOptions, FontMeta, detect_kit_kind, extract_kit, generate_meta,
    write_json_pretty, write_ndjson,
};

#[derive(Parser)]
#[command(name = "extract-webfont-kit")]
#[command(about = "Detect vendor webfont kits and print the metadata of their fonts")]
pub struct Cli {
    /// Log detection and extraction details
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print one JSON object per font and line
    #[arg(long)]
    pub ndjson: bool,
}

impl OutputArgs {
    fn write(&self, metas: &[FontMeta]) -> Result<()> {
        let mut writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(stdout().lock()),
        };

        if self.ndjson {
            write_ndjson(metas, &mut writer)?;
        } else {
            write_json_pretty(metas, &mut writer)?;
        }
        writer.flush().context("Failed to flush output")?;

        if let Some(path) = &self.output {
            info!("Wrote metadata for {} font(s) to {}", metas.len(), path.display());
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Unpack a kit archive and print its font metadata
    Extract {
        zip: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the kind of an unpacked kit
    Detect { dir: PathBuf },
    /// Print font metadata of an unpacked kit
    Inspect {
        dir: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Extract { zip, out_dir, output } => {
                let options = ExtractKitOptions { zip_path: zip, out_dir };
                let metas = extract_kit(&options)
                    .with_context(|| format!("Failed to extract {}", options.zip_path.display()))?;
                output.write(&metas)?;
            }
            Commands::Detect { dir } => {
                let kind = detect_kit_kind(&dir)?.ok_or(Error::UnsupportedKit { dir })?;
                println!("{kind}");
            }
            Commands::Inspect { dir, output } => {
                let metas = generate_meta(&dir)
                    .with_context(|| format!("Failed to read kit in {}", dir.display()))?;
                output.write(&metas)?;
            }
        }
        Ok(())
    }
}

/// Set up `env_logger`; `RUST_LOG` overrides the level picked here.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}
