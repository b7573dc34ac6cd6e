//! Configuration for the request encoder CLI.
//!
//! Defaults can be overridden via environment variables, and command-line
//! flags override both:
//!
//! - `ENTRY_DICTIONARY`    (default: built-in field dictionary)
//! - `ENTRY_START_SEQ`     (default: "1")
//! - `ENTRY_OUTPUT_FORMAT` (default: "hex"; one of hex, json, raw)

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use entry_protocol::FieldDictionary;
use tracing::info;

/// How encoded requests are written out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One hex line per request.
    Hex,
    /// One JSON object per line.
    Json,
    /// Raw bytes, requests back to back.
    Raw,
}

/// Encoder configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Field dictionary file; `None` selects the built-in dictionary.
    pub dictionary: Option<PathBuf>,

    /// Sequence number of the first request in a file.
    pub start_seq: u32,

    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dictionary: None,
            start_seq: 1,
            format: OutputFormat::Hex,
        }
    }
}

impl Config {
    /// Construct a `Config` from environment variables, falling back
    /// to the defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let dictionary = env::var_os("ENTRY_DICTIONARY").map(PathBuf::from);
        let start_seq = read_env_or_default("ENTRY_START_SEQ", defaults.start_seq)?;
        let format = match env::var("ENTRY_OUTPUT_FORMAT") {
            Ok(val) => OutputFormat::from_str(&val, true)
                .map_err(|e| anyhow!("invalid ENTRY_OUTPUT_FORMAT: {e}"))?,
            Err(_) => defaults.format,
        };

        Ok(Config {
            dictionary,
            start_seq,
            format,
        })
    }

    /// Load the configured field dictionary.
    pub fn load_dictionary(&self) -> Result<FieldDictionary> {
        match &self.dictionary {
            Some(path) => load_dictionary_file(path),
            None => Ok(FieldDictionary::standard()),
        }
    }
}

fn load_dictionary_file(path: &Path) -> Result<FieldDictionary> {
    let dict = FieldDictionary::from_path(path)
        .with_context(|| format!("loading field dictionary {}", path.display()))?;
    info!(path = %path.display(), version = %dict.version, "using field dictionary");
    Ok(dict)
}

fn read_env_or_default<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .with_context(|| format!("invalid {key}: {val:?}")),
        Err(_) => Ok(default),
    }
}
