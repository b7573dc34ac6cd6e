//! Encode order-entry request files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use entry_core::RequestKind;
use entry_protocol::RequestEncoder;
use tracing::info;
use tracing_subscriber::EnvFilter;

use entry_cli::config::{Config, OutputFormat};
use entry_cli::output::{encode_all, write_encoded};
use entry_cli::request_file::RequestFile;

#[derive(Parser)]
#[clap(name = "entry-encode")]
#[clap(about = "Encode order-entry requests into binary wire messages")]
struct Cli {
    /// Field dictionary (TOML); defaults to the built-in one
    #[clap(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Enable debug logging
    #[clap(long, global = true)]
    debug: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode every request of a TOML request file
    Encode {
        /// Request file
        file: PathBuf,

        /// Sequence number of the first request
        #[clap(short, long)]
        start_seq: Option<u32>,

        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate and print the active field dictionary
    Dictionary,

    /// Print the encoded size of a request shape
    Size {
        #[clap(short, long, value_enum)]
        kind: KindArg,

        /// Number of contra orders
        #[clap(short, long, default_value = "0")]
        contra: usize,

        /// Leg count of every order, agency first (multileg only)
        #[clap(short, long, value_delimiter = ',')]
        legs: Vec<usize>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum KindArg {
    New,
    NewCross,
    NewCrossMultileg,
}

impl From<KindArg> for RequestKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::New => RequestKind::New,
            KindArg::NewCross => RequestKind::NewCross,
            KindArg::NewCrossMultileg => RequestKind::NewCrossMultileg,
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = Config::from_env()?;
    if cli.dictionary.is_some() {
        config.dictionary = cli.dictionary;
    }

    let dict = config.load_dictionary()?;
    let encoder = RequestEncoder::new(&dict).context("invalid field dictionary")?;

    match cli.command {
        Command::Encode {
            file,
            start_seq,
            format,
            output,
        } => {
            let start_seq = start_seq.unwrap_or(config.start_seq);
            let format = format.unwrap_or(config.format);

            let requests = RequestFile::load(&file)?.requests;
            info!(file = %file.display(), count = requests.len(), start_seq, "encoding requests");
            let encoded = encode_all(&encoder, &requests, start_seq)?;

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("creating {}", path.display()))?,
                )),
                None => Box::new(io::stdout().lock()),
            };
            write_encoded(&mut *out, &encoded, format)?;
        }
        Command::Dictionary => {
            print!("{}", dict.to_toml_string()?);
        }
        Command::Size { kind, contra, legs } => {
            let size = encoder
                .sizes()
                .calculate_size(kind.into(), contra, &legs)?;
            println!("{size}");
        }
    }

    Ok(())
}
