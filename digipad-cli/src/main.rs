#![deny(missing_docs)]
//! A command-line interface for generating printable decimal one-time pads and
//! encrypting short messages with them.

use crate::error::CliError;
use crate::output::OutputFormat;
use crate::settings::Overrides;
use clap::{Parser, Subcommand};
use digipad_core::{FormatError, PadBatch, PadError, PadFactory};
use log::{error, info, warn};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

mod error;
mod output;
mod settings;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Print one pad of 225 digits\ndigipad generate\n\n# Write five pads to a file\ndigipad generate --count 5 --output ./pads.txt\n\n# Write pads as an HTML page for printing\ndigipad generate -c 5 -f html -o ./pads.html\n\n# Encrypt a message with the first pad in a file\ndigipad encrypt --pad ./pads.txt \"MEET AT NOON\"\n\n# Encrypt with a specific pad\ndigipad encrypt --pad ./pads.txt --pad-id 48213 \"MEET AT NOON\"\n\n# Decrypt; the pad is picked by the id at the start of the ciphertext\ndigipad decrypt --pad ./pads.txt 48213595647..."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one-time pads
    Generate {
        /// The number of pads to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Digits per pad, rounded up to a whole line [default: 225]
        #[arg(short, long)]
        length: Option<usize>,

        /// Digits per group; the first group is the pad id [default: 5]
        #[arg(short, long)]
        group_size: Option<usize>,

        /// Groups per line [default: 15]
        #[arg(short = 'w', long)]
        groups_per_line: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Path to write the pads to. If omitted, the pads are printed.
        #[arg(short, long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,

        /// JSON file with `length`, `group_size` and `groups_per_line` defaults
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
    /// Encrypt a message with a pad from a pad file
    Encrypt {
        /// Path to the pad file
        #[arg(short, long, value_name = "PAD_FILE")]
        pad: PathBuf,

        /// The id of the pad to use. If omitted, the first pad in the file is used.
        #[arg(long, value_name = "PAD_ID")]
        pad_id: Option<String>,

        /// The message to encrypt. Read from standard input if omitted.
        message: Option<String>,
    },
    /// Decrypt a ciphertext with the matching pad from a pad file
    Decrypt {
        /// Path to the pad file
        #[arg(short, long, value_name = "PAD_FILE")]
        pad: PathBuf,

        /// The ciphertext, starting with the pad id
        ciphertext: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Generate {
            count,
            length,
            group_size,
            groups_per_line,
            format,
            output: destination,
            config,
        } => {
            let overrides = Overrides {
                length,
                group_size,
                groups_per_line,
            };
            let config = settings::resolve(config.as_deref(), overrides)?;
            let factory = PadFactory::new(config)?;
            let layout = factory.config().layout()?;
            let digits = factory.config().rounded_length()?;
            info!(
                "Generating {count} pad(s) of {digits} digits, {} groups of {} per line...",
                layout.groups_per_line(),
                layout.group_size()
            );

            let batch = factory.generate(count)?;
            let rendered = output::render(&batch, format);
            output::emit(&rendered, format, destination.as_deref())?;
            if let Some(path) = &destination {
                info!("Wrote {} pad(s) to '{}'.", batch.len(), path.display());
            }
            Ok(())
        }
        Commands::Encrypt {
            pad,
            pad_id,
            message,
        } => {
            let mut batch = load_batch(&pad)?;
            let message = match message {
                Some(message) => message,
                None => read_stdin()?,
            };

            let selected = match &pad_id {
                Some(id) => batch.find_mut(id).map_err(|e| match e {
                    PadError::Format(FormatError::UnknownPad { .. }) => CliError::PadNotFound {
                        path: pad.clone(),
                        id: id.clone(),
                    },
                    other => CliError::from(other),
                })?,
                None => batch
                    .first_mut()
                    .ok_or(CliError::Pad(PadError::Format(FormatError::Empty)))?,
            };
            let ciphertext = selected.encode(&message)?;
            warn!(
                "Pad {} has now been used. Destroy every copy of it; it must never encrypt again.",
                selected.id()
            );
            println!("{ciphertext}");
            Ok(())
        }
        Commands::Decrypt { pad, ciphertext } => {
            let batch = load_batch(&pad)?;
            let plaintext = batch.decode(ciphertext.trim())?;
            println!("{plaintext}");
            Ok(())
        }
    }
}

fn load_batch(path: &Path) -> Result<PadBatch, CliError> {
    let text = fs::read_to_string(path).map_err(CliError::io(path))?;
    let batch = PadBatch::parse(&text)?;
    info!("Loaded {} pad(s) from '{}'.", batch.len(), path.display());
    Ok(batch)
}

fn read_stdin() -> Result<String, CliError> {
    let mut message = String::new();
    std::io::stdin()
        .read_to_string(&mut message)
        .map_err(CliError::Stdin)?;
    Ok(message.trim_end_matches(['\r', '\n']).to_string())
}
