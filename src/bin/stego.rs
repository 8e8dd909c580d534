//! # Stego Binary Entry Point
//!
//! Thin command-line wrapper around the LSB steganography library.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin stego -- encode --input cover.png --message "Secret" --output secret.png
//! cargo run --bin stego -- decode --input secret.png
//! cargo run --bin stego -- capacity --input cover.png --json
//! ```
//!
//! An optional TOML file sets the log level and output policy:
//! ```bash
//! cargo run --bin stego -- --config config/stego.toml decode --input secret.png
//! ```

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;

use lsb_stego::common::config::{load_config, StegoConfig};
use lsb_stego::processing::steganography;

/// Command-line arguments for the stego binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (TOML format)
    ///
    /// Example: config/stego.toml
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a message in an image
    Encode {
        /// Carrier image (RGB or RGBA)
        #[arg(short, long)]
        input: PathBuf,

        /// Message to hide (characters U+0000..=U+00FF only)
        #[arg(short, long)]
        message: String,

        /// Where to write the encoded image; the extension picks the format
        #[arg(short, long)]
        output: PathBuf,

        /// Allow writing to lossy formats such as JPEG
        #[arg(long)]
        allow_lossy: bool,
    },

    /// Print the message hidden in an image
    Decode {
        /// Encoded image
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show how many characters an image can hold
    Capacity {
        /// Carrier image
        #[arg(short, long)]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Initialize the logging system with timestamp, level, and message formatting.
///
/// Logs go to stderr so decoded messages on stdout stay clean.
/// Format: `[HH:MM:SS] [LEVEL] message`
fn init_logger(level: LevelFilter) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .init();
}

/// Reject messages the front end should never try to hide.
fn check_message(message: &str) -> Result<()> {
    if message.is_empty() {
        bail!("message must not be empty");
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration, falling back to defaults
    let config: StegoConfig = match &args.config {
        Some(path) => load_config(path)?,
        None => StegoConfig::default(),
    };

    // Initialize logging
    init_logger(config.logging.level_filter()?);

    match args.command {
        Command::Encode {
            input,
            message,
            output,
            allow_lossy,
        } => {
            check_message(&message)?;
            let allow_lossy = allow_lossy || config.output.allow_lossy;
            steganography::embed_text(&input, &message, &output, allow_lossy)?;
        }
        Command::Decode { input } => {
            let message = steganography::extract_text(&input)?;
            println!("{}", message);
        }
        Command::Capacity { input, json } => {
            let report = steganography::inspect_capacity(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                info!("Inspected {}", input.display());
                println!(
                    "{}x{} {} image: {} pixels, {} bits, up to {} characters",
                    report.width,
                    report.height,
                    report.mode,
                    report.pixels,
                    report.capacity_bits,
                    report.max_message_chars
                );
            }
        }
    }

    Ok(())
}
