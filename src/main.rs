//! ddbjson command-line wrapper.
//!
//! Reads DynamoDB-JSON from a file or stdin, decodes it and prints the tag of each
//! decoded attribute. Exit codes separate malformed input from unexpected content:
//! - 0: decoded
//! - 1: I/O or configuration failure
//! - 2: envelope error (malformed input)
//! - 3: value error (unexpected content)

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ddbjson::{Config, Decoder, ErrorKind};

#[derive(Debug, Parser)]
#[command(name = "ddbjson", version, about = "Decode DynamoDB-JSON values and items")]
struct Cli {
    /// JSON configuration file.
    #[arg(long, env = "DDBJSON_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Maximum L/M nesting depth [default: 128, or the config file's value].
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a single tagged value object.
    Value {
        /// Input file; stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Decode an item envelope.
    Item {
        /// Input file; stdin when omitted or `-`.
        input: Option<PathBuf>,

        /// Wrapper field holding the attribute map.
        #[arg(long)]
        item_field: Option<String>,
    },
}

fn read_input(input: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read(path),
        _ => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Envelope => 2,
        ErrorKind::Value => 3,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config {}: {e}", path.display());
                return ExitCode::from(1);
            }
        },
        None => Config::default(),
    };
    if let Some(max_depth) = cli.max_depth {
        config.decoder.max_depth = max_depth;
    }
    if let Command::Item {
        item_field: Some(field),
        ..
    } = &cli.command
    {
        config.decoder.item_field = field.clone();
    }

    ddbjson::observability::init_tracing(&config.observability);

    let (Command::Value { input } | Command::Item { input, .. }) = &cli.command;
    let bytes = match read_input(input.as_ref()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            return ExitCode::from(1);
        }
    };

    let decoder = Decoder::new(config.decoder);
    let result = match &cli.command {
        Command::Value { .. } => decoder
            .decode_value(&bytes)
            .map(|value| vec![value.tag().to_string()]),
        Command::Item { .. } => decoder.decode_item(&bytes).map(|item| {
            let mut lines: Vec<String> = item
                .iter()
                .map(|(name, value)| format!("{name}\t{}", value.tag()))
                .collect();
            lines.sort();
            lines
        }),
    };

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "decode failed");
            eprintln!("{e}");
            ExitCode::from(exit_code(e.kind()))
        }
    }
}
