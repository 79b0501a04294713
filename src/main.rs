//! # latin1-view CLI - Decode single-byte text through character views
//!
//! Command-line interface for resolving IANA encoding aliases and decoding
//! US-ASCII / ISO-8859-1 data, optionally restricted to a character range.

#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use serde::Serialize;

#[cfg(feature = "cli")]
use latin1_view::{Encoding, EncodingInfo, registry, to_char_sequence};

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI features disabled. Enable with --features cli");
    std::process::exit(1);
}

/// latin1-view: decode single-byte text through zero-copy character views
#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "latin1-view")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Decode a file (or a character range of it) to UTF-8
    Decode(DecodeArgs),

    /// Resolve an IANA alias to an encoding
    Resolve(ResolveArgs),

    /// List all supported encodings
    List(ListArgs),

    /// Display detailed information about an encoding
    Info(InfoArgs),
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct DecodeArgs {
    /// Source encoding, as a case-sensitive IANA alias
    #[arg(short, long)]
    encoding: Encoding,

    /// Input file (stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// First character to decode
    #[arg(long, allow_negative_numbers = true)]
    start: Option<isize>,

    /// One past the last character to decode
    #[arg(long, allow_negative_numbers = true)]
    end: Option<isize>,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ResolveArgs {
    /// Alias to look up (case-sensitive)
    alias: String,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct ListArgs {
    /// Show the registered aliases of each encoding
    #[arg(long)]
    aliases: bool,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InfoArgs {
    /// Encoding to describe
    encoding: Encoding,
}

#[cfg(feature = "cli")]
#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct DecodeResult {
    encoding: Encoding,
    length: usize,
    text: String,
}

#[cfg(feature = "cli")]
#[derive(Serialize)]
struct EncodingDetails {
    name: Encoding,
    #[serde(flatten)]
    info: EncodingInfo,
    aliases: Vec<&'static str>,
}

#[cfg(feature = "cli")]
impl EncodingDetails {
    fn new(encoding: Encoding) -> Self {
        Self {
            name: encoding,
            info: encoding.metadata(),
            aliases: encoding.aliases().collect(),
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(ref args) => decode_command(args, &cli)?,
        Commands::Resolve(ref args) => resolve_command(args, &cli)?,
        Commands::List(ref args) => list_command(args, &cli)?,
        Commands::Info(ref args) => info_command(args, &cli)?,
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn decode_command(args: &DecodeArgs, cli: &Cli) -> Result<()> {
    let input_data = if let Some(ref input_path) = args.input {
        if cli.verbose {
            eprintln!("Reading from: {}", input_path.display());
        }
        fs::read(input_path)
            .with_context(|| format!("Failed to read input file: {}", input_path.display()))?
    } else {
        if cli.verbose {
            eprintln!("Reading from stdin");
        }
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let root = to_char_sequence(input_data, args.encoding);
    let view = match (args.start, args.end) {
        (None, None) => root,
        (start, end) => {
            let start = start.unwrap_or(0);
            let end = end.unwrap_or(root.len() as isize);
            if cli.verbose {
                eprintln!("Selecting characters [{}, {}) of {}", start, end, root.len());
            }
            root.subsequence(start, end)
                .with_context(|| format!("Invalid character range {}..{}", start, end))?
        }
    };

    if cli.verbose {
        eprintln!("Decoding {} characters as {}", view.len(), args.encoding);
    }

    match cli.format {
        OutputFormat::Json => {
            let result = DecodeResult {
                encoding: args.encoding,
                length: view.len(),
                text: view.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            io::stdout()
                .write_all(view.to_string().as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn resolve_command(args: &ResolveArgs, cli: &Cli) -> Result<()> {
    let Some(encoding) = registry::resolve(&args.alias) else {
        match cli.format {
            OutputFormat::Json => {
                let result = serde_json::json!({ "alias": args.alias, "encoding": null });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => println!("✗ Unknown alias: {}", args.alias),
        }
        std::process::exit(1);
    };

    match cli.format {
        OutputFormat::Json => {
            let result = serde_json::json!({ "alias": args.alias, "encoding": encoding });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => println!("{} -> {}", args.alias, encoding),
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn list_command(args: &ListArgs, cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let encodings: Vec<_> = Encoding::ALL
                .iter()
                .map(|&encoding| EncodingDetails::new(encoding))
                .collect();
            println!("{}", serde_json::to_string_pretty(&encodings)?);
        }
        OutputFormat::Text => {
            println!("Supported Encodings ({} total):", Encoding::ALL.len());
            println!();

            for encoding in Encoding::ALL {
                println!("{:15} {}", encoding.mime_name(), encoding.iana_name());
                if args.aliases {
                    println!(
                        "                Aliases: {}",
                        encoding.aliases().collect::<Vec<_>>().join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn info_command(args: &InfoArgs, cli: &Cli) -> Result<()> {
    let details = EncodingDetails::new(args.encoding);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&details)?);
        }
        OutputFormat::Text => {
            println!("Encoding Information: {}", details.name);
            println!("MIME name: {}", details.info.mime_name);
            println!("IANA name: {}", details.info.iana_name);
            println!("Aliases: {}", details.aliases.join(", "));
            println!("Decoder: {:?}", args.encoding.decoder());
        }
    }

    Ok(())
}
