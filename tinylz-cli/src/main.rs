//! tinylz CLI - byte-oriented LZ77 compression.
//!
//! A thin driver that wires files to the tinylz encoder/decoder and reports
//! size/ratio statistics. All compression logic lives in the `tinylz` crate.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extension used for compressed token streams.
const EXTENSION: &str = "tlz";

#[derive(Parser)]
#[command(name = "tinylz")]
#[command(version, about = "Tiny LZ77 compressor with fixed 2-byte tokens")]
#[command(long_about = "
tinylz compresses files into a flat stream of 2-byte LZ77 tokens
(5-bit offset, 3-bit length, 1 literal byte) and restores them losslessly.

Examples:
  tinylz compress source.txt
  tinylz compress source.txt -o packed.tlz
  tinylz decompress packed.tlz -o restored.txt
  tinylz test source.txt
  tinylz info packed.tlz
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a token stream
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file (defaults to input with a .tlz suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decompress a token stream back into the original bytes
    #[command(alias = "d", alias = "x")]
    Decompress {
        /// Token stream to decompress
        input: PathBuf,

        /// Output file (defaults to input without its .tlz suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Round-trip a file in memory and verify the result
    #[command(alias = "t")]
    Test {
        /// File to round-trip
        input: PathBuf,
    },

    /// Show statistics about a compressed token stream
    #[command(alias = "i")]
    Info {
        /// Token stream to inspect
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
        } => cmd_compress(&input, output, verbose),
        Commands::Decompress {
            input,
            output,
            verbose,
        } => cmd_decompress(&input, output, verbose),
        Commands::Test { input } => cmd_test(&input),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Default output path for `compress`: append the .tlz extension.
fn compressed_name(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Default output path for `decompress`: strip the .tlz extension if
/// present, otherwise append .out.
fn decompressed_name(input: &Path) -> PathBuf {
    if input.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_os_string();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn print_ratio(original: usize, encoded: usize) {
    println!("Original size: {} bytes", original);
    println!("Encoded size: {} bytes", encoded);
    if original > 0 {
        let rate = (original as f64 - encoded as f64) / original as f64 * 100.0;
        println!("Compression rate: {:.2}%", rate);
    }
}

fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;
    let packed = tinylz::compress(&data);

    let output = output.unwrap_or_else(|| compressed_name(input));
    std::fs::write(&output, &packed)?;

    if verbose {
        println!("  {} -> {}", input.display(), output.display());
    }
    print_ratio(data.len(), packed.len());
    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let packed = std::fs::read(input)?;
    let data = tinylz::decompress(&packed)?;

    let output = output.unwrap_or_else(|| decompressed_name(input));
    std::fs::write(&output, &data)?;

    if verbose {
        println!("  {} -> {}", input.display(), output.display());
    }
    println!("Decoded {} bytes from {} bytes", data.len(), packed.len());
    Ok(())
}

fn cmd_test(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = std::fs::read(input)?;

    println!("Testing {}", input.display());

    let packed = tinylz::compress(&data);
    let restored = tinylz::decompress(&packed)?;

    print_ratio(data.len(), packed.len());

    if restored != data {
        eprintln!("FAILED: round-trip mismatch");
        std::process::exit(2);
    }

    println!("Round-trip OK");
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let packed = std::fs::read(input)?;
    let tokens = tinylz::stream::from_bytes(&packed)?;

    let matches = tokens.iter().filter(|t| t.length() > 0).count();
    let literals_only = tokens.len() - matches;
    let decoded_size: usize = tokens.iter().map(|t| t.length() as usize + 1).sum();

    println!("Token Stream Information");
    println!("========================");
    println!("File: {}", input.display());
    println!("Stream size: {} bytes", packed.len());
    println!("Tokens: {}", tokens.len());
    println!("  With back-reference: {}", matches);
    println!("  Literal-only: {}", literals_only);
    println!("Decoded size: {} bytes", decoded_size);
    if decoded_size > 0 {
        let rate = (decoded_size as f64 - packed.len() as f64) / decoded_size as f64 * 100.0;
        println!("Compression rate: {:.2}%", rate);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compressed_name() {
        assert_eq!(
            compressed_name(Path::new("source.txt")),
            PathBuf::from("source.txt.tlz")
        );
    }

    #[test]
    fn test_decompressed_name_strips_extension() {
        assert_eq!(
            decompressed_name(Path::new("source.txt.tlz")),
            PathBuf::from("source.txt")
        );
    }

    #[test]
    fn test_decompressed_name_fallback() {
        assert_eq!(
            decompressed_name(Path::new("packed.bin")),
            PathBuf::from("packed.bin.out")
        );
    }
}
