use anyhow::{Result, anyhow};
use caesar_core::{Breaker, DEFAULT_OUTPUT_PATH, FileStore, Store, decode, encode};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "caesar-cli")]
#[command(about = "Caesar cipher (en|de)code and brute-force breaker – CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every letter forward by KEY
    Encode {
        message: String,

        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,
    },

    /// Shift every letter back by KEY
    Decode {
        message: String,

        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,
    },

    /// Write all 25 candidate decryptions of CIPHERTEXT to a file
    Break {
        ciphertext: String,

        /// Where to write the candidates (the directory must exist)
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,
    },

    /// List the candidates from a previously written file
    Show {
        #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Report which keys produced this exact plaintext
        #[arg(short, long)]
        find: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { message, key } => println!("{}", encode(&message, key)),
        Commands::Decode { message, key } => println!("{}", decode(&message, key)),
        Commands::Break { ciphertext, output } => {
            // The breaker has already told the user why; just fail the exit status
            if !cmd_break(&ciphertext, &output) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Show { output, find } => cmd_show(&output, find.as_deref(), &mut io::stdout())?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Returns whether the candidates were saved
fn cmd_break(ciphertext: &str, output: &Path) -> bool {
    let store = FileStore::new(output);
    log::debug!(
        "breaking {} chars into {}",
        ciphertext.chars().count(),
        store.location().display()
    );

    Breaker::with_store(ciphertext, &store, io::stdout())
        .decrypt()
        .is_saved()
}

fn cmd_show(output: &Path, find: Option<&str>, out: &mut impl io::Write) -> Result<()> {
    let candidates = FileStore::new(output).load().map_err(|e| {
        let path = e.path().display().to_string();
        anyhow!(e).context(format!("Failed to read candidates file: {}", path))
    })?;

    writeln!(out, "[info] {} candidates in {}", candidates.len(), output.display())?;
    for (key, candidate) in candidates.iter() {
        writeln!(out, "{:>2}: {}", key, candidate)?;
    }

    if let Some(plaintext) = find {
        let keys = candidates.keys_for(plaintext);
        if keys.is_empty() {
            writeln!(out, "[info] \"{}\" not among the candidates", plaintext)?;
        } else {
            writeln!(out, "[info] \"{}\" found at key(s) {:?}", plaintext, keys)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_key() {
        let cli = Cli::try_parse_from(["caesar-cli", "encode", "abc", "--key", "-3"]).unwrap();
        assert!(matches!(cli.command, Commands::Encode { key: -3, .. }));
    }

    #[test]
    fn test_break_then_show() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");

        assert!(cmd_break("Ebiil, Tloia!", &output));

        let mut listing = Vec::new();
        cmd_show(&output, None, &mut listing).unwrap();
        let text = String::from_utf8(listing).unwrap();

        assert!(text.contains("23: Hello, World!"));
        assert_eq!(text.lines().count(), 26);
    }

    #[test]
    fn test_break_into_missing_directory_errors() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("missing").join("out.json");

        assert!(!cmd_break("Ebiil, Tloia!", &output));
        assert!(!output.exists());
    }

    #[test]
    fn test_show_finds_plaintext_key() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.json");
        assert!(cmd_break("Ebiil, Tloia!", &output));

        let mut listing = Vec::new();
        cmd_show(&output, Some("Hello, World!"), &mut listing).unwrap();
        let text = String::from_utf8(listing).unwrap();

        assert!(text.ends_with("[info] \"Hello, World!\" found at key(s) [23]\n"));
    }

    #[test]
    fn test_show_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nothing.json");

        let err = cmd_show(&output, None, &mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{}", err).contains("nothing.json"));
    }
}
