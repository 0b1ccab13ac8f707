mod commands;
mod crypto;
mod error;
mod ignore;
mod key;
mod session;

use clap::{Parser, Subcommand};
use error::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "invisible_ink")]
#[command(version = "0.1.0")]
#[command(about = "Safely edit and read encrypted files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file in your editor, encrypting it on save
    Write {
        /// File to edit
        file: PathBuf,
    },

    /// Decrypt a file and print its contents
    Read {
        /// File to decrypt
        file: PathBuf,
    },

    /// Generate invisible_ink.key and add it to .gitignore
    Setup,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; those keep exit code 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Write { file } => commands::write(&file),
        Commands::Read { file } => commands::read(&file),
        Commands::Setup => commands::setup(),
    }
}
