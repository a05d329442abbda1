use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::indexer::config::INDEX_FILENAME;
use crate::indexer::{GitHubRepository, IndexConfig, LocalRepository, generate_chat_index};
use crate::models::ChatIndex;
use crate::parsers::dialects::{BLACK_BASTA, FOG, HIVE, LOCKBIT, MOUNTLOCKER, TRINITY};
use crate::parsers::{Dialect, convert_directory};
use crate::utils::{format_path_with_tilde, get_github_token};

#[derive(Parser)]
#[command(name = "ransomchats")]
#[command(version)]
#[command(about = "Convert leaked ransomware negotiation chats to JSON and index them")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Black Basta chat exports (.html)
    Blackbasta(ConvertArgs),
    /// Convert Fog chat exports (.html)
    Fog(ConvertArgs),
    /// Convert Hive chat exports (.html)
    Hive(ConvertArgs),
    /// Convert LockBit 3.0 chat exports (.html)
    Lockbit(ConvertArgs),
    /// Convert MountLocker chat exports (.html)
    Mountlocker(ConvertArgs),
    /// Convert Trinity chat exports (.htm)
    Trinity(ConvertArgs),
    /// Build chat_index.json from the chat repository
    Index(IndexArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Directory holding the saved chat pages
    pub input_folder: PathBuf,
    /// Directory the JSON chats are written to
    pub output_folder: PathBuf,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Index a local checkout instead of the GitHub repository (no token needed)
    #[arg(long, value_name = "DIR")]
    pub local: Option<PathBuf>,
    /// Where to write the index
    #[arg(long, short, value_name = "FILE", default_value = INDEX_FILENAME)]
    pub output: PathBuf,
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `info` default
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Blackbasta(args)) => convert(&BLACK_BASTA, args)?,
        Some(Commands::Fog(args)) => convert(&FOG, args)?,
        Some(Commands::Hive(args)) => convert(&HIVE, args)?,
        Some(Commands::Lockbit(args)) => convert(&LOCKBIT, args)?,
        Some(Commands::Mountlocker(args)) => convert(&MOUNTLOCKER, args)?,
        Some(Commands::Trinity(args)) => convert(&TRINITY, args)?,
        Some(Commands::Index(args)) => index(args)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn convert(dialect: &Dialect, args: &ConvertArgs) -> Result<()> {
    let report = convert_directory(dialect, &args.input_folder, &args.output_folder)?;

    println!(
        "Converted {} {} chats into {}",
        report.files_converted,
        dialect.name,
        format_path_with_tilde(&args.output_folder)
    );
    println!("  Messages extracted: {}", report.messages_extracted);
    if report.files_failed > 0 {
        println!("  Files failed: {}", report.files_failed);
    }

    Ok(())
}

fn index(args: &IndexArgs) -> Result<()> {
    let config = IndexConfig { output_path: args.output.clone(), ..IndexConfig::default() };

    let index = match &args.local {
        Some(dir) => generate_chat_index(&LocalRepository::new(dir), &config)?,
        None => {
            // Checked before any client exists, so a missing token never reaches the network
            let token = get_github_token()?;
            let repository = GitHubRepository::new(&config, token)?;
            generate_chat_index(&repository, &config)?
        }
    };

    print_summary(&index, &config.output_path);
    Ok(())
}

fn print_summary(index: &ChatIndex, output: &Path) {
    println!("Generated index with:");
    println!("  - {} groups", index.statistics.total_groups);
    println!("  - {} chats", index.statistics.total_chats);
    println!("  - {} messages", index.statistics.total_messages);

    for (group, data) in &index.groups {
        let stats = &data.group_statistics;
        println!("  - {}: {} chats, {} messages", group, stats.chat_count, stats.message_count);
    }

    println!("Index written to {}", format_path_with_tilde(output));
}
