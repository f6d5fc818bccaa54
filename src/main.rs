use anyhow::{Context, Result};
use clap::Parser;
use spamplay::config::{CliConfig, CorpusConfig, FileConfig};
use spamplay::corpus::{load_corpus, Conversation};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(name = "spamplay")]
#[command(about = "Parse the Cornell movie-dialogs corpus and play back random conversations")]
struct CliArgs {
    /// Extracted corpus directory or the corpus zip archive.
    #[clap(value_parser = parse_path)]
    pub corpus_path: Option<PathBuf>,

    /// Path to a TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Abort on the first malformed record instead of skipping it.
    #[clap(long)]
    pub strict: bool,

    /// Text encoding of the corpus files (defaults to windows-1252).
    #[clap(long)]
    pub encoding: Option<String>,

    /// How many random conversations to print.
    #[clap(short = 'n', long, default_value_t = 1)]
    pub conversations: usize,
}

fn print_conversation(conversation: &Conversation) {
    println!("{}", conversation);
    for line in conversation.lines.iter() {
        println!("  {}: {}", line.character.name, line.text);
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        corpus_path: cli_args.corpus_path,
        encoding: cli_args.encoding,
        strict: cli_args.strict,
    };
    let config = CorpusConfig::resolve(&cli_config, file_config)?;

    let corpus = load_corpus(&config)?;
    let stats = corpus.stats();
    println!(
        "Successfully processed corpus data from {}:",
        config.corpus_path.display()
    );
    println!(" -  {} movies", stats.movies);
    println!(" -  {} characters", stats.characters);
    println!(" -  {} lines", stats.lines);
    println!(" -  {} conversations", stats.conversations);
    let skipped: usize = corpus.reports().iter().map(|r| r.skipped()).sum();
    let hard_failures: usize = corpus.reports().iter().map(|r| r.hard_failures()).sum();
    if skipped + hard_failures > 0 {
        println!(
            " -  {} records skipped, {} conversations unrecoverable",
            skipped, hard_failures
        );
    }

    for _ in 0..cli_args.conversations {
        println!();
        let conversation = corpus
            .random_conversation()
            .context("Cannot pick a conversation")?;
        print_conversation(conversation);
    }

    Ok(())
}
