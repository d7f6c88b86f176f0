use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use eiji_build::{run, JsonArchive};
use eiji_core::{BuildParams, DictionaryIndex};
use eiji_inflect::EnglishRules;

#[derive(Parser)]
#[command(
    name = "eiji-build",
    about = "Convert an 英辞郎 text lexicon into a Yomitan-style dictionary"
)]
struct Cli {
    /// Lexicon text file (EIJIRO*.txt is read as Shift_JIS)
    #[arg(long)]
    input: PathBuf,

    /// Known plurals, one `lemma,plural[,plural...]` row per line
    #[arg(long, default_value = "noun.csv")]
    plurals: PathBuf,

    /// Output path for the JSON archive
    #[arg(long, default_value = "eiji.json")]
    output: PathBuf,

    /// TOML file with build parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dictionary title (overrides the config file)
    #[arg(long)]
    title: Option<String>,

    /// Tag taboo and archaic senses
    #[arg(long)]
    register_tags: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let mut params = match &cli.config {
        Some(path) => BuildParams::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BuildParams::default(),
    };
    if let Some(title) = cli.title {
        params.title = title;
    }
    if cli.register_tags {
        params.register_tags = true;
    }

    tracing::info!("Input:  {:?}", cli.input);
    tracing::info!("Output: {:?}", cli.output);

    let mut archive = JsonArchive::new(&cli.output, DictionaryIndex::from_params(&params));
    let report = run(&cli.input, &cli.plurals, &params, &EnglishRules, &mut archive)
        .with_context(|| format!("failed to build dictionary from {}", cli.input.display()))?;
    report.log();

    Ok(())
}
