// ===== gramforge/src/main.rs =====
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use gramforge::config::Config;
use gramforge::corpus::CorpusSet;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short = 'c', long, default_value = "data/corpus")]
    corpus: String,

    /// JSON params profile; explicit CLI flags override its values
    #[arg(global = true, long)]
    profile: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Generate(cmd::generate::GenerateArgs),
    Drill(cmd::drill::DrillArgs),
}

fn main() {
    // 1. Parse Raw Matches (to distinguish user input from defaults)
    let matches = Cli::command().get_matches();

    // 2. Construct CLI struct (populated with defaults)
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    // 3. Dispatch. Drill config lives inside the subcommand's matches, so
    // profile merging needs those, not the root.
    let result = match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args.clone()),
        Commands::Generate(args) => {
            let config = resolve_config(
                &args.config,
                cli.profile.as_deref(),
                matches.subcommand_matches("generate").unwrap(),
            );
            let corpus = load_corpus(&cli.corpus);
            cmd::generate::run(args.clone(), config, corpus)
        }
        Commands::Drill(args) => {
            let config = resolve_config(
                &args.config,
                cli.profile.as_deref(),
                matches.subcommand_matches("drill").unwrap(),
            );
            let corpus = load_corpus(&cli.corpus);
            cmd::drill::run(args.clone(), config, corpus)
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

/// Resolve Params Strategy: JSON profile as the base, explicit CLI flags
/// merged on top.
fn resolve_config(cli_config: &Config, profile: Option<&str>, sub_matches: &ArgMatches) -> Config {
    match profile {
        Some(path) => {
            info!("Loading params profile from: {}", path);
            match Config::load_from_file(path) {
                Ok(mut base) => {
                    base.merge_from_cli(cli_config, sub_matches);
                    base
                }
                Err(e) => {
                    error!("Failed to load profile '{}': {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => cli_config.clone(),
    }
}

fn load_corpus(dir: &str) -> CorpusSet {
    if Path::new(dir).exists() {
        info!("Loading corpora from: {}", dir);
        CorpusSet::load_from_dir(dir).unwrap_or_else(|e| {
            error!("Failed to load corpus directory '{}': {}", dir, e);
            process::exit(1);
        })
    } else {
        warn!("Corpus directory '{}' not found. Using embedded defaults.", dir);
        CorpusSet::embedded()
    }
}
