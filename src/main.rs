use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use descifrador::config::ScoringWeights;
use descifrador::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Breaks Spanish monoalphabetic substitution ciphers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring weights. Flags given explicitly still win.
    #[arg(global = true, long)]
    weights: Option<String>,

    /// Directory with bigrams.csv / trigrams.csv / words.csv replacing the built-in tables.
    #[arg(global = true, long)]
    tables: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Decrypt(cmd::decrypt::DecryptArgs),
    Encrypt(cmd::encrypt::EncryptArgs),
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let outcome = match &cli.command {
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Decrypt(args) => {
            let sub = matches.subcommand_matches("decrypt");
            let scorer = build_scorer(&cli, &args.config.weights, sub);
            cmd::decrypt::run(args, scorer)
        }
        Commands::Score(args) => {
            let sub = matches.subcommand_matches("score");
            let scorer = build_scorer(&cli, &args.weights, sub);
            cmd::score::run(args, scorer)
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// Resolves weights (file, then explicit flags) and tables, exiting on failure.
fn build_scorer(
    cli: &Cli,
    cli_weights: &ScoringWeights,
    sub_matches: Option<&clap::ArgMatches>,
) -> Arc<Scorer> {
    let weights = match &cli.weights {
        Some(path) => {
            info!("⚖️  Loading Weights from: {}", path);
            let mut file_weights = ScoringWeights::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load weights '{}': {}", path, e);
                process::exit(1);
            });
            match sub_matches {
                Some(m) => file_weights.merge_from_cli(cli_weights, m),
                None => warn!("⚠️  No subcommand matches, CLI weight overrides ignored"),
            }
            file_weights
        }
        None => cli_weights.clone(),
    };

    let scorer = match &cli.tables {
        Some(dir) => Scorer::from_dir(dir, weights),
        None => Ok(Scorer::new(&Default::default(), weights)),
    };

    match scorer {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("\n❌ FATAL ERROR INITIALIZING SCORER:");
            error!("   {}", e);
            process::exit(1);
        }
    }
}
