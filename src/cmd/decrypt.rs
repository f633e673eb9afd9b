use super::{read_input, OutputFormat};
use crate::reports;
use clap::Args;
use descifrador::config::Config;
use descifrador::consts::PREVIEW_CHARS;
use descifrador::error::CipherResult;
use descifrador::optimizer::{Optimizer, ProgressCallback, RestartReport, SearchOptions};
use descifrador::scorer::Scorer;
use descifrador::text::{normalize, preview, Ciphertext};
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ciphertext file. Reads stdin when absent.
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_restart(&self, report: &RestartReport) {
        match report.best_score {
            Some(best) => info!(
                "Restart {:3} | Start: {:.2} | Best: {:.2} | Accepted: {}",
                report.restart, report.start_score, best, report.accepted
            ),
            None => info!(
                "Restart {:3} | Start: {:.2} | no move accepted",
                report.restart, report.start_score
            ),
        }
    }
}

pub fn run(args: &DecryptArgs, scorer: Arc<Scorer>) -> CipherResult<()> {
    let raw = read_input(args.input.as_deref())?;
    let cipher = Ciphertext::new(normalize(&raw));

    let options = SearchOptions::from(&args.config);
    info!(
        "🔍 {} restarts x {} iterations over {} letters",
        options.restarts,
        options.iters,
        cipher.letter_count()
    );

    let optimizer = Optimizer::new(scorer.clone(), options);
    let result = optimizer.run(&cipher, args.seed, CliLogger);

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            reports::print_preview(&preview(cipher.text(), PREVIEW_CHARS));
            reports::print_plaintext(result.plaintext());
            reports::print_key_table(result.key());
            reports::print_score_details(
                "RECOVERED",
                &scorer.score_details(result.plaintext()),
            );
            println!("\nScore: {:.2}", result.score());
        }
    }

    Ok(())
}
