use super::{read_input, OutputFormat};
use crate::reports;
use clap::Args;
use descifrador::config::ScoringWeights;
use descifrador::error::CipherResult;
use descifrador::scorer::Scorer;
use descifrador::text::normalize;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: ScoringWeights,

    /// Text file. Reads stdin when absent.
    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: &ScoreArgs, scorer: Arc<Scorer>) -> CipherResult<()> {
    let raw = read_input(args.input.as_deref())?;
    let details = scorer.score_details(&normalize(&raw));

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
        OutputFormat::Text => {
            reports::print_score_details("INPUT", &details);
            println!("\nScore: {:.2}", details.total);
        }
    }
    Ok(())
}
