use crate::error::{CipherError, CipherResult};
use crate::scorer::tables::ScoreTables;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `ngram,weight` rows. Rows that fail to parse are skipped.
fn load_weighted(path: &Path) -> CipherResult<Vec<(String, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)?;

    let mut entries = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() < 2 {
            warn!("{:?}: row {} has fewer than 2 columns, skipped", path, line + 2);
            continue;
        }
        let gram = record[0].trim().to_string();
        match record[1].trim().parse::<f64>() {
            Ok(w) if w.is_finite() => entries.push((gram, w)),
            _ => warn!("{:?}: bad weight '{}' for '{}'", path, &record[1], gram),
        }
    }
    Ok(entries)
}

fn load_words(path: &Path) -> CipherResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)?;

    let mut words = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if let Some(w) = record.get(0) {
            let w = w.trim();
            if !w.is_empty() {
                words.push(w.to_string());
            }
        }
    }
    Ok(words)
}

/// Loads score tables from `dir`.
///
/// Looks for `bigrams.csv`, `trigrams.csv` and `words.csv`. Any file that is
/// missing keeps the built-in Spanish table for that part. Entries are taken
/// as written (only trimmed); ones outside the alphabet are dropped later by
/// [`Scorer::new`](crate::scorer::Scorer::new).
pub fn load_tables<P: AsRef<Path>>(dir: P) -> CipherResult<ScoreTables> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(CipherError::Config(format!(
            "Tables directory not found: {:?}",
            dir
        )));
    }

    info!("📚 Loading score tables from {:?}", dir);
    let mut tables = ScoreTables::spanish();

    let p2 = dir.join("bigrams.csv");
    if p2.exists() {
        tables.bigrams = load_weighted(&p2)?;
    } else {
        debug!("No bigrams.csv, keeping built-in bigrams");
    }

    let p3 = dir.join("trigrams.csv");
    if p3.exists() {
        tables.trigrams = load_weighted(&p3)?;
    } else {
        debug!("No trigrams.csv, keeping built-in trigrams");
    }

    let pw = dir.join("words.csv");
    if pw.exists() {
        tables.lexicon = load_words(&pw)?;
    } else {
        debug!("No words.csv, keeping built-in lexicon");
    }

    debug!(
        "Table sizes: {} bigrams, {} trigrams, {} words",
        tables.bigrams.len(),
        tables.trigrams.len(),
        tables.lexicon.len()
    );

    Ok(tables)
}
