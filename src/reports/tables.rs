use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use descifrador::key::Key;
use descifrador::scorer::ScoreDetails;

/// Cipher -> plain pairs, listed by plain letter.
pub fn key(key: &Key) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Cipher").add_attribute(Attribute::Bold),
        Cell::new("->"),
        Cell::new("Plain").add_attribute(Attribute::Bold).fg(Color::Green),
    ]);

    for (cipher, plain) in key.pairs_by_plain() {
        table.add_row(vec![
            Cell::new(cipher),
            Cell::new("->"),
            Cell::new(plain).fg(Color::Green),
        ]);
    }

    for i in 0..3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }

    println!("\n================ KEY (cipher -> plain) ================\n");
    println!("{}", table);
    println!("Images: {}", key);
}

pub fn score_details(name: &str, d: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Text").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Bigram"),
        Cell::new("Trigram"),
        Cell::new("Lexicon").fg(Color::Green),
        Cell::new("Vowel").fg(Color::Red),
        Cell::new("Letters"),
        Cell::new("V-Ratio"),
        Cell::new("Words"),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.add_row(vec![
        Cell::new(name).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2}", d.total)).fg(Color::Cyan),
        Cell::new(format!("{:.1}", d.bigram)),
        Cell::new(format!("{:.1}", d.trigram)),
        Cell::new(format!("{:.1}", d.lexicon)).fg(Color::Green),
        Cell::new(format!("-{:.2}", d.vowel_penalty)).fg(Color::Red),
        Cell::new(d.letters),
        Cell::new(format!("{:.3}", d.vowel_ratio)),
        Cell::new(d.lexicon_hits),
    ]);

    println!("\n{}", table);
}
