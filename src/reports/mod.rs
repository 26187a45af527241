// ===== wordrank/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordrank::analyzer::{FrequencyEntry, PhraseSize, TextStats};

pub fn print_stats_summary(stats: &TextStats) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("KEYWORD ANALYSIS").add_attribute(Attribute::Bold),
        Cell::new("Value"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![
        Cell::new("Characters (with spaces)"),
        Cell::new(stats.chars_with_spaces.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Total words"),
        Cell::new(stats.total_words.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Meaningful words analyzed"),
        Cell::new(stats.total_filtered_words.to_string()).fg(Color::Cyan),
    ]);

    println!("\n{}", table);
}

pub fn print_keyword_report(keywords: &[FrequencyEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Percentage"),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for entry in keywords {
        table.add_row(vec![
            Cell::new(&entry.term),
            Cell::new(entry.count.to_string()).fg(Color::Cyan),
            Cell::new(format!("{:.2}%", entry.percentage)),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_top_keywords(keywords: &[FrequencyEntry], limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("Top {} Keywords", limit)).add_attribute(Attribute::Bold),
        Cell::new("Keyword"),
        Cell::new("Count"),
        Cell::new("Percentage"),
    ]);

    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, entry) in keywords.iter().take(limit).enumerate() {
        let term_cell = if rank == 0 {
            Cell::new(&entry.term)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&entry.term)
        };

        table.add_row(vec![
            Cell::new(format!("{}", rank + 1)),
            term_cell,
            Cell::new(entry.count.to_string()),
            Cell::new(format!("{:.2}%", entry.percentage)),
        ]);
    }

    println!("\n{}", table);
}

pub fn print_phrase_report(size: PhraseSize, phrases: &[FrequencyEntry]) {
    print_phrase_table(&format!("Top {} Phrases", size), phrases);
}

pub fn print_ngram_report(n: usize, phrases: &[FrequencyEntry]) {
    print_phrase_table(&format!("Top {}-word Phrases", n), phrases);
}

fn print_phrase_table(title: &str, phrases: &[FrequencyEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Phrase"),
        Cell::new("Count"),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (rank, entry) in phrases.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{}", rank + 1)),
            Cell::new(&entry.term),
            Cell::new(format!("{} times", entry.count)),
        ]);
    }

    println!("\n{}", table);
}
