//! Plain-text rendering of the assembled trip document
//!
//! The renderer emits pure ASCII. Anything outside that range is folded
//! through a fixed transliteration table first (rupee sign to "Rs.",
//! typographic quotes and dashes to their plain forms, common accented
//! vowels stripped); characters without a mapping are dropped.

use crate::models::{Block, Table, TripDocument};

const TRANSLITERATIONS: &[(char, &str)] = &[
    ('\u{20b9}', "Rs. "), // ₹
    ('\u{2013}', "-"),    // en dash
    ('\u{2014}', "-"),    // em dash
    ('\u{2018}', "'"),
    ('\u{2019}', "'"),
    ('\u{201c}', "\""),
    ('\u{201d}', "\""),
    ('\u{2022}', "-"), // bullet
    ('\u{2026}', "..."),
    ('\u{00a0}', " "),
    ('\u{00e9}', "e"),
    ('\u{00e8}', "e"),
    ('\u{00ea}', "e"),
    ('\u{00e1}', "a"),
    ('\u{00e0}', "a"),
    ('\u{00e2}', "a"),
    ('\u{00ed}', "i"),
    ('\u{00ee}', "i"),
    ('\u{00f3}', "o"),
    ('\u{00f4}', "o"),
    ('\u{00fa}', "u"),
    ('\u{00fb}', "u"),
    ('\u{00f1}', "n"),
];

/// Fold a string down to ASCII using the transliteration table
#[must_use]
pub fn ascii_fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some((_, replacement)) =
            TRANSLITERATIONS.iter().find(|(from, _)| *from == c)
        {
            out.push_str(replacement);
        }
        // unmapped non-ASCII is dropped
    }
    out
}

/// Render the whole document as plain text
#[must_use]
pub fn render_text(doc: &TripDocument) -> String {
    let mut out = String::new();

    let title = ascii_fold(&doc.title);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push('\n');
    for line in &doc.subtitle_lines {
        out.push_str(&ascii_fold(line));
        out.push('\n');
    }
    out.push('\n');

    for section in &doc.sections {
        let heading = ascii_fold(&section.title);
        out.push_str(&heading);
        out.push('\n');
        out.push_str(&"-".repeat(heading.len()));
        out.push('\n');

        for block in &section.blocks {
            match block {
                Block::Paragraph(text) => {
                    out.push_str(&ascii_fold(text));
                    out.push_str("\n\n");
                }
                Block::Bullets { title, items } => {
                    if !title.is_empty() {
                        out.push_str(&ascii_fold(title));
                        out.push('\n');
                    }
                    for item in items {
                        out.push_str("  - ");
                        out.push_str(&ascii_fold(item));
                        out.push('\n');
                    }
                    out.push('\n');
                }
                Block::Table(table) => {
                    render_table(&mut out, table);
                    out.push('\n');
                }
            }
        }
    }

    out
}

fn render_table(out: &mut String, table: &Table) {
    let mut widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| ascii_fold(h).len())
        .collect();
    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for row in table.rows.iter().chain(table.footer.iter()) {
        let folded: Vec<String> = row.iter().map(|cell| ascii_fold(cell)).collect();
        for (i, cell) in folded.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
        all_rows.push(folded);
    }

    let write_row = |out: &mut String, cells: &[String]| {
        for (i, cell) in cells.iter().enumerate() {
            out.push_str("  ");
            out.push_str(cell);
            if i + 1 < cells.len() {
                out.push_str(&" ".repeat(widths[i].saturating_sub(cell.len())));
            }
        }
        out.push('\n');
    };

    let folded_headers: Vec<String> = table.headers.iter().map(|h| ascii_fold(h)).collect();
    write_row(out, &folded_headers);
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len();
    out.push_str(&format!("  {}\n", "-".repeat(rule_len)));

    let footer_start = table.rows.len();
    for (i, row) in all_rows.iter().enumerate() {
        if i == footer_start {
            out.push_str(&format!("  {}\n", "-".repeat(rule_len)));
        }
        write_row(out, row);
    }
}
