use std::path::Path;

use console::Style;
use querylens_core::artifact::{ResultArtifact, TableArtifact};
use querylens_core::result_view::ResultViewMode;

/// Cells wider than this are cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 40;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    path: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            dim: Style::new().dim().yellow(),
        }
    }
}

pub fn print_answer_summary(
    question: &str,
    mode: ResultViewMode,
    image_path: Option<&Path>,
    artifact: &ResultArtifact,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("QueryLens Result"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();
    println!("  {:<14}{}", s.label.apply_to("Question"), s.value.apply_to(question));

    match image_path {
        Some(path) => println!(
            "  {:<14}{}",
            s.label.apply_to("Plot"),
            s.path.apply_to(path.display())
        ),
        None => println!("  {:<14}{}", s.label.apply_to("Plot"), s.dim.apply_to("none")),
    }

    let rows = artifact.table.as_ref().map_or(0, TableArtifact::row_count);
    println!("  {:<14}{}", s.label.apply_to("Rows"), s.value.apply_to(rows));
    println!("  {:<14}{}", s.label.apply_to("Preferred"), s.value.apply_to(mode));
    println!();
}

pub fn print_table(title: &str, table: &TableArtifact, max_rows: usize) {
    let s = Styles::new();
    let shown = if max_rows == 0 {
        table.row_count()
    } else {
        max_rows.min(table.row_count())
    };

    let cells: Vec<Vec<String>> = (0..shown)
        .map(|row| {
            table
                .columns
                .iter()
                .map(|col| truncate(&table.cell_text(row, col)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(truncate(col).chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    println!("  {}", s.title.apply_to(title));
    println!();

    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(col, w)| format!("{:<w$}", truncate(col), w = *w))
        .collect();
    println!("  {}", s.header.apply_to(header.join("  ")));

    let rule: Vec<String> = widths.iter().map(|w| "\u{2500}".repeat(*w)).collect();
    println!("  {}", s.label.apply_to(rule.join("  ")));

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        println!("  {}", line.join("  "));
    }

    if shown < table.row_count() {
        println!(
            "  {}",
            s.dim
                .apply_to(format!("... {} more rows", table.row_count() - shown))
        );
    }
    println!();
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_WIDTH {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
    cut.push('\u{2026}');
    cut
}
