use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_artifact::ArtifactManifest;
use listing_cli::pipeline::CleanRun;
use listing_validate::ValidationReport;

pub fn print_clean_summary(run: &CleanRun) {
    let summary = &run.summary;
    println!("Published: {}", run.published.reference());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input"), Cell::new(summary.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped (price out of range)"),
        count_cell(Some(summary.dropped_rows()), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unparsed review dates"),
        count_cell(summary.unparsed_dates, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Output")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.output_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_check_report(report: &ValidationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Check"),
        header_cell("Status"),
        header_cell("Kind"),
        header_cell("Message"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for outcome in &report.outcomes {
        let row = match &outcome.result {
            Ok(()) => vec![
                Cell::new(outcome.check.label()),
                Cell::new("PASS")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                dim_cell("-"),
            ],
            Err(failure) => vec![
                Cell::new(outcome.check.label()),
                Cell::new("FAIL")
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold),
                Cell::new(failure.kind()).fg(Color::Red),
                Cell::new(failure.to_string()),
            ],
        };
        table.add_row(row);
    }
    for check in &report.skipped {
        table.add_row(vec![
            dim_cell(check.label()),
            dim_cell("SKIP"),
            dim_cell("-"),
            dim_cell("not run after earlier failure"),
        ]);
    }
    println!("{table}");
}

pub fn print_artifact_versions(name: &str, manifests: &[ArtifactManifest]) {
    if manifests.is_empty() {
        println!("No published versions of {name}");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Version"),
        header_cell("Type"),
        header_cell("Created"),
        header_cell("Bytes"),
        header_cell("SHA-256"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for manifest in manifests {
        table.add_row(vec![
            Cell::new(format!("v{}", manifest.version)),
            Cell::new(&manifest.metadata.artifact_type),
            Cell::new(manifest.created_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(manifest.size),
            dim_cell(&manifest.sha256[..manifest.sha256.len().min(12)]),
            Cell::new(&manifest.metadata.description),
        ]);
    }
    println!("{table}");
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
