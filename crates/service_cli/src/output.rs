//! Report rendering for terminal output.

use paleo_bootstrap::BootstrapReport;
use paleo_estimators::{FlatteningPoint, UnfoldingPoint};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

const WIDTH: usize = 24;

fn row(label: &str, value: &str) -> String {
    format!("│ {:<w$} │ {:<w$} │\n", label, value, w = WIDTH)
}

fn rule(left: char, mid: char, right: char) -> String {
    let bar = "─".repeat(WIDTH + 2);
    format!("{}{}{}{}{}\n", left, bar, mid, bar, right)
}

fn table(title: &str, rows: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str(&rule('┌', '┬', '┐'));
    out.push_str(&row(title, ""));
    out.push_str(&rule('├', '┼', '┤'));
    for (label, value) in rows {
        out.push_str(&row(label, value));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}

fn summary_rows<C>(report: &BootstrapReport<C>, unit: &str) -> Vec<(String, String)> {
    let s = &report.summary;
    vec![
        ("Lower bound (2.5%)".into(), format!("{:.1}{}", s.lower, unit)),
        ("Upper bound (97.5%)".into(), format!("{:.1}{}", s.upper, unit)),
        ("Bootstrap mean".into(), format!("{:.1}{}", s.mean, unit)),
        ("Outcomes".into(), report.describe()),
        ("Seed".into(), report.seed.to_string()),
        ("Elapsed".into(), format!("{:.2?}", report.elapsed)),
    ]
}

/// Renders an E/I report as a table.
pub fn unflatten_table(report: &BootstrapReport<Vec<FlatteningPoint>>) -> String {
    let mut rows: Vec<(String, String)> = Vec::new();
    match report.actual.curve.last() {
        Some(crossing) if !report.actual.degenerate => {
            rows.push(("Corrected inclination".into(), format!("{:.1}°", crossing.inclination)));
            rows.push(("Flattening factor".into(), format!("{:.2}", crossing.flattening)));
            rows.push(("Elongation".into(), format!("{:.3}", crossing.elongation)));
        }
        _ => rows.push(("Corrected inclination".into(), "no intersection".into())),
    }
    rows.extend(summary_rows(report, "°"));
    table("E/I bootstrap", &rows)
}

/// Renders a fold test report as a table.
pub fn unfold_table(report: &BootstrapReport<Vec<UnfoldingPoint>>) -> String {
    let mut rows = vec![(
        "Maximum τ1 at".to_string(),
        format!("{:.0}% unfolding", report.actual.value),
    )];
    rows.extend(summary_rows(report, "%"));
    table("Fold test bootstrap", &rows)
}

/// Prints a report in `format`, using `render` for the table form.
pub fn print_report<C, F>(report: &BootstrapReport<C>, format: OutputFormat, render: F) -> Result<()>
where
    C: Serialize,
    F: FnOnce(&BootstrapReport<C>) -> String,
{
    match format {
        OutputFormat::Table => print!("{}", render(report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
