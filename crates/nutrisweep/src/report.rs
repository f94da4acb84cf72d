//! Text and JSON rendering of a scenario report

use std::fmt::{self, Write};

use nutrisweep_core::analysis::SweepTable;
use nutrisweep_core::model::Label;

use crate::run::Report;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

const CELL_WIDTH: usize = 14;
const REQUIREMENT_NOTE: &str = "0 marks the household requirement";

/// Render the report in the requested format
pub fn render(report: &Report, format: Format) -> color_eyre::Result<String> {
    match format {
        Format::Text => Ok(render_text(report)?),
        Format::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Three stacked panels, matching the demand and adequacy charts
pub fn render_text(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if let Some(name) = &report.scenario {
        writeln!(out, "Scenario: {name}")?;
    }
    writeln!(
        out,
        "Household of {} over {} days\n",
        report.household_size, report.days
    )?;

    render_table(
        &mut out,
        &format!("Demand curves ({})", report.mode.name()),
        "Quantity demanded",
        None,
        &report.demand,
    )?;
    render_table(
        &mut out,
        "Nutrient adequacy vs price",
        "log nutrient adequacy ratio",
        Some(REQUIREMENT_NOTE),
        &report.adequacy_by_price,
    )?;
    render_table(
        &mut out,
        "Nutrient adequacy vs budget",
        "log nutrient adequacy ratio",
        Some(REQUIREMENT_NOTE),
        &report.adequacy_by_budget,
    )?;
    Ok(out)
}

fn render_table<K: Label>(
    out: &mut String,
    title: &str,
    y_label: &str,
    note: Option<&str>,
    table: &SweepTable<K>,
) -> fmt::Result {
    let x_label = table.dimension.label();

    writeln!(out, "== {title} ==")?;
    writeln!(out, "x: {x_label}    y: {y_label}")?;
    if let Some(note) = note {
        writeln!(out, "({note})")?;
    }

    write!(out, "{x_label:>CELL_WIDTH$}")?;
    for column in table.columns() {
        write!(out, "{:>CELL_WIDTH$}", column.to_string())?;
    }
    writeln!(out)?;

    for (point, row) in table.points().iter().zip(table.rows()) {
        write!(out, "{point:>CELL_WIDTH$.4}")?;
        for value in row {
            write!(out, "{value:>CELL_WIDTH$.4}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}
