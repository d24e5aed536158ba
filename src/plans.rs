//! Planned hours for a day, summed and printed as a table.

use chrono::NaiveDate;
use colored::*;
use std::io::Write;

use crate::api::PlanCollection;

const DESCRIPTION_WIDTH: usize = 50;
const DESCRIPTION_HEADER: &str = "Description";
const HOURS_HEADER: &str = "Hours";

#[derive(Debug, Clone, PartialEq)]
pub struct PlanRow {
    pub description: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanReport {
    pub date: NaiveDate,
    pub rows: Vec<PlanRow>,
    pub total: f64,
}

impl PlanReport {
    /// One row per plan with the hours planned on `date`.
    ///
    /// Values without a date belong to the queried range and are counted.
    pub fn aggregate(plans: &PlanCollection, date: NaiveDate) -> Self {
        let rows: Vec<PlanRow> = plans
            .results
            .iter()
            .map(|plan| {
                let seconds: f64 = plan
                    .dates
                    .values
                    .iter()
                    .filter(|v| v.date.map_or(true, |d| d == date))
                    .map(|v| v.time_planned_seconds)
                    .sum();
                PlanRow {
                    description: plan.description.clone(),
                    hours: seconds / 3600.0,
                }
            })
            .collect();
        let total = rows.iter().map(|r| r.hours).sum();
        Self { date, rows, total }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Draws a bordered table, the total goes into the footer.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let desc_width = self
            .rows
            .iter()
            .map(|r| r.description.chars().count())
            .max()
            .unwrap_or(0)
            .max(DESCRIPTION_WIDTH);
        let hours: Vec<String> = self.rows.iter().map(|r| format_hours(r.hours)).collect();
        let total = format_hours(self.total);
        let hours_width = hours
            .iter()
            .chain(std::iter::once(&total))
            .map(|h| h.len())
            .max()
            .unwrap_or(0)
            .max(HOURS_HEADER.len());

        let separator = format!(
            "+{}+{}+",
            "-".repeat(desc_width + 2),
            "-".repeat(hours_width + 2)
        );

        writeln!(out, "{}", separator)?;
        writeln!(
            out,
            "| {} | {} |",
            pad(DESCRIPTION_HEADER, desc_width).bold(),
            pad(HOURS_HEADER, hours_width).bold()
        )?;
        writeln!(out, "{}", separator)?;
        for (row, h) in self.rows.iter().zip(&hours) {
            writeln!(
                out,
                "| {} | {:>width$} |",
                pad(&row.description, desc_width),
                h,
                width = hours_width
            )?;
        }
        writeln!(out, "{}", separator)?;
        writeln!(
            out,
            "| {} | {:>width$} |",
            pad("", desc_width),
            total.bold(),
            width = hours_width
        )?;
        Ok(())
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

/// Shortest form: `1`, `0.5`, `2.25`.
fn format_hours(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{}", rounded)
}
