//! Handler for the `plans` subcommand.

use log::{debug, warn};
use std::io::Write;

use crate::api::TempoClient;
use crate::config::Config;
use crate::day::PlanDay;
use crate::errors::*;
use crate::plans::PlanReport;

/// Fetches the plans of `day` and prints them as a table to `out`.
pub async fn plans<W: Write>(config: &Config, day: PlanDay, out: &mut W) -> Result<PlanReport> {
    config.validate()?;
    let date = day.resolve_local();
    debug!("Plans for {} ({})", day, date);

    let client = TempoClient::new(config)?;
    let collection = client
        .get_plans(&config.account_id, date)
        .await
        .wrap_err_with(|| format!("Failed to fetch plans for {}", date))?;

    let report = PlanReport::aggregate(&collection, date);
    if report.is_empty() {
        warn!("Nothing planned for {}", date.format("%A, %d/%m/%Y"));
    }
    report.render(out)?;
    Ok(report)
}
