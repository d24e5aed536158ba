//! Which day to query plans for.

use chrono::{Local, NaiveDate};
use std::fmt;

/// Day relative to the current local date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PlanDay {
    Yesterday,
    #[default]
    Today,
    Tomorrow,
}

impl PlanDay {
    /// Date this day refers to, seen from `reference`.
    pub fn resolve(&self, reference: NaiveDate) -> NaiveDate {
        let resolved = match self {
            PlanDay::Yesterday => reference.pred_opt(),
            PlanDay::Today => Some(reference),
            PlanDay::Tomorrow => reference.succ_opt(),
        };
        // Only fails at the ends of chrono's calendar.
        resolved.unwrap_or(reference)
    }

    pub fn resolve_local(&self) -> NaiveDate {
        self.resolve(Local::now().date_naive())
    }
}

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanDay::Yesterday => write!(f, "yesterday"),
            PlanDay::Today => write!(f, "today"),
            PlanDay::Tomorrow => write!(f, "tomorrow"),
        }
    }
}
