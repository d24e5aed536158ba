//! Tempo REST api, the plans and worklogs endpoints.

mod client;
pub mod models;

pub use client::TempoClient;
pub use models::{PlanCollection, PlanDates, PlanEntry, PlanValue, Worklog};
