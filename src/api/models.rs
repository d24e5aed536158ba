use chrono::NaiveDate;
use serde::Deserialize;

/// Body of `GET /plans/user/{accountId}`.
///
/// `results`, `description` and `dates` are required, a body without them is
/// not a plan list and must not render as an empty one.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PlanCollection {
    pub results: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PlanEntry {
    pub description: String,
    pub dates: PlanDates,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PlanDates {
    #[serde(default)]
    pub values: Vec<PlanValue>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanValue {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub time_planned_seconds: f64,
}

/// Confirmation returned by `POST /worklogs`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    #[serde(default)]
    pub tempo_worklog_id: Option<u64>,
    #[serde(default)]
    pub issue: Option<IssueRef>,
    pub time_spent_seconds: i64,
    #[serde(default)]
    pub billable_seconds: Option<i64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct IssueRef {
    pub key: String,
}
