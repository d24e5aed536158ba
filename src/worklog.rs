//! Payload for logging a timer session.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::quarter::QuarterHours;

/// Body of `POST /worklogs`.
///
/// Billable time always equals the time spent, both are whole quarter hours.
/// Fields are private so the durations can only come from [`QuarterHours`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogSubmission {
    issue_key: String,
    time_spent_seconds: i64,
    billable_seconds: i64,
    start_date: NaiveDate,
    #[serde(serialize_with = "hms")]
    start_time: NaiveTime,
    description: String,
    author_account_id: String,
}

impl WorklogSubmission {
    pub fn new(
        issue_key: impl Into<String>,
        description: impl Into<String>,
        started_at: DateTime<Local>,
        billed: QuarterHours,
        author_account_id: impl Into<String>,
    ) -> Self {
        let start = started_at.naive_local();
        let start_time = start.time().with_nanosecond(0).unwrap_or(start.time());
        Self {
            issue_key: issue_key.into(),
            time_spent_seconds: billed.seconds(),
            billable_seconds: billed.seconds(),
            start_date: start.date(),
            start_time,
            description: description.into(),
            author_account_id: author_account_id.into(),
        }
    }

    pub fn issue_key(&self) -> &str {
        &self.issue_key
    }

    pub fn time_spent_seconds(&self) -> i64 {
        self.time_spent_seconds
    }
}

fn hms<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format("%H:%M:%S"))
}
