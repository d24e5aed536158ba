use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client as HttpClient, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::models::{PlanCollection, Worklog};
use crate::config::Config;
use crate::errors::TempoError;
use crate::worklog::WorklogSubmission;

type Result<T> = std::result::Result<T, TempoError>;

const USER_AGENT: &str = concat!("tempo-cli/", env!("CARGO_PKG_VERSION"));

/// Thin client for the two Tempo endpoints the commands need.
///
/// Every call is a single request, failures are returned as they are.
#[derive(Clone, Debug)]
pub struct TempoClient {
    http: HttpClient,
    base: Url,
}

impl TempoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| TempoError::Url(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(TempoError::Url(format!("{} cannot be a base url", base)));
        }

        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { http, base })
    }

    /// `{base}/plans/user/{account}?from={date}&to={date}`, account percent encoded.
    pub fn plans_url(&self, account_id: &str, date: NaiveDate) -> Result<Url> {
        let day = date.format("%Y-%m-%d").to_string();
        let mut url = self.url_for(&["plans", "user", account_id])?;
        url.query_pairs_mut()
            .append_pair("from", &day)
            .append_pair("to", &day);
        Ok(url)
    }

    pub async fn get_plans(&self, account_id: &str, date: NaiveDate) -> Result<PlanCollection> {
        let url = self.plans_url(account_id, date)?;
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        Self::parse_json(response).await
    }

    pub async fn create_worklog(&self, submission: &WorklogSubmission) -> Result<Worklog> {
        let url = self.url_for(&["worklogs"])?;
        log::debug!("POST {} for {}", url, submission.issue_key());
        let response = self.http.post(url).json(submission).send().await?;
        Self::parse_json(response).await
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| TempoError::Url(format!("{} cannot be a base url", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn parse_json<T>(response: Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;
        log::trace!("{} {}", status, body);
        if status.is_success() {
            serde_json::from_str(&body).map_err(TempoError::from)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(TempoError::Authentication(format!(
                "access denied ({}) {}",
                status,
                error_message(&body)
            )))
        } else {
            Err(TempoError::Http {
                status,
                message: error_message(&body),
            })
        }
    }
}

/// Pulls the messages out of a Tempo error body, `{"errors":[{"message":..}]}`.
fn error_message(body: &str) -> String {
    let parsed: Option<Vec<String>> = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("errors")?.as_array().map(|errors| {
                errors
                    .iter()
                    .filter_map(|e| e.get("message")?.as_str().map(str::to_string))
                    .collect()
            })
        });
    match parsed {
        Some(messages) if !messages.is_empty() => itertools::join(messages, "; "),
        _ => body.trim().to_string(),
    }
}
