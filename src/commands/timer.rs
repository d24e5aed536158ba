//! Handler for the `timer` subcommand.

use log::{debug, info, warn};
use std::io::Write;
use std::time::Duration;

use crate::api::{TempoClient, Worklog};
use crate::cli_input::{prompt_non_empty, Prompt};
use crate::config::Config;
use crate::errors::*;
use crate::signal::{listen_for_interrupts, stop_channel};
use crate::spinner::Spinner;
use crate::timer::{Session, Timer};
use crate::worklog::WorklogSubmission;

/// Runs a timer until interrupted (or `limit` passed) and logs the session.
pub async fn timer<P: Prompt>(
    config: &Config,
    limit: Option<Duration>,
    prompt: &mut P,
) -> Result<Worklog> {
    config.validate()?;
    let client = TempoClient::new(config)?;

    let (handle, token) = stop_channel();
    let listener = match listen_for_interrupts(handle) {
        Ok(listener) => Some(listener),
        Err(e) => {
            warn!("Cannot listen for interrupts, only --limit stops the timer: {}", e);
            None
        }
    };
    match limit {
        Some(l) => info!(
            "Timer started, stops after {} or on Ctrl-C",
            humantime::format_duration(l)
        ),
        None => info!("Timer started, press Ctrl-C to stop"),
    }

    let mut spinner = Spinner::new(std::io::stdout());
    let session = Timer::start().run(token, limit, &mut spinner).await;

    let mut stdout = std::io::stdout();
    let worklog = log_session(&client, config, session, prompt, &mut stdout).await;
    if let Some(listener) = listener {
        listener.abort();
    }
    worklog
}

/// Asks for issue key and description and submits the rounded session.
pub async fn log_session<P: Prompt + ?Sized, W: Write>(
    client: &TempoClient,
    config: &Config,
    session: Session,
    prompt: &mut P,
    out: &mut W,
) -> Result<Worklog> {
    let billed = session.billed();
    debug!(
        "Elapsed {}s, billing {}s",
        session.elapsed.num_seconds(),
        billed.seconds()
    );
    writeln!(out)?;
    writeln!(out, "Logging {}", billed)?;
    writeln!(out)?;

    let issue_key = prompt_non_empty(prompt, "Enter the issue key")?;
    let description = prompt.prompt("Worklog description")?;

    let submission = WorklogSubmission::new(
        issue_key,
        description,
        session.started_at,
        billed,
        config.account_id.clone(),
    );
    let worklog = client
        .create_worklog(&submission)
        .await
        .wrap_err_with(|| format!("Failed to log {} on {}", billed, submission.issue_key()))?;

    match (&worklog.tempo_worklog_id, &worklog.issue) {
        (Some(id), Some(issue)) => {
            writeln!(out, "Time log submitted! Worklog {} on {}", id, issue.key)?
        }
        _ => writeln!(out, "Time log submitted!")?,
    }
    Ok(worklog)
}
