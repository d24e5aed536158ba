//! Tune configuration via command line.
//!
//! Handler for the `configure` subcommand.

use log::info;
use std::path::Path;

use crate::cli_input::{Prompt, YesNo};
use crate::config::Config;
use crate::errors::*;

/// Asks for token and account id, blank answers keep the current value.
pub fn configure<P: AsRef<Path>, Q: Prompt + ?Sized>(path: P, prompt: &mut Q) -> Result<Config> {
    let current = match Config::from_file(&path) {
        Ok(cfg) => {
            println!("Current configuration:");
            println!("    {}", cfg);
            Some(cfg)
        }
        Err(e) if e.downcast_ref::<UsageError>().is_some() => {
            println!("Nothing configured yet.");
            None
        }
        Err(e) => return Err(e),
    };
    let base = current.clone().unwrap_or_default();

    println!();
    println!("Enter your desired value, leave blank for keeping the current value.");

    let token = prompt.prompt("    Tempo api token")?;
    let account_id = prompt.prompt(&format!("    Atlassian account id ({})", base.account_id))?;
    let cfg = Config {
        token: keep_if_blank(token, &base.token),
        account_id: keep_if_blank(account_id, &base.account_id),
        ..base
    };
    cfg.validate()?;

    if current.as_ref() == Some(&cfg) {
        info!("Nothing changed.");
        return Ok(cfg);
    }
    if current.is_some() && YesNo::wait_for_decision(prompt, "Overwrite configuration?")? == YesNo::No
    {
        info!("Kept the current configuration.");
        return Ok(current.unwrap_or(cfg));
    }

    cfg.to_file(&path)?;
    info!("Configuration written to {:?}", path.as_ref());
    Ok(cfg)
}

fn keep_if_blank(answer: String, current: &str) -> String {
    if answer.is_empty() {
        current.to_string()
    } else {
        answer
    }
}
