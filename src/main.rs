use env_logger::Env;
use log::debug;

use tempo::cli_input::StdinPrompt;
use tempo::commands;
use tempo::config::Config;
use tempo::errors::UsageError;

mod clap_cli;
use clap_cli::{Cli, Commands, Parser};

async fn run() -> color_eyre::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Commands::Plans { day } => {
            let day = day.unwrap_or_default();
            debug!("Plans for {}, config {:?}", day, config_path);
            let config = Config::from_file(&config_path)?;
            commands::plans::plans(&config, day, &mut std::io::stdout()).await?;
        }
        Commands::Timer { limit } => {
            debug!("Timer with limit {:?}, config {:?}", limit, config_path);
            let config = Config::from_file(&config_path)?;
            commands::timer::timer(&config, limit, &mut StdinPrompt).await?;
        }
        Commands::Configure => {
            debug!("Configure, stored in {:?}", config_path);
            commands::config::configure(&config_path, &mut StdinPrompt)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    if let Err(e) = run().await {
        if let Some(inner) = e.downcast_ref::<UsageError>() {
            log::error!("{}", inner);
            std::process::exit(1);
        } else {
            Err(e)
        }
    } else {
        Ok(())
    }
}
