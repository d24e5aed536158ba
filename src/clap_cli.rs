use std::path::PathBuf;
use std::time::Duration;

pub use clap::Parser;
use clap::Subcommand;
use tempo::day::PlanDay;

#[derive(Debug, Parser)]
#[command(name = "tempo", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Retrieve your work plans for the day.
    Plans {
        /// Day to show, defaults to today.
        #[arg(value_enum)]
        day: Option<PlanDay>,
    },
    /// Create a worklog timer, stop it with Ctrl-C.
    Timer {
        /// Stop the timer by itself after this long, e.g. `25m` or `1h30m`.
        #[arg(short, long, value_parser = humantime::parse_duration)]
        limit: Option<Duration>,
    },
    /// Set the api token and account id.
    Configure,
    /// Print shell completions.
    Completions {
        #[clap(long)]
        /// Provide the `shell` for which to generate the completion script.
        shell: clap_complete::Shell,
    },
}
