use clap::{Parser, Subcommand};

/// Command-line interface definition for praxishours
/// CLI application to manage a practice's weekly opening hours
#[derive(Parser)]
#[command(
    name = "praxishours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple opening-hours CLI: manage a practice's weekly schedule and show its live status",
    long_about = None
)]
pub struct Cli {
    /// Override schedule file path (useful for tests or alternate practices)
    #[arg(global = true, long = "schedule")]
    pub schedule: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the default schedule
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show whether the practice is open right now
    Status {
        /// Evaluate the status on a specific date (YYYY-MM-DD)
        #[arg(long = "date", help = "Date to evaluate (YYYY-MM-DD, default today)")]
        date: Option<String>,

        /// Evaluate the status at a specific time (HH:MM)
        #[arg(long = "at", help = "Time to evaluate (HH:MM, default now)")]
        at: Option<String>,

        #[arg(long = "json", help = "Print the status as JSON")]
        json: bool,
    },

    /// Show the whole week's opening hours
    Week {
        #[arg(long = "date", help = "Highlight the day of this date instead of today")]
        date: Option<String>,
    },

    /// Print a one-line summary of the weekly hours
    Summary,

    /// Show the next day the practice opens
    Next {
        #[arg(long = "date", help = "Scan from this date instead of today")]
        date: Option<String>,
    },

    /// Show the opening hours of a single day
    Day {
        /// Day name (monday..sunday, 3-letter forms accepted)
        day: String,
    },

    /// Set the opening hours of a single day
    Set {
        /// Day name (monday..sunday, 3-letter forms accepted)
        day: String,

        #[arg(long = "open", help = "Opening time (HH:MM)")]
        open: Option<String>,

        #[arg(long = "close", help = "Closing time (HH:MM)")]
        close: Option<String>,

        #[arg(
            long = "closed",
            conflicts_with_all = ["open", "close"],
            help = "Mark the day as closed"
        )]
        closed: bool,
    },

    /// Validate the schedule file and report per-day problems
    Check,
}
