use clap::{Parser, Subcommand};

/// Command-line interface definition for rCoffeeLog
/// CLI application to log coffees and remind you of the next one
#[derive(Parser)]
#[command(
    name = "rcoffeelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small coffee tracker: log what you drink and see when the next coffee is due",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the available coffee types
    Types,

    /// Log a coffee you just had
    Drink {
        /// Coffee type id or title (see `types`)
        coffee_type: Option<String>,
    },

    /// Show greeting, next reminder, last coffee and today's count
    Status,

    /// List logged coffees, most recent first
    History {
        #[arg(long = "today", help = "Show only today's coffees")]
        today: bool,

        #[arg(long = "limit", short = 'n', help = "Show at most N entries")]
        limit: Option<usize>,
    },

    /// View or change profile name and reminder interval
    Settings {
        #[arg(long = "name", help = "Display name used in the greeting")]
        name: Option<String>,

        #[arg(
            long = "reminder-hours",
            value_name = "HOURS",
            allow_negative_numbers = true,
            help = "Hours between coffees (e.g. 4 or 2.5)"
        )]
        reminder_hours: Option<String>,

        #[arg(long = "print", help = "Print the current settings")]
        print: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
