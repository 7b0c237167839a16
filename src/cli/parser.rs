use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for prodtracker
/// Production counts per line and shift, stored in SQLite
#[derive(Parser)]
#[command(
    name = "prodtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record production counts per shift, list them and export shift reports",
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

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a production entry
    Add {
        /// Good pieces produced (must be >= 0)
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Production date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Time of the entry (HH:MM or HH:MM:SS, default: now)
        #[arg(long)]
        time: Option<String>,

        /// Shift code (A or B). Derived from the time when omitted
        #[arg(long)]
        shift: Option<String>,

        #[arg(long)]
        line: Option<String>,

        #[arg(long)]
        product: Option<String>,

        #[arg(long)]
        operator: Option<String>,

        /// Defective pieces (must be >= 0)
        #[arg(long, allow_negative_numbers = true)]
        defects: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List stored records, optionally filtered by date and/or shift
    List {
        /// Only records of this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Only records of this shift (A or B)
        #[arg(long)]
        shift: Option<String>,

        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the report of one date and shift
    Export {
        /// Report date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Report shift (A or B)
        #[arg(long)]
        shift: String,

        /// Output file (absolute path)
        #[arg(long)]
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        /// Overwrite the output file without asking
        #[arg(long)]
        force: bool,
    },

    /// Inspect the database
    Db {
        #[arg(long = "info", help = "Show database statistics")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Show the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Bind address (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}
