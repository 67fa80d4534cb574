use crate::core::aggregate::RecordFilter;
use crate::export::ExportFormat;
use crate::models::Level;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for mocboard
#[derive(Parser)]
#[command(
    name = "mocboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log MOC activity, classify staff levels and report promotion candidates",
    long_about = None
)]
pub struct Cli {
    /// Override dataset path (useful for tests or a custom file)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Operator username for the session login
    #[arg(global = true, long = "user", env = "MOCBOARD_USER")]
    pub user: Option<String>,

    /// Operator password for the session login
    #[arg(
        global = true,
        long = "password",
        env = "MOCBOARD_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record filters shared by the reporting commands.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep only these staff members (repeatable)
    #[arg(long = "staff", value_name = "NAME")]
    pub staff: Vec<String>,

    /// Keep only these levels: 3, 5 or 7 (repeatable)
    #[arg(long = "level", value_name = "LEVEL", value_parser = parse_level)]
    pub levels: Vec<Level>,

    /// Keep only these months, e.g. "March" (repeatable)
    #[arg(long = "month", value_name = "MONTH")]
    pub months: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RecordFilter {
        RecordFilter {
            staff: self.staff.clone(),
            levels: self.levels.clone(),
            months: self.months.clone(),
        }
    }
}

fn parse_level(s: &str) -> Result<Level, String> {
    Level::from_code(s).ok_or_else(|| format!("invalid level '{s}' (expected 3, 5 or 7)"))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and an empty dataset
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Add a MOC entry (level is assigned automatically)
    Add {
        /// Staff member name
        #[arg(long = "name", default_value = "")]
        name: String,

        /// MOC description
        #[arg(long = "desc", default_value = "")]
        desc: String,

        /// Hours spent (zero or more)
        #[arg(long = "hours", default_value_t = 1.0)]
        hours: f64,

        /// Number of MOC actions (at least 1)
        #[arg(
            long = "count",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        count: u32,
    },

    /// List recorded entries with headline totals
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show MOC count and hours per staff and level
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Draw hours-by-staff and MOC distribution charts
    Chart {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show staff eligible for promotion
    Promote {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "email", help = "Send the candidate list to the operator mailbox")]
        email: bool,
    },

    /// Export the summary report
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export only promotion candidates")]
        candidates: bool,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

impl Commands {
    /// Commands that read or change the dataset require the session login.
    pub fn requires_login(&self) -> bool {
        !matches!(self, Commands::Init | Commands::Config { .. })
    }
}
