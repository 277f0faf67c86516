use crate::export::ExportFormat;
use crate::models::product::parse_non_negative;
use clap::{Parser, Subcommand};

/// Command-line interface definition for IndusTrack
#[derive(Parser)]
#[command(
    name = "industrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track hourly production per product line and forecast pace against the planned schedule",
    long_about = None
)]
pub struct Cli {
    /// Override the scenario file (useful for tests or parallel runs)
    #[arg(global = true, long = "scenario")]
    pub scenario: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_amount(s: &str) -> Result<f64, String> {
    parse_non_negative(s).ok_or_else(|| format!("'{s}' is not a non-negative number"))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Start a new run: schedule and product lines (clears the production log)
    Setup {
        #[arg(long = "days-a", help = "Scheduled days of shift 1")]
        days_a: u32,

        #[arg(long = "hours-a", help = "Hours per day of shift 1")]
        hours_a: u32,

        #[arg(long = "days-b", default_value_t = 0, help = "Scheduled days of shift 2")]
        days_b: u32,

        #[arg(long = "hours-b", default_value_t = 0, help = "Hours per day of shift 2")]
        hours_b: u32,

        #[arg(
            long = "product",
            short = 'p',
            value_name = "NAME:TARGET",
            help = "Product line and its planned units per hour (repeatable)"
        )]
        products: Vec<String>,

        #[arg(long, short = 'f', help = "Replace an existing scenario")]
        force: bool,
    },

    /// Log (or overwrite) the output of one hour
    Record {
        /// Day (1-based)
        day: u32,

        /// Shift (1 or 2)
        shift: String,

        /// Hour of the shift (1-based)
        hour: u32,

        /// Quantities as PRODUCT=QTY (product id or name)
        #[arg(value_name = "PRODUCT=QTY")]
        entries: Vec<String>,
    },

    /// Move the data-entry cursor (slot as D<day>-T<shift>-H<hour>)
    Select { slot: String },

    /// Adjust one product line
    Product {
        /// Product id or name
        product: String,

        #[arg(long, value_parser = parse_amount, help = "Planned units per hour")]
        target: Option<f64>,

        #[arg(
            long,
            value_parser = parse_amount,
            conflicts_with = "clear_demand",
            help = "Manual total demand (overrides hours x target)"
        )]
        demand: Option<f64>,

        #[arg(long = "clear-demand", help = "Go back to the schedule-derived demand")]
        clear_demand: bool,

        #[arg(
            long,
            value_parser = parse_amount,
            conflicts_with = "clear_extra",
            help = "Output credited outside the hourly log"
        )]
        extra: Option<f64>,

        #[arg(long = "clear-extra", help = "Remove extra production")]
        clear_extra: bool,
    },

    /// Change schedule dimensions
    Schedule {
        #[arg(long = "days-a")]
        days_a: Option<u32>,

        #[arg(long = "hours-a")]
        hours_a: Option<u32>,

        #[arg(long = "days-b")]
        days_b: Option<u32>,

        #[arg(long = "hours-b")]
        hours_b: Option<u32>,
    },

    /// Show per-product status, plant summary and alerts
    Status {
        #[arg(long, help = "Print the forecast as JSON")]
        json: bool,
    },

    /// Show the running pace trend
    Trend {
        #[arg(long, help = "Only this product (id or name)")]
        product: Option<String>,

        #[arg(long, help = "Print chart rows as JSON")]
        json: bool,
    },

    /// Show hour-by-hour efficiency and idle hours
    History,

    /// Copy the whole scenario to a file, or replace it from one
    Scenario {
        #[arg(long, value_name = "FILE", conflicts_with = "import")]
        export: Option<String>,

        #[arg(long, value_name = "FILE")]
        import: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 't', help = "Export the trend series instead of the metrics")]
        trend: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the journal of state changes
    Log {
        #[arg(long = "print", help = "Print the journal")]
        print: bool,
    },
}
