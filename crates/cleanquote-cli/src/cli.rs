//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use cleanquote_app::config::EstimateSource;
use cleanquote_domain::model::{Frequency, PropertyType, Rotation, ServiceProfile};
use cleanquote_domain::service::ValidationPolicy;
use cleanquote_store::Theme;
use cleanquote_types::{EstimateInputs, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleanquote")]
#[command(version)]
#[command(about = "Cleaning job time and price estimation")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Property and service details
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Square footage
    #[arg(long, allow_negative_numbers = true)]
    pub sqft: f64,

    /// Single-family house (default: apartment/condo)
    #[arg(long)]
    pub house: bool,

    /// Service frequency
    #[arg(long, value_enum)]
    pub frequency: Option<Frequency>,

    /// Rotation category
    #[arg(long, value_enum)]
    pub rotation: Option<Rotation>,
}

impl ProfileArgs {
    pub fn to_inputs(&self) -> EstimateInputs {
        let property = if self.house {
            PropertyType::House
        } else {
            PropertyType::Apartment
        };

        ServiceProfile {
            sqft: self.sqft,
            property,
            frequency: self.frequency,
            rotation: self.rotation,
        }
        .to_inputs()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate time and price with the local formula
    Estimate {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Reject negative square footage and overlapping categories
        #[arg(long)]
        strict: bool,
    },

    /// Request a quote through the estimate form flow
    Quote {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Service address (required for remote quotes)
        #[arg(long)]
        address: Option<String>,

        /// Cleaning type sent to the pricing API
        #[arg(long, default_value = "standard")]
        cleaning_type: String,

        /// Pricing path. Uses config value if not specified.
        #[arg(long, value_enum)]
        source: Option<EstimateSource>,

        /// Backend API base URL override
        #[arg(long)]
        api_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Run the calculator over demo scenarios
    Demo {
        /// CSV file of scenarios (default: built-in fixtures)
        #[arg(long)]
        scenarios: Option<PathBuf>,
    },

    /// Compare local formula prices with the remote pricing API
    Compare {
        /// Backend API base URL override
        #[arg(long)]
        api_url: Option<String>,

        /// CSV file of scenarios (default: built-in fixtures)
        #[arg(long)]
        scenarios: Option<PathBuf>,

        /// Address sent with every remote request
        #[arg(long, default_value = "1 Sample St")]
        address: String,

        /// Allowed relative difference in percent
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default pricing path
        #[arg(long, value_enum)]
        set_source: Option<EstimateSource>,

        /// Set backend API base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Set request timeout in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        set_timeout: Option<u64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set input validation policy
        #[arg(long, value_enum)]
        set_validation: Option<ValidationPolicy>,

        /// Set contract tolerance in percent
        #[arg(long)]
        set_tolerance: Option<f64>,

        /// Set UI state directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,
    },

    /// Inspect or change persisted UI state
    Ui {
        #[command(subcommand)]
        action: UiAction,
    },
}

#[derive(Subcommand)]
pub enum UiAction {
    /// Show sidebar, theme and job timers
    Show,

    /// Set the theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },

    /// Set or toggle the sidebar collapsed flag
    Sidebar {
        /// Explicit value; toggles when omitted
        #[arg(long)]
        collapsed: Option<bool>,
    },

    /// Start or resume a job timer
    TimerStart { job_id: String },

    /// Stop a job timer
    TimerStop { job_id: String },

    /// Remove a job timer
    TimerClear { job_id: String },
}
