use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "compfinder", about = "Short-term-rental comparable finder and ROI analysis")]
pub struct Cli {
    /// JSON config file (overrides COMPFINDER_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Designations applied to the loaded catalog before running a command.
#[derive(Args, Debug, Default)]
pub struct DesignationArgs {
    /// Property IDs to pin (repeatable)
    #[arg(long = "pin")]
    pub pins: Vec<u64>,
    /// Base (floor) comparable
    #[arg(long)]
    pub base: Option<u64>,
    /// Target (ceiling) comparable
    #[arg(long)]
    pub target: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a catalog down to reliable comparables
    Filter {
        /// JSON array of listing records
        catalog: PathBuf,
        /// Bedroom range, e.g. 1-5
        #[arg(long)]
        bedrooms: Option<String>,
        /// Bathroom range, e.g. 1-3
        #[arg(long)]
        bathrooms: Option<String>,
        /// Minimum review count (default from config)
        #[arg(long)]
        min_reviews: Option<u32>,
        /// Minimum days of tracked history (default from config)
        #[arg(long)]
        min_days_tracked: Option<u32>,
        /// all, airbnb, vrbo, both, airbnb+vrbo, within:<set>
        #[arg(long, default_value = "all")]
        platform: String,
        /// all, apartment, house, loft, villa, studio, other
        #[arg(long, default_value = "all")]
        property_type: String,
    },
    /// Project revenue scenarios and ROI from the designated comparables
    Analyze {
        catalog: PathBuf,
        #[command(flatten)]
        designations: DesignationArgs,
        #[arg(long)]
        purchase_price: f64,
        #[arg(long, default_value = "0")]
        acquisition_costs: f64,
        /// Renovation and furnishing
        #[arg(long, default_value = "0")]
        renovation_cost: f64,
        #[arg(long, default_value = "0")]
        operating_expenses: f64,
    },
    /// Show the pinned comparables table
    Compare {
        catalog: PathBuf,
        #[command(flatten)]
        designations: DesignationArgs,
    },
    /// Classify an average daily rate into a market tier
    Tier { adr: f64 },
    /// Market overview for a catalog
    Summary { catalog: PathBuf },
    /// Rank cluster summaries by tier
    Clusters {
        /// JSON array of cluster summaries
        file: PathBuf,
    },
}
