use clap::Parser;
use compfinder::application::filter::{CountRange, FilterCriteria};
use compfinder::application::tiers::TierClassifier;
use compfinder::cli::commands::{Cli, Commands, DesignationArgs};
use compfinder::config::EngineConfig;
use compfinder::domain::entities::cluster::ClusterSummary;
use compfinder::domain::error::DomainError;
use compfinder::domain::values::investment::InvestmentInputs;
use compfinder::infrastructure::sources::json_file::JsonFileSource;
use compfinder::CompFinder;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("compfinder=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path),
        None => EngineConfig::from_env(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(config, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(config: EngineConfig, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Filter {
            catalog,
            bedrooms,
            bathrooms,
            min_reviews,
            min_days_tracked,
            platform,
            property_type,
        } => {
            let cf = open(config, &catalog)?;
            let criteria = FilterCriteria {
                bedrooms: bedrooms.as_deref().map(parse_range).transpose()?,
                bathrooms: bathrooms.as_deref().map(parse_range).transpose()?,
                min_reviews,
                min_days_tracked,
                platform: platform.parse().map_err(|e: String| e)?,
                property_type: property_type.parse().map_err(|e: String| e)?,
            };
            let kept = cf.filter(&criteria)?;
            println!("{}", serde_json::to_string_pretty(&kept)?);
        }
        Commands::Analyze {
            catalog,
            designations,
            purchase_price,
            acquisition_costs,
            renovation_cost,
            operating_expenses,
        } => {
            let cf = open(config, &catalog)?;
            apply_designations(&cf, &designations)?;
            let result = cf.analyze(&InvestmentInputs {
                purchase_price,
                acquisition_costs,
                renovation_cost,
                annual_operating_expenses: operating_expenses,
            })?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Compare {
            catalog,
            designations,
        } => {
            let cf = open(config, &catalog)?;
            apply_designations(&cf, &designations)?;
            println!("{}", serde_json::to_string_pretty(&cf.comparison()?)?);
        }
        Commands::Tier { adr } => {
            let tier = TierClassifier::new(config.tiers).classify(adr);
            println!("{tier} ({})", tier.color());
        }
        Commands::Summary { catalog } => {
            let cf = open(config, &catalog)?;
            println!("{}", serde_json::to_string_pretty(&cf.market_summary()?)?);
        }
        Commands::Clusters { file } => {
            let json = std::fs::read_to_string(&file)?;
            let clusters: Vec<ClusterSummary> = serde_json::from_str(&json)?;
            let ranked = TierClassifier::new(config.tiers).rank_clusters(&clusters);
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        }
    }
    Ok(())
}

fn open(config: EngineConfig, catalog: &Path) -> Result<CompFinder, DomainError> {
    CompFinder::from_source(config, &JsonFileSource::new(catalog))
}

fn apply_designations(cf: &CompFinder, args: &DesignationArgs) -> Result<(), DomainError> {
    for &id in &args.pins {
        let already_pinned = cf.property(id)?.is_some_and(|p| p.is_pinned());
        if !already_pinned {
            cf.toggle_pin(id)?;
        }
    }
    if let Some(id) = args.base {
        cf.set_base(id)?;
    }
    if let Some(id) = args.target {
        cf.set_target(id)?;
    }
    Ok(())
}

fn parse_range(s: &str) -> Result<CountRange, String> {
    let (min, max) = s
        .split_once('-')
        .ok_or_else(|| format!("Invalid range: {s}. Use MIN-MAX, e.g. 1-5"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid range bound '{v}' in {s}"))
    };
    Ok(CountRange::new(parse(min)?, parse(max)?))
}
