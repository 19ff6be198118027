use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use arules::{association_rules, dataset, report, MiningConfig, TransactionIndex, DEFAULT_MIN_LIFT};

#[derive(Parser)]
#[command(name = "arules")]
#[command(about = "Mine frequent itemsets and association rules from a binary dataset")]
#[command(version)]
struct Cli {
    /// Headerless CSV of 0/1 cells, one row per transaction
    #[arg(long, alias = "DB_PATH", default_value = "database-07.csv")]
    db_path: PathBuf,
    /// Comma-separated attribute names, one per dataset column
    #[arg(long, alias = "ATT_PATH", default_value = "attr-07.csv")]
    att_path: PathBuf,
    /// TOML file with min_support / min_confidence / min_lift
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Minimum support (fraction of transactions)
    #[arg(long, alias = "SUPP")]
    supp: Option<f64>,
    /// Minimum confidence
    #[arg(long, alias = "CONF")]
    conf: Option<f64>,
    /// Minimum lift (1.0 when neither this nor a config file sets it)
    #[arg(long, alias = "LIFT", conflicts_with = "no_lift")]
    lift: Option<f64>,
    /// Do not filter rules by lift
    #[arg(long)]
    no_lift: bool,
    /// Output format for rules
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Also print the frequent itemsets
    #[arg(long)]
    itemsets: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let attributes = dataset::read_attributes(&cli.att_path)
        .with_context(|| format!("failed to load attributes from {}", cli.att_path.display()))?;
    info!("Total attributes: {}", attributes.len());

    let matrix = dataset::read_dataset(&cli.db_path, attributes.len())
        .with_context(|| format!("failed to load dataset from {}", cli.db_path.display()))?;
    info!("Total rows: {}", matrix.nrows());

    let index = TransactionIndex::from_matrix(matrix.view(), &attributes)
        .with_context(|| format!("failed to index {}", cli.db_path.display()))?;
    info!("Total transactions: {}", index.transaction_count());
    info!("Total items in transactions: {}", index.items().len());

    let result = association_rules(&index, &config)?;

    if cli.itemsets {
        print!("{}", report::format_itemsets(&result.itemsets, &index));
    }
    match cli.format {
        Format::Text => print!("{}", report::format_text(&result.rules, &index)),
        Format::Json => println!("{}", report::format_json(&result.rules, &index)?),
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<MiningConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => load_config_file(path)?,
        // a config file that leaves out min_lift runs without the lift filter
        None => MiningConfig::default().with_lift(DEFAULT_MIN_LIFT),
    };

    if let Some(supp) = cli.supp {
        config.min_support = supp;
    }
    if let Some(conf) = cli.conf {
        config.min_confidence = conf;
    }
    if let Some(lift) = cli.lift {
        config.min_lift = Some(lift);
    }
    if cli.no_lift {
        config = config.without_lift();
    }

    config.validate()?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<MiningConfig> {
    MiningConfig::load(path).with_context(|| format!("failed to load config {}", path.display()))
}
