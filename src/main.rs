mod cli;
mod core;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cli::output::{detect_color, OutputFormat, OutputOptions};
use crate::core::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "cmap",
    about = "Normalize cloud API responses and aggregate cost explorer results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text|json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Shorthand for --format json
    #[arg(short = 'j', long = "json", global = true)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a GetCostAndUsage response grouped by region and service
    Cost {
        /// JSON file, or - for stdin
        file: String,

        /// Cost metric to aggregate (default from config, else UnblendedCost)
        #[arg(short, long)]
        metric: Option<String>,

        /// Also show per-day totals
        #[arg(short, long)]
        daily: bool,
    },
    /// Map a DescribeTasks response to container instances
    Task {
        /// JSON file, or - for stdin
        file: String,
    },
    /// Map a DescribeClusters response to clusters
    Cluster {
        /// JSON file, or - for stdin
        file: String,
    },
    /// Map a DescribeVpcs response to VPCs
    Vpc {
        /// JSON file, or - for stdin
        file: String,
    },
    /// Map a DescribeSubnets response to subnets
    Subnet {
        /// JSON file, or - for stdin
        file: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Generate default config file
    Init,
    /// Validate config file
    Check,
    /// Print the effective configuration
    Show,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "cmap=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}; using defaults", e);
            AppConfig::default()
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        let name = cli
            .format
            .as_deref()
            .unwrap_or(config.settings.default_format.as_str());
        match OutputFormat::from_name(name) {
            Some(format) => format,
            None => anyhow::bail!("Unknown output format '{}' (must be text or json)", name),
        }
    };

    let output_opts = OutputOptions {
        format,
        pretty: cli.pretty,
        use_color: detect_color(&config.settings.color, cli.no_color),
    };

    match cli.command {
        Commands::Cost {
            file,
            metric,
            daily,
        } => {
            let metric = metric.unwrap_or_else(|| config.cost.metric.clone());
            cli::map_cmd::cost(
                &file,
                &metric,
                daily,
                config.cost.decimal_places,
                &output_opts,
            )?;
        }
        Commands::Task { file } => cli::map_cmd::tasks(&file, &output_opts)?,
        Commands::Cluster { file } => cli::map_cmd::clusters(&file, &output_opts)?,
        Commands::Vpc { file } => cli::map_cmd::vpcs(&file, &output_opts)?,
        Commands::Subnet { file } => cli::map_cmd::subnets(&file, &output_opts)?,
        Commands::Config { action } => match action {
            ConfigAction::Init => cli::config_cmd::init(&output_opts)?,
            ConfigAction::Check => cli::config_cmd::check(&output_opts)?,
            ConfigAction::Show => cli::config_cmd::show(&output_opts)?,
        },
    }

    Ok(())
}
