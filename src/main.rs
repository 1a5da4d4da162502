//! Region Graph - command line front end
//!
//! Loads a region file, builds its border graph and prints the metrics report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use region_graph::graph::{GraphMetricsEngine, MetricsEngine, RegionGraph};
use region_graph::region::load_region_graph;
use region_graph::{Config, OutputFormat};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "region-graph")]
#[command(about = "Structural metrics for country-border graphs")]
struct Cli {
    /// Path to a YAML config file (default: ./region-graph.yaml)
    #[arg(short, long, global = true, env = "REGION_GRAPH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the metrics report for a region file
    Analyze {
        /// Region JSON file
        region_file: PathBuf,

        /// Report format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also list the members of every component (text format)
        #[arg(long)]
        components: bool,
    },

    /// List the borders of a region file with capital-to-capital distances
    Borders {
        /// Region JSON file
        region_file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, stdout is reserved for the report)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,region_graph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_yaml_and_env(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            region_file,
            format,
            components,
        } => run_analyze(
            &config,
            &region_file,
            format.unwrap_or(config.output_format),
            components,
        ),
        Commands::Borders { region_file } => run_borders(&region_file),
    }
}

fn load_graph(path: &Path) -> Result<RegionGraph> {
    load_region_graph(path)
        .with_context(|| format!("failed to load region graph from {}", path.display()))
}

fn run_analyze(config: &Config, path: &Path, format: OutputFormat, components: bool) -> Result<()> {
    tracing::info!("Analyzing region: {}", path.display());

    let graph = load_graph(path)?;
    let engine = GraphMetricsEngine::new(config.analysis.clone());
    let report = engine.analyze(&graph);

    match format {
        OutputFormat::Text => {
            print!("{}", report);
            if components {
                println!();
                print!("{}", report.components_listing());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn run_borders(path: &Path) -> Result<()> {
    let graph = load_graph(path)?;

    for (a, b) in graph.edges() {
        let distance = graph
            .border(a, b)
            .and_then(|border| border.distance_km)
            .map_or_else(|| "?".to_string(), |km| format!("{:.0} km", km));
        println!("{} - {}: {}", graph.label(a), graph.label(b), distance);
    }

    tracing::info!(
        "{} countries, {} borders",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}
