use anyhow::{Context, Result};
use bedmap::{
    AppConfig, Dataset, GridSpec, MapExporter, cluster_map, cluster_state, logging,
    utilization_map,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

/// Hospital bed utilization maps with self-organizing map clustering
#[derive(Parser)]
#[command(name = "bedmap", version, about)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by BEDMAP_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the states present in a hospital CSV
    States {
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Cluster one state's hospitals and print cluster populations
    Cluster(RunArgs),
    /// Cluster one state and write its maps, table and manifest
    Render {
        #[command(flatten)]
        run: RunArgs,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Hospital CSV
    #[arg(long)]
    data: Option<PathBuf>,

    /// Full state name, e.g. "Illinois"
    #[arg(long)]
    state: Option<String>,

    /// Map grid as ROWSxCOLS, or "auto"
    #[arg(long)]
    grid: Option<GridSpec>,

    #[arg(long)]
    epochs: Option<usize>,

    /// Seed for map weights and random colors
    #[arg(long)]
    seed: Option<u64>,
}

impl RunArgs {
    /// Layer the flags over the config file
    fn apply(&self, config: &mut AppConfig) {
        if let Some(data) = &self.data {
            config.data.path = Some(data.clone());
        }
        if let Some(state) = &self.state {
            config.data.state = Some(state.clone());
        }
        if let Some(grid) = self.grid {
            config.cluster.grid = grid;
        }
        if let Some(epochs) = self.epochs {
            config.cluster.epochs = epochs;
        }
        if let Some(seed) = self.seed {
            config.cluster.seed = Some(seed);
            config.map.seed = Some(seed);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::States { data } => {
            if let Some(data) = data {
                config.data.path = Some(data);
            }
            list_states(&config)
        }
        Commands::Cluster(run) => {
            run.apply(&mut config);
            run_cluster(&config)
        }
        Commands::Render { run, out } => {
            run.apply(&mut config);
            if let Some(out) = out {
                config.output.dir = out;
            }
            run_render(&config)
        }
    }
}

fn load_dataset(config: &AppConfig) -> Result<Dataset> {
    let path = config
        .data
        .path
        .as_ref()
        .context("No hospital CSV given (use --data or [data] path)")?;
    Ok(Dataset::from_path(path)?)
}

fn selected_state(config: &AppConfig) -> Result<&str> {
    config
        .data
        .state
        .as_deref()
        .context("No state given (use --state or [data] state)")
}

fn list_states(config: &AppConfig) -> Result<()> {
    let dataset = load_dataset(config)?;
    for state in dataset.states() {
        println!("{}", state);
    }
    Ok(())
}

fn run_cluster(config: &AppConfig) -> Result<()> {
    let start_time = Instant::now();
    let state = selected_state(config)?;
    println!("=== bedmap: clustering {} ===\n", state);

    // Step 1: Load and select
    let step1_start = Instant::now();
    println!("Step 1: Loading hospitals...");
    let dataset = load_dataset(config)?;
    let mut state_table = dataset.state_table(state)?;
    println!(
        "✓ {} of {} hospitals complete [{:.2}s]\n",
        state_table.table.len(),
        dataset.len(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Cluster
    let step2_start = Instant::now();
    println!("Step 2: Training self-organizing map...");
    let result = cluster_state(&mut state_table, &config.cluster)?;
    let (rows, cols) = result.map_shape();
    println!(
        "✓ {}x{} map, {} clusters, {} centroids [{:.2}s]\n",
        rows,
        cols,
        result.cluster_count(),
        result.centroid_count(),
        step2_start.elapsed().as_secs_f64()
    );

    println!("  Cluster populations:");
    for pop in result.populations() {
        println!("    Cluster {}: {} hospitals", pop.cluster, pop.count);
    }

    println!(
        "\n✓ Done [{:.2}s]",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run_render(config: &AppConfig) -> Result<()> {
    let start_time = Instant::now();
    let state = selected_state(config)?;
    println!("=== bedmap: rendering {} ===\n", state);

    // Step 1: Load and select
    let step1_start = Instant::now();
    println!("Step 1: Loading hospitals...");
    let dataset = load_dataset(config)?;
    let mut state_table = dataset.state_table(state)?;
    println!(
        "✓ {} of {} hospitals complete [{:.2}s]\n",
        state_table.table.len(),
        dataset.len(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Cluster
    let step2_start = Instant::now();
    println!("Step 2: Training self-organizing map...");
    let result = cluster_state(&mut state_table, &config.cluster)?;
    println!(
        "✓ {} clusters, {} centroids [{:.2}s]\n",
        result.cluster_count(),
        result.centroid_count(),
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Annotate maps
    let step3_start = Instant::now();
    println!("Step 3: Annotating maps...");
    let utilization = utilization_map(&state_table, &config.map)?;
    let clusters = cluster_map(&state_table, &result, &config.map)?;
    println!(
        "✓ {} circles, {} centroid pins [{:.2}s]\n",
        clusters.circles.len(),
        clusters.pins.len(),
        step3_start.elapsed().as_secs_f64()
    );

    // Step 4: Export
    let step4_start = Instant::now();
    println!("Step 4: Writing {}...", config.output.dir.display());
    let mut exporter = MapExporter::new(&config.output.dir, state)?;
    exporter.record_clusters(&result);
    exporter.write_map("utilization", &utilization)?;
    exporter.write_map("clusters", &clusters)?;
    exporter.write_table(bedmap::export::CLUSTERS_FILE, &state_table.table)?;
    let manifest = exporter.finish()?;
    println!(
        "✓ Manifest at {} [{:.2}s]\n",
        manifest.display(),
        step4_start.elapsed().as_secs_f64()
    );

    println!("✓ Done [{:.2}s]", start_time.elapsed().as_secs_f64());
    Ok(())
}
