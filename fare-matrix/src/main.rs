//! fare-matrix CLI - seat availability tables for one train

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fare_matrix::domain::{SeatType, TrainModel, TravelDate};
use fare_matrix::matrix::{DEFAULT_WORKERS, MatrixConfig, build_matrix};
use fare_matrix::render::{CellMetric, DEFAULT_CHUNK_SIZE, RenderConfig, render_matrix};
use fare_matrix::schedule::ScheduleStore;
use fare_matrix::shohoz::{DEFAULT_BASE_URL, ShohozClient, ShohozConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "fare-matrix")]
#[command(about = "Tabulate seat availability for every station pair of a train")]
struct Cli {
    /// Train model number, e.g. 707
    #[arg(short, long, env = "FARE_MATRIX_TRAIN")]
    train: TrainModel,

    /// Date of journey as DD-Mon-YYYY, e.g. 19-Nov-2024
    #[arg(short, long, env = "FARE_MATRIX_DATE")]
    date: TravelDate,

    /// Directory of schedule documents
    #[arg(short, long, default_value = "processed", env = "FARE_MATRIX_SCHEDULES")]
    schedules: PathBuf,

    /// Maximum concurrent searches
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Destination columns per table
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Seat class sent as the search filter
    #[arg(long, default_value = "SHULOV")]
    seat_class: SeatType,

    /// What each cell shows: seats or fare
    #[arg(long, default_value = "seats")]
    cell: CellMetric,

    /// Booking service base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "SHOHOZ_BASE_URL")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let store = ScheduleStore::load_dir(&cli.schedules)?;
    info!(count = store.len(), dir = %cli.schedules.display(), "Loaded schedules");

    // Preflight before building the HTTP client so a bad train or date
    // never touches the network.
    let schedule = store.plan(&cli.train, cli.date)?;
    println!("Train: {} (model {})", schedule.name, schedule.model);
    println!("Runs on: {}", schedule.days_label());
    println!(
        "Stations: {}",
        schedule.route.cities().collect::<Vec<_>>().join(" -> ")
    );

    let client = ShohozClient::new(
        ShohozConfig::new()
            .with_base_url(cli.base_url)
            .with_timeout(cli.timeout_secs),
    )?;

    let config = MatrixConfig::new(cli.train, cli.date)
        .with_workers(cli.workers)
        .with_seat_class_filter(cli.seat_class);

    let report = build_matrix(Arc::new(client), &store, &config).await?;

    let render = RenderConfig::new()
        .with_chunk_size(cli.chunk_size)
        .with_metric(cli.cell);
    print!("{}", render_matrix(&report.matrix, &render));

    Ok(())
}
