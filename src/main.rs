// ==========================================
// Quadrant Engine - CLI Entry
// ==========================================
// Reads an assignment request from a JSON file, runs the engine
// against the SQLite store and the premises directory, prints the
// proposal as JSON
// ==========================================

use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use quadrant_engine::api::AssignmentApi;
use quadrant_engine::config::PremisesRegistry;
use quadrant_engine::db::default_db_path;
use quadrant_engine::domain::AssignmentRequest;
use quadrant_engine::engine::{AssignmentOrchestrator, AssignmentSources};
use quadrant_engine::logging;
use quadrant_engine::repository::{PersonnelRepository, ShiftRepository, VehicleRepository};

struct CliArgs {
    request_path: PathBuf,
    db_path: PathBuf,
    premises_dir: PathBuf,
    store: bool,
}

fn parse_args() -> Result<CliArgs> {
    let mut request_path: Option<PathBuf> = None;
    let mut db_path: Option<PathBuf> = None;
    let mut premises_dir: Option<PathBuf> = None;
    let mut store = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--db" => {
                let value = args.next().context("--db needs a path")?;
                db_path = Some(PathBuf::from(value));
            }
            "--premises" => {
                let value = args.next().context("--premises needs a directory")?;
                premises_dir = Some(PathBuf::from(value));
            }
            "--store" => store = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with('-') => bail!("unknown option: {}", other),
            other => request_path = Some(PathBuf::from(other)),
        }
    }

    let Some(request_path) = request_path else {
        print_usage();
        bail!("missing request file");
    };
    let db_path = db_path.unwrap_or_else(default_db_path);
    let premises_dir = premises_dir.unwrap_or_else(|| {
        db_path
            .parent()
            .map(|p| p.join("premises"))
            .unwrap_or_else(|| PathBuf::from("premises"))
    });

    Ok(CliArgs {
        request_path,
        db_path,
        premises_dir,
        store,
    })
}

fn print_usage() {
    eprintln!("Usage: quadrant-engine <request.json> [--db <path>] [--premises <dir>] [--store]");
    eprintln!();
    eprintln!("  <request.json>    assignment request in the wire format");
    eprintln!("  --db <path>       SQLite database (default: platform data dir)");
    eprintln!("  --premises <dir>  premises config directory (default: next to the db)");
    eprintln!("  --store           also persist the proposal as a draft shift record");
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = parse_args()?;

    info!("==================================================");
    info!("{} v{}", quadrant_engine::APP_NAME, quadrant_engine::VERSION);
    info!("==================================================");
    info!(db = %args.db_path.display(), premises = %args.premises_dir.display(), "starting");

    if let Some(parent) = args.db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }
    let db_path = args.db_path.to_string_lossy().to_string();

    let raw = fs::read_to_string(&args.request_path)
        .with_context(|| format!("reading request file {}", args.request_path.display()))?;
    let request: AssignmentRequest =
        serde_json::from_str(&raw).context("parsing assignment request json")?;

    let personnel = Arc::new(PersonnelRepository::new(&db_path)?);
    let vehicles = Arc::new(VehicleRepository::new(&db_path)?);
    let shifts = Arc::new(ShiftRepository::new(&db_path)?);

    let sources = AssignmentSources::new(personnel, vehicles, shifts.clone());
    let premises = Arc::new(PremisesRegistry::from_dir(&args.premises_dir));
    let orchestrator = AssignmentOrchestrator::new(sources, premises);
    let api = AssignmentApi::new(orchestrator, shifts);

    if args.store {
        let response = api.propose_and_store(&request).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let outcome = api.propose(&request).await?;
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
