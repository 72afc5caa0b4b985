//! SpawnWatch - Behavioral Baseline Detection Lab
//!
//! One synchronous batch pipeline: generate simulated endpoint logs, build
//! the parent/child frequency baseline, match against the known-bad
//! signature table, score the hits, and render the report.

mod constants;
mod logic;

use std::io;

use logic::baseline::{self, BaselineTable};
use logic::config::{PipelineConfig, SimulationConfig};
use logic::detect::signatures::SignatureSet;
use logic::telemetry::store;
use logic::{detect, report, simulate};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    if let Err(e) = run() {
        log::error!("Pipeline aborted: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let sim_config = SimulationConfig::default();
    let pipeline = PipelineConfig::default();
    let log_path = pipeline.log_path();

    log::info!(
        "[1/4] Generating {} simulated endpoint events...",
        sim_config.total_records
    );
    let generated = simulate::generate_events(&sim_config);
    let written = store::save_events(&generated, &log_path)?;
    log::info!("Saved {} events to {}", written, log_path.display());

    log::info!("[2/4] Building behavioural baseline...");
    let events = store::load_events(&log_path)?;
    let baseline_table = BaselineTable::build(&events);
    log::info!(
        "Baseline covers {} distinct parent/child pairs",
        baseline_table.len()
    );
    println!("{}", baseline::render(&baseline_table));

    log::info!("[3/4] Running detection engine...");
    let alerts = detect::run_detection(&events, &baseline_table, SignatureSet::builtin());
    println!("{}", report::render_report(&alerts));

    log::info!("[4/4] Exporting alerts...");
    let alert_path = pipeline.alert_path();
    let exported = report::export_alerts_jsonl(&alerts, &alert_path)?;
    log::info!("Exported {} alerts to {}", exported, alert_path.display());

    log::info!("Done: {}", report::summarize(&alerts));
    Ok(())
}
