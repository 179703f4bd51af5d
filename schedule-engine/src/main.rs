use std::env;
use std::error::Error;
use std::process::ExitCode;

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schedule_engine::feed::{DirSource, HttpSource, HttpSourceConfig};
use schedule_engine::intent::{Intent, IntentParser};
use schedule_engine::planner::{EngineConfig, QueryOptions};
use schedule_engine::ScheduleService;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let utterance = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if utterance.trim().is_empty() {
        return Err("usage: schedule-engine <utterance>, e.g. \"from union to oriole\"".into());
    }

    let service = ScheduleService::new(EngineConfig::default());

    // Feed location from the environment; a local directory wins over a URL
    let summary = match (env::var("GTFS_DIR"), env::var("GTFS_URL")) {
        (Ok(dir), _) => service.load(&DirSource::new(dir)).await?,
        (_, Ok(url)) => {
            let source = HttpSource::new(HttpSourceConfig::new(url))?;
            service.load(&source).await?
        }
        _ => return Err("GTFS_DIR or GTFS_URL must be set".into()),
    };
    tracing::info!(stops = summary.stops, stop_times = summary.stop_times, "Feed loaded");

    let intent = IntentParser::new()?.parse(&utterance);
    let options = QueryOptions::upcoming();

    let result = match &intent {
        Intent::Schedule { from, to, .. } => {
            serde_json::to_value(service.find_schedule(from, to, &options)?)?
        }
        Intent::Departures { station, .. } => {
            serde_json::to_value(service.find_departures(station, &options)?)?
        }
        Intent::StationInfo { query, .. } => serde_json::to_value(service.resolve_station(query)?)?,
        Intent::Unknown { .. } => serde_json::Value::Null,
    };

    let output = json!({ "intent": intent, "result": result });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
