//! ankara — end-to-end run of the traffic forecast engine.
//!
//! Simulates the Ankara road network from 07:30 local time through the
//! morning peak: 45 minutes running, 10 minutes paused, 15 more minutes
//! running.  Writes CSV output and prints the forecast, KPIs, the segments
//! each active incident affects, and its response suggestions.
//!
//! ```text
//! cargo run -p ankara -- [config.json] [city-key | roads.csv]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tf_core::{EngineConfig, IncidentId, SegmentId, Timestamp};
use tf_forecast::{HistoricalDataPoint, IntensityLevel};
use tf_incident::Incident;
use tf_network::{load_roads_csv, Segment};
use tf_output::{CsvWriter, OutputWriter, SimOutputObserver};
use tf_sim::{SimObserver, SimulationBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

/// 2023-11-14 04:30 UTC, i.e. 07:30 in Ankara.
const START_UNIX_MS: u64 = 1_699_936_200_000;
const MINUTE:        u64 = 60_000;
const OUTPUT_DIR:    &str = "output/ankara";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    incident_rows: usize,
    history_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, incident_rows: 0, history_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, now: Timestamp, segments: &[Segment]) {
        self.snapshot_rows += segments.len();
        self.inner.on_tick_end(now, segments);
    }

    fn on_incident_spawned(&mut self, incident: &Incident, affected: &[SegmentId]) {
        self.incident_rows += 1;
        self.inner.on_incident_spawned(incident, affected);
    }

    fn on_incident_cleared(&mut self, id: IncidentId, now: Timestamp) {
        self.incident_rows += 1;
        self.inner.on_incident_cleared(id, now);
    }

    fn on_history_sample(&mut self, now: Timestamp, point: &HistoricalDataPoint) {
        self.history_rows += 1;
        self.inner.on_history_sample(now, point);
    }

    fn on_run_end(&mut self, now: Timestamp) {
        self.inner.on_run_end(now);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);

    // 1. Config: JSON file if given, else defaults starting at 07:30 local.
    let config = match args.next() {
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<EngineConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        None => EngineConfig { start_unix_ms: START_UNIX_MS, ..EngineConfig::default() },
    };

    // 2. City key, or a custom road catalog.
    let target = args.next().unwrap_or_else(|| "ankara".to_owned());
    let mut builder = SimulationBuilder::new(config.clone());
    if target.ends_with(".csv") {
        let roads = load_roads_csv(Path::new(&target))?;
        info!(path = %target, roads = roads.len(), "loaded custom road catalog");
        builder = builder.roads(roads);
    } else {
        builder = builder.city(target);
    }
    let mut sim = builder.build()?;

    println!("=== {} — traffic forecast engine ===", sim.state.city.name);
    println!(
        "Segments: {}  |  Seed: {}  |  Start: {}",
        sim.state.segments.len(),
        config.seed,
        sim.clock.label(sim.now),
    );
    println!();

    // 3. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run, pause, resume.
    let t0 = Instant::now();
    sim.start();
    sim.run_for(45 * MINUTE, &mut obs);

    sim.pause();
    sim.run_for(10 * MINUTE, &mut obs);

    sim.resume(sim.now);
    sim.run_for(15 * MINUTE, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s (now {})", elapsed.as_secs_f64(), sim.clock.label(sim.now));
    println!("  segment_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  incident_events.csv   : {} rows", obs.incident_rows);
    println!("  history_samples.csv   : {} rows", obs.history_rows);
    println!();

    let forecast = sim.forecast();
    let kpis = sim.kpis();
    println!("Forecast ({} min): {} ({})", config.forecast_horizon_mins, forecast.score, forecast.trend);
    println!(
        "KPIs: average {}  |  incidents {}  |  delay {} min",
        kpis.average_score, kpis.active_incidents, kpis.total_delay_minutes,
    );
    println!("{}", serde_json::to_string(&forecast)?);
    println!();

    // 6. Final segment table.
    println!("{:<32} {:>9} {:<9}", "Segment", "Intensity", "Level");
    println!("{}", "-".repeat(52));
    for segment in &sim.state.segments {
        println!(
            "{:<32} {:>9.1} {:<9}",
            segment.name,
            segment.current_intensity,
            IntensityLevel::from_intensity(segment.current_intensity).to_string(),
        );
    }
    println!();

    // 7. Active incidents and what to do about them.
    for incident in sim.incidents() {
        println!(
            "[{}] {} (severity {}, clears {})",
            incident.id,
            incident.description,
            incident.severity,
            sim.clock.label(incident.clears_at()),
        );
        let name = |id: SegmentId| sim.state.segments.get(id.index()).map_or("?", |s| &*s.name);
        if let Some(nearest) = sim.index.nearest(incident.location) {
            println!("    nearest segment: {}", name(nearest));
        }
        let affected: Vec<&str> = sim
            .index
            .within_radius(incident.location, incident.affected_radius_m as f64)
            .into_iter()
            .map(name)
            .collect();
        println!("    affected ({} m): {}", incident.affected_radius_m, affected.join(", "));
        if let Some(bundle) = sim.suggestions(incident.id) {
            for action in &bundle.suggestions {
                println!("    - {action}");
            }
        }
    }

    Ok(())
}
