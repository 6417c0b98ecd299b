//! Run a seeded dispatch scenario and print completed rides.
//!
//! Run with: cargo run -p dispatch_core --example scenario_run [params.json]
//!
//! The optional JSON file overrides [ScenarioParams] fields, e.g.
//! `{ "num_drivers": 10, "num_riders": 200, "seed": 7 }`.

use std::error::Error;
use std::fs;

use bevy_ecs::prelude::World;
use dispatch_core::clock::{SimulationClock, ONE_SEC_MS};
use dispatch_core::runner::{run_until_empty, simulation_schedule};
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::telemetry::SimTelemetry;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

fn main() -> Result<(), Box<dyn Error>> {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();

    let params = match std::env::args().nth(1) {
        Some(path) => ScenarioParams::from_json_str(&fs::read_to_string(path)?)?,
        None => ScenarioParams::default().with_seed(123),
    };
    let (num_drivers, num_riders) = (params.num_drivers, params.num_riders);

    let mut world = World::new();
    build_scenario(&mut world, params)?;

    let mut schedule = simulation_schedule();
    let max_steps = 1_000_000;
    let steps = run_until_empty(&mut world, &mut schedule, max_steps);

    let telemetry = world.resource::<SimTelemetry>();
    let sim_time_secs = world.resource::<SimulationClock>().now() / ONE_SEC_MS;

    println!("--- Scenario run ({num_riders} riders, {num_drivers} drivers) ---");
    println!("Steps executed: {steps}");
    println!("Simulation time: {sim_time_secs} s ({:.1} min)", sim_time_secs as f64 / 60.0);
    println!("Completed rides: {}", telemetry.completed());
    println!("Abandoned requests: {}", telemetry.abandoned());
    println!("Unmatched attempts: {}", telemetry.unmatched_attempts);
    if let Some(rate) = telemetry.completion_rate() {
        println!("Completion rate: {:.1}%", rate * 100.0);
    }
    if let Some(wait) = telemetry.mean_time_to_match_ms() {
        println!("Mean time to match: {:.1} s", wait / ONE_SEC_MS as f64);
    }
    if let Some(pickup) = telemetry.mean_pickup_distance() {
        println!("Mean pickup distance: {pickup:.2}");
    }

    const SAMPLE: usize = 20;
    if telemetry.completed() > 0 {
        println!("\nSample completed rides (first {SAMPLE}):");
        for (i, r) in telemetry.completed_rides.iter().take(SAMPLE).enumerate() {
            println!(
                "  {}  ride={} rider={} driver={}  attempts={}  time_to_match={} s  duration={} s  pickup={:.2}  trip={:.2}",
                i + 1,
                r.ride_id,
                r.rider_id,
                r.driver_id,
                r.attempts,
                r.time_to_match() / ONE_SEC_MS,
                r.ride_duration() / ONE_SEC_MS,
                r.pickup_distance,
                r.trip_distance,
            );
        }
        if telemetry.completed() > SAMPLE {
            println!("  ... and {} more", telemetry.completed() - SAMPLE);
        }
    }
    Ok(())
}
