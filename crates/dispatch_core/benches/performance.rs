//! Performance benchmarks for dispatch_core using Criterion.rs.

use bevy_ecs::prelude::World;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dispatch_core::geometry::Location;
use dispatch_core::matching::{MatchingAlgorithm, NearestAvailableMatching, SimpleMatching};
use dispatch_core::model::{Driver, DriverId, Rider, RiderId};
use dispatch_core::registry::DriverRegistry;
use dispatch_core::runner::{run_until_empty, simulation_schedule};
use dispatch_core::scenario::{build_scenario, ScenarioParams};
use dispatch_core::RideDispatcher;

/// Drivers laid out on a square grid with unit spacing.
fn grid_drivers(count: u32) -> Vec<(DriverId, Location)> {
    let side = (count as f64).sqrt().ceil() as u32;
    (0..count)
        .map(|i| {
            (
                DriverId(i + 1),
                Location::new((i % side) as f64, (i / side) as f64),
            )
        })
        .collect()
}

fn bench_matching_algorithms(c: &mut Criterion) {
    let source = Location::new(17.3, 22.9);
    let mut group = c.benchmark_group("matching_algorithms");

    for count in [100u32, 1_000, 10_000] {
        let drivers = grid_drivers(count);
        group.bench_with_input(BenchmarkId::new("nearest", count), &drivers, |b, drivers| {
            b.iter(|| black_box(NearestAvailableMatching.find_match(source, drivers)));
        });
        group.bench_with_input(BenchmarkId::new("simple", count), &drivers, |b, drivers| {
            b.iter(|| black_box(SimpleMatching.find_match(source, drivers)));
        });
    }
    group.finish();
}

fn bench_request_and_end(c: &mut Criterion) {
    let registry = DriverRegistry::with_drivers(
        grid_drivers(1_000)
            .into_iter()
            .map(|(id, location)| Driver::new(id, format!("Driver {id}"), location)),
    )
    .expect("registry");
    let mut dispatcher = RideDispatcher::new(registry);
    let rider = Rider::new(RiderId(1), "Rider");

    c.bench_function("request_and_end_1000_drivers", |b| {
        b.iter(|| {
            dispatcher
                .request_ride(&rider, Location::new(12.5, 12.5), Location::new(12.5, 12.5))
                .expect("ride");
            black_box(dispatcher.end_ride(rider.id()).expect("end"));
        });
    });
}

fn bench_scenario_run(c: &mut Criterion) {
    let scenarios = vec![("small", 20, 100), ("medium", 100, 1_000)];

    let mut group = c.benchmark_group("scenario_run");
    for (name, drivers, riders) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(drivers, riders),
            |b, &(drivers, riders)| {
                b.iter(|| {
                    let mut world = World::new();
                    let params = ScenarioParams {
                        num_drivers: drivers,
                        num_riders: riders,
                        ..Default::default()
                    }
                    .with_seed(42);

                    build_scenario(&mut world, params).expect("scenario");
                    let mut schedule = simulation_schedule();
                    black_box(run_until_empty(&mut world, &mut schedule, 1_000_000));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_matching_algorithms,
    bench_request_and_end,
    bench_scenario_run
);
criterion_main!(benches);
