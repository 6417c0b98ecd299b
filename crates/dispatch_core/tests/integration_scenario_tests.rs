mod support;

use dispatch_core::scenario::{RideRequests, ScenarioParams};
use support::{available_ids, dispatcher, run_scenario, telemetry};

#[test]
fn every_request_completes_or_is_abandoned() {
    let params = ScenarioParams {
        num_drivers: 5,
        num_riders: 60,
        ..Default::default()
    }
    .with_seed(7)
    .with_request_window_mins(10)
    .with_retry_policy(30, 3);

    let world = run_scenario(params);

    let telemetry = telemetry(&world);
    assert_eq!(telemetry.completed() + telemetry.abandoned(), 60);
    assert!(telemetry.completed() > 0);
    assert!(world.resource::<RideRequests>().0.is_empty());

    let dispatcher = dispatcher(&world);
    assert_eq!(dispatcher.active_rides().count(), 0);
    assert_eq!(available_ids(dispatcher).len(), 5);
}

#[test]
fn completed_rides_have_consistent_timestamps() {
    let world = run_scenario(
        ScenarioParams {
            num_drivers: 10,
            num_riders: 40,
            ..Default::default()
        }
        .with_seed(11),
    );

    for record in &telemetry(&world).completed_rides {
        assert!(record.matched_at >= record.requested_at);
        assert!(record.completed_at > record.matched_at);
        assert!(record.attempts >= 1);
        assert!(record.pickup_distance >= 0.0);
    }
}

#[test]
fn no_drivers_means_every_request_is_abandoned() {
    let world = run_scenario(
        ScenarioParams {
            num_drivers: 0,
            num_riders: 8,
            ..Default::default()
        }
        .with_seed(3)
        .with_retry_policy(10, 2),
    );

    let telemetry = telemetry(&world);
    assert_eq!(telemetry.completed(), 0);
    assert_eq!(telemetry.abandoned(), 8);
    // First attempt plus two retries per rider.
    assert_eq!(telemetry.unmatched_attempts, 8 * 3);
    assert_eq!(telemetry.completion_rate(), Some(0.0));
}

#[test]
fn same_seed_produces_identical_telemetry() {
    let params = ScenarioParams {
        num_drivers: 8,
        num_riders: 50,
        ..Default::default()
    }
    .with_seed(2024);

    let first = run_scenario(params.clone());
    let second = run_scenario(params);

    assert_eq!(telemetry(&first), telemetry(&second));
}

#[test]
fn ample_fleet_serves_every_rider_first_try() {
    let world = run_scenario(
        ScenarioParams {
            num_drivers: 30,
            num_riders: 30,
            ..Default::default()
        }
        .with_seed(5),
    );

    let telemetry = telemetry(&world);
    assert_eq!(telemetry.completed(), 30);
    assert_eq!(telemetry.unmatched_attempts, 0);
    assert!(telemetry.completed_rides.iter().all(|r| r.attempts == 1));
}
