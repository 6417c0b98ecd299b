#![allow(dead_code)]

use bevy_ecs::prelude::World;
use dispatch_core::model::{Driver, DriverId};
use dispatch_core::runner::{run_until_empty, simulation_schedule};
use dispatch_core::scenario::{build_scenario, DispatcherResource, ScenarioParams};
use dispatch_core::telemetry::SimTelemetry;
use dispatch_core::RideDispatcher;

/// Generous step cap: each rider produces at most `max_request_retries + 2` events.
pub const MAX_STEPS: usize = 1_000_000;

/// Builds and runs a scenario to completion, returning the finished world.
pub fn run_scenario(params: ScenarioParams) -> World {
    let mut world = World::new();
    build_scenario(&mut world, params).expect("scenario");
    let mut schedule = simulation_schedule();
    run_until_empty(&mut world, &mut schedule, MAX_STEPS);
    world
}

pub fn telemetry(world: &World) -> &SimTelemetry {
    world.resource::<SimTelemetry>()
}

pub fn dispatcher(world: &World) -> &RideDispatcher {
    &world.resource::<DispatcherResource>().0
}

/// `(id, available)` for every driver, in registry order.
pub fn availability(dispatcher: &RideDispatcher) -> Vec<(DriverId, bool)> {
    dispatcher
        .registry()
        .list_all()
        .iter()
        .map(|d| (d.id(), d.is_available()))
        .collect()
}

pub fn available_ids(dispatcher: &RideDispatcher) -> Vec<DriverId> {
    dispatcher.registry().list_available().map(Driver::id).collect()
}
