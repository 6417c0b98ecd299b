pub mod ride_ended;
pub mod ride_requested;

#[cfg(test)]
mod end_to_end_tests {
    use bevy_ecs::prelude::World;

    use crate::clock::{EventKind, EventSubject, SimulationClock, ONE_SEC_MS};
    use crate::dispatcher::RideDispatcher;
    use crate::geometry::Location;
    use crate::model::{Driver, DriverId, Rider, RiderId};
    use crate::registry::DriverRegistry;
    use crate::runner::{run_until_empty, simulation_schedule};
    use crate::scenario::{DispatchSimConfig, DispatcherResource, RideRequest, RideRequests};
    use crate::telemetry::SimTelemetry;

    #[test]
    fn simulates_one_ride_end_to_end() {
        let mut world = World::new();
        let registry = DriverRegistry::with_drivers([Driver::new(
            DriverId(1),
            "Driver A",
            Location::new(0.0, 0.0),
        )])
        .expect("registry");
        world.insert_resource(DispatcherResource::new(RideDispatcher::new(registry)));
        world.insert_resource(DispatchSimConfig {
            speed_units_per_sec: 1.0,
            ..Default::default()
        });
        world.insert_resource(SimTelemetry::default());

        let rider = Rider::new(RiderId(1), "Rider One");
        let mut requests = RideRequests::default();
        requests.0.insert(
            rider.id(),
            RideRequest::new(rider, Location::new(3.0, 4.0), Location::new(3.0, 10.0), 0),
        );
        world.insert_resource(requests);

        let mut clock = SimulationClock::default();
        clock.schedule_at(0, EventKind::RideRequested, EventSubject::Rider(RiderId(1)));
        world.insert_resource(clock);

        let mut schedule = simulation_schedule();
        let steps = run_until_empty(&mut world, &mut schedule, 10);
        assert_eq!(steps, 2);

        let telemetry = world.resource::<SimTelemetry>();
        assert_eq!(telemetry.completed(), 1);
        let record = &telemetry.completed_rides[0];
        assert_eq!(record.driver_id, DriverId(1));
        assert_eq!(record.matched_at, 0);
        // 5 units to the pickup plus 6 units of trip at 1 unit/s.
        assert_eq!(record.completed_at, 11 * ONE_SEC_MS);

        let dispatcher = world.resource::<DispatcherResource>();
        let driver = dispatcher.registry().get(DriverId(1)).expect("driver");
        assert!(driver.is_available());
        assert_eq!(driver.location(), Location::new(3.0, 10.0));
        assert!(world.resource::<RideRequests>().0.is_empty());
    }
}
