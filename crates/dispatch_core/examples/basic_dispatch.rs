//! Register three drivers, book a ride for one rider, end it, and read it back.
//!
//! Run with: RUST_LOG=info cargo run -p dispatch_core --example basic_dispatch

use dispatch_core::test_helpers::{demo_dispatcher, demo_rider, DEMO_DESTINATION, DEMO_SOURCE};
use dispatch_core::DispatchError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

fn main() -> Result<(), DispatchError> {
    Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let mut dispatcher = demo_dispatcher();
    let rider = demo_rider();

    println!("\n--- {} requests a ride ---", rider.name());
    let ride = match dispatcher.request_ride(&rider, DEMO_SOURCE, DEMO_DESTINATION) {
        Ok(ride) => ride.clone(),
        Err(DispatchError::NoDriverAvailable(_)) => {
            println!("No available driver at the moment.");
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    let driver = dispatcher
        .driver_for(&ride)
        .map(|d| d.name().to_owned())
        .unwrap_or_default();
    println!("Ride {} booked with {driver}", ride.id());
    println!("Ride started from: {}", ride.source());
    println!("Destination: {}", ride.destination());

    println!("\n--- Ride is ending ---");
    let ended = dispatcher.end_ride(rider.id())?;
    println!("Ride {} ended for {}", ended.id(), rider.name());

    println!("\n--- Get ride info after ending ---");
    if dispatcher.get_active_ride(rider.id()).is_none() {
        println!("No active ride for {}.", rider.name());
    }

    println!("\nAvailable drivers:");
    for driver in dispatcher.registry().list_available() {
        println!("  {} {} at {}", driver.id(), driver.name(), driver.location());
    }
    Ok(())
}
