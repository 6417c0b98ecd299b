//! Driver registry: the source of truth for driver existence, location and availability.
//!
//! Drivers are stored in registration order; every query is a linear scan in that
//! order, which is what makes nearest-driver tie-breaking deterministic.

use std::collections::HashMap;

use crate::error::{DispatchError, Result};
use crate::geometry::Location;
use crate::model::{Driver, DriverId};

#[derive(Debug, Clone, Default)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
    /// Driver id → position in `drivers`. Drivers are never removed, so positions stay valid.
    index: HashMap<DriverId, usize>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a batch of drivers, failing on the first duplicate id.
    pub fn with_drivers<I>(drivers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Driver>,
    {
        let mut registry = Self::new();
        for driver in drivers {
            registry.register(driver)?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, driver: Driver) -> Result<()> {
        let id = driver.id();
        if self.index.contains_key(&id) {
            return Err(DispatchError::DuplicateId(id));
        }
        self.index.insert(id, self.drivers.len());
        self.drivers.push(driver);
        Ok(())
    }

    pub fn update_location(&mut self, driver_id: DriverId, location: Location) -> Result<()> {
        self.driver_mut(driver_id)?.set_location(location);
        Ok(())
    }

    pub fn set_availability(&mut self, driver_id: DriverId, available: bool) -> Result<()> {
        self.driver_mut(driver_id)?.set_available(available);
        Ok(())
    }

    pub fn get(&self, driver_id: DriverId) -> Option<&Driver> {
        self.index.get(&driver_id).map(|&slot| &self.drivers[slot])
    }

    /// All drivers in registration order.
    pub fn list_all(&self) -> &[Driver] {
        &self.drivers
    }

    /// Available drivers in registration order.
    pub fn list_available(&self) -> impl Iterator<Item = &Driver> + '_ {
        self.drivers.iter().filter(|driver| driver.is_available())
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    fn driver_mut(&mut self, driver_id: DriverId) -> Result<&mut Driver> {
        let slot = *self
            .index
            .get(&driver_id)
            .ok_or(DispatchError::NotFound(driver_id))?;
        Ok(&mut self.drivers[slot])
    }
}
