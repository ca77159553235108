use super::{Vehicle, VehicleError};
use tracing::debug;

/// Gives any vehicle a telolet horn.
///
/// `drive` and `telolet` are the adapter's own; `name` and `klakson` go to the wrapped
/// vehicle unchanged, including its errors.
#[derive(Debug, Clone, PartialEq)]
pub struct TeloletAdapter<V> {
    vehicle: V,
}

impl<V: Vehicle> TeloletAdapter<V> {
    pub fn new(vehicle: V) -> Self {
        debug!(vehicle = vehicle.name(), "Vehicle adapted");
        Self { vehicle }
    }

    pub fn inner(&self) -> &V {
        &self.vehicle
    }

    pub fn into_inner(self) -> V {
        self.vehicle
    }
}

impl<V: Vehicle> Vehicle for TeloletAdapter<V> {
    fn name(&self) -> &str {
        self.vehicle.name()
    }

    fn drive(&self) -> String {
        format!("Driving a modified {}...", self.name())
    }

    fn klakson(&self) -> Result<String, VehicleError> {
        self.vehicle.klakson()
    }

    fn telolet(&self) -> Result<String, VehicleError> {
        Ok("Honk 2nd Variation: Telolet Telolet Telolet".to_string())
    }
}
