//! # Vehicles & the Telolet Adapter
//!
//! [`Car`] and [`Bus`] each support only part of the [`Vehicle`] capability set.
//! [`TeloletAdapter`] wraps any vehicle, owns it, and adds the telolet horn while forwarding
//! everything it does not override.

mod telolet;
mod vehicles;

pub use telolet::TeloletAdapter;
pub use vehicles::{Bus, Car};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("'{vehicle}' has no {capability} capability")]
    Unsupported {
        vehicle: String,
        capability: &'static str,
    },
}

impl VehicleError {
    pub fn unsupported(vehicle: &str, capability: &'static str) -> Self {
        VehicleError::Unsupported {
            vehicle: vehicle.to_string(),
            capability,
        }
    }
}

/// The full set of things a vehicle may be able to do.
///
/// Every vehicle can be driven. Horns are optional: the default implementations report
/// [`VehicleError::Unsupported`].
pub trait Vehicle {
    fn name(&self) -> &str;

    fn drive(&self) -> String;

    fn klakson(&self) -> Result<String, VehicleError> {
        Err(VehicleError::unsupported(self.name(), "klakson"))
    }

    fn telolet(&self) -> Result<String, VehicleError> {
        Err(VehicleError::unsupported(self.name(), "telolet"))
    }
}
