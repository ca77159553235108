use super::{Vehicle, VehicleError};

/// Drives and honks, but has no telolet horn.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Car;

impl Vehicle for Car {
    fn name(&self) -> &str {
        "Car"
    }

    fn drive(&self) -> String {
        "Driving a Car...".to_string()
    }

    fn klakson(&self) -> Result<String, VehicleError> {
        Ok("Honk: Tin tin".to_string())
    }
}

/// Drives and plays the telolet horn, but has no klakson.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bus;

impl Vehicle for Bus {
    fn name(&self) -> &str {
        "Bus"
    }

    fn drive(&self) -> String {
        "Driving a Bus...".to_string()
    }

    fn telolet(&self) -> Result<String, VehicleError> {
        Ok("Honk: Telolet Telolet".to_string())
    }
}
