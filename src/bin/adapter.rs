use pattern_recipes::adapter::{Bus, Car, TeloletAdapter, Vehicle, VehicleError};
use pattern_recipes::runtime::setup_tracing;

fn horn(result: Result<String, VehicleError>) {
    match result {
        Ok(sound) => println!("{sound}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn main() {
    setup_tracing();

    let bus = Bus;
    println!("{} is ready!", bus.name());
    let car = Car;
    println!("{} is ready!", car.name());
    let car_modified = TeloletAdapter::new(car);
    println!(
        "Your {} has been adapted to have Telolet feature!",
        car_modified.name()
    );

    println!("\n=Bus=");
    println!("{}", bus.drive());
    horn(bus.telolet());

    println!("\n=Car=");
    println!("{}", car.drive());
    horn(car.klakson());
    horn(car.telolet());

    println!("\n=Modified Car (with Telolet Adapter)=");
    println!("{}", car_modified.drive());
    horn(car_modified.klakson());
    horn(car_modified.telolet());
}
