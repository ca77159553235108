use pattern_recipes::factory::{WorkerError, WorkerFactory};
use pattern_recipes::runtime::setup_tracing;

fn main() -> Result<(), WorkerError> {
    setup_tracing();

    let factory = WorkerFactory::new();
    let workers = ["analyst", "developer", "tester"]
        .into_iter()
        .map(|t| factory.create_worker(t))
        .collect::<Result<Vec<_>, _>>()?;

    for worker in &workers {
        println!("{} start {} the Program", worker.name(), worker.work());
        println!("Skills: {:?}\n", worker.skills());
    }

    if let Err(e) = factory.create_worker("manager") {
        println!("Error: {e}");
    }
    Ok(())
}
