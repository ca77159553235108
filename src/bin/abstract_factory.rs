use pattern_recipes::abstract_factory::{ItTeamFactory, TeamFactory};
use pattern_recipes::runtime::setup_tracing;

fn main() {
    setup_tracing();

    let factory = ItTeamFactory;
    let analyst = factory.create_analyst("Zain");
    let developer = factory.create_developer("Zainul");
    let tester = factory.create_tester("Muhaimin");

    println!(
        "{} starts {} the Application requirements",
        analyst.name(),
        analyst.work()
    );
    println!("Skills: {:?}", analyst.skills());

    println!(
        "\n{} starts {} the Application",
        developer.name(),
        developer.work()
    );
    println!("Skills: {:?}", developer.skills());

    println!("\n{} starts {} the Application", tester.name(), tester.work());
    println!("Skills: {:?}", tester.skills());
}
