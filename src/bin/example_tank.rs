use aqadvisor::utils::logger;
use aqadvisor::{Stocking, Tank};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let stocking = Stocking::new()
        .add("cardinal tetra", 5)
        .add("panda cory", 6)
        .add("lemon_tetra", 12)
        .add("pearl gourami", 4);

    println!("My user-specified stocking is: {}", stocking);
    println!("I translate this into: {}", stocking.resolved_stock());

    let tank = Tank::new("55g")
        .select_filter("AquaClear 30")
        .attach_stocking(stocking);
    println!(
        "My tank looks like {} {} {:?} {:?}",
        tank,
        tank.stocking(),
        tank.ldh(),
        tank.filter().map(|f| f.pair())
    );
    println!();

    match tank.evaluate().await {
        Ok(assessment) => println!("Aqadvisor tells me: {}", assessment),
        Err(e) => eprintln!("❌ {}", e.user_friendly_message()),
    }

    Ok(())
}
