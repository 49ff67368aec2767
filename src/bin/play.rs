//! Twenty Questions Binary
//!
//! Loads the catalog named by `TWENTYQ_DATA`, builds the tree once, and plays
//! rounds until the player declines another.

use twenty_questions::catalog::Catalog;
use twenty_questions::config::Config;
use twenty_questions::game::Human;
use twenty_questions::game::Session;
use twenty_questions::tree::Node;

fn main() -> anyhow::Result<()> {
    twenty_questions::log()?;
    let config = Config::from_env();
    let catalog = Catalog::load(&config.data)?;
    let tree = Node::from(&catalog);
    println!(
        "Think of a {} from a list of {}. I'll try to guess it.",
        config.subject,
        catalog.len()
    );
    let outcomes = Session::new(&tree)
        .subject(config.subject)
        .run(&mut Human, &mut rand::rng())?;
    log::info!(
        "won {} of {} rounds",
        outcomes.iter().filter(|o| o.is_win()).count(),
        outcomes.len()
    );
    Ok(())
}
