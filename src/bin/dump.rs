//! Tree Dump Binary
//!
//! Builds the decision tree for a catalog and prints every node, either as
//! numbered indented text or as JSON.

use clap::Parser;
use twenty_questions::catalog::Catalog;
use twenty_questions::config::Config;
use twenty_questions::tree::Node;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog to build from. Defaults to TWENTYQ_DATA.
    #[arg(long)]
    data: Option<std::path::PathBuf>,
    /// Print the tree as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    twenty_questions::log()?;
    let args = Args::parse();
    let path = args.data.unwrap_or_else(|| Config::from_env().data);
    let catalog = Catalog::load(&path)?;
    let tree = Node::from(&catalog);
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&tree)?),
        false => print!("{}", tree.dump()),
    }
    Ok(())
}
