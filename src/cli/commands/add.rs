//! Add command - put a product in the cart

use super::open_store;
use crate::cart::CartManager;
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::error::LocalcartResult;
use crate::render::TerminalSink;
use console::style;

/// Execute the add command
pub async fn execute(args: AddArgs, config: &Config) -> LocalcartResult<()> {
    let store = open_store(config)?;
    let mut manager = CartManager::new(store);
    let mut sink = TerminalSink::new();

    let previous = manager.add_to_cart(&args.name, &args.quantity, &mut sink)?;

    if let Some(old) = previous {
        println!(
            "{} Replaced previous quantity {} for {}",
            style("!").yellow(),
            style(old).dim(),
            style(&args.name).cyan()
        );
    }

    Ok(())
}
