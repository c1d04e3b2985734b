//! List command - show the cart

use super::open_store;
use crate::cart::{Cart, CartManager};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::LocalcartResult;
use crate::render::TerminalSink;
use crate::store::KeyValueStore;
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> LocalcartResult<()> {
    let store = open_store(config)?;
    let manager = CartManager::new(store);

    match args.format {
        OutputFormat::Lines => print_lines(&manager)?,
        OutputFormat::Table => print_table(&manager.read_cart()?),
        OutputFormat::Json => print_json(&manager.read_cart()?)?,
    }

    Ok(())
}

fn print_lines<S: KeyValueStore>(manager: &CartManager<S>) -> LocalcartResult<()> {
    let mut sink = TerminalSink::new();
    if manager.render_all(&mut sink)? == 0 {
        println!("  {} Cart is empty", style("[INFO]").cyan());
    }
    Ok(())
}

fn print_table(cart: &Cart) {
    if cart.is_empty() {
        println!("  {} Cart is empty", style("[INFO]").cyan());
        return;
    }

    println!(
        "{:<30} {:<10}",
        style("PRODUCT").bold(),
        style("QUANTITY").bold()
    );
    println!("{}", "-".repeat(41));

    for (name, quantity) in cart.iter() {
        println!("{:<30} {:<10}", name, quantity);
    }

    println!();
    println!("{} product(s)", cart.len());
}

fn print_json(cart: &Cart) -> LocalcartResult<()> {
    let json = serde_json::to_string_pretty(cart)?;
    println!("{}", json);
    Ok(())
}
