//! Store command - raw key-value access

use super::open_store;
use crate::cli::args::{StoreAction, StoreArgs};
use crate::config::Config;
use crate::error::{LocalcartError, LocalcartResult};
use crate::store::{FileStore, KeyValueStore};
use console::style;
use std::io::{self, Write};

/// Execute the store command
pub async fn execute(args: StoreArgs, config: &Config) -> LocalcartResult<()> {
    let mut store = open_store(config)?;

    match args.action {
        StoreAction::Get { key } => {
            let value = store.get(&key).ok_or(LocalcartError::KeyNotFound(key))?;
            println!("{}", value);
        }
        StoreAction::Set { key, value } => {
            store.set(&key, &value)?;
            println!("{} Set {}", style("✓").green(), style(&key).cyan());
        }
        StoreAction::Remove { key } => {
            if store.contains(&key) {
                store.remove(&key)?;
                println!("{} Removed {}", style("✓").green(), style(&key).cyan());
            } else {
                println!("{} {} was not set", style("!").yellow(), style(&key).cyan());
            }
        }
        StoreAction::Keys => {
            for key in store.keys() {
                println!("{}", key);
            }
        }
        StoreAction::Len => println!("{}", store.len()),
        StoreAction::Clear { yes } => clear(&mut store, yes)?,
    }

    Ok(())
}

fn clear(store: &mut FileStore, skip_confirm: bool) -> LocalcartResult<()> {
    if store.is_empty() {
        println!("No entries to clear for {}.", store.origin());
        return Ok(());
    }

    println!(
        "This will remove {} entr{} for {}",
        store.len(),
        if store.len() == 1 { "y" } else { "ies" },
        style(store.origin()).cyan()
    );

    if !skip_confirm {
        print!("Are you sure? [y/N] ");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Failed to read input, aborting.");
            return Ok(());
        }

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.clear()?;
    println!("{} Store cleared", style("✓").green());
    Ok(())
}
