//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{LocalcartError, LocalcartResult};
use crate::store::Origin;
use console::style;
use std::path::PathBuf;

const VALID_KEYS: [&str; 4] = [
    "general.log_format",
    "storage.origin",
    "storage.quota_bytes",
    "storage.data_dir",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
) -> LocalcartResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> LocalcartResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> LocalcartResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        println!(
            "  {} Config already exists at {} - Use --force to overwrite",
            style("[WARN]").yellow(),
            path.display()
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    println!(
        "  {} Configuration initialized ({})",
        style("[OK]").green(),
        path.display()
    );

    Ok(())
}

/// Update one key in the config file.
///
/// Starts from the file contents rather than the effective config, so
/// command-line overrides never leak into the saved file.
async fn set_value(manager: &ConfigManager, key: &str, value: &str) -> LocalcartResult<()> {
    let mut config = manager.load().await?;
    apply_value(&mut config, key, value)?;

    manager.save(&config).await?;
    println!("  {} Set {} = {}", style("[OK]").green(), key, value);

    Ok(())
}

fn apply_value(config: &mut Config, key: &str, value: &str) -> LocalcartResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,
        ["storage", "origin"] => {
            config.storage.origin = value.parse::<Origin>()?.to_string();
        }
        ["storage", "quota_bytes"] => config.storage.quota_bytes = parse_usize(value)?,
        ["storage", "data_dir"] => {
            config.storage.data_dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        _ => {
            return Err(LocalcartError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_log_format(value: &str) -> LocalcartResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(LocalcartError::User(format!(
            "Invalid log format: {}. Use text/json",
            value
        ))),
    }
}

fn parse_usize(value: &str) -> LocalcartResult<usize> {
    value
        .parse()
        .map_err(|_| LocalcartError::User(format!("Invalid number: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_known_keys() {
        let mut config = Config::default();
        apply_value(&mut config, "storage.origin", "HTTP://Shop.Example:80").unwrap();
        apply_value(&mut config, "storage.quota_bytes", "0").unwrap();
        apply_value(&mut config, "general.log_format", "json").unwrap();
        apply_value(&mut config, "storage.data_dir", "/var/lib/localcart").unwrap();

        assert_eq!(config.storage.origin, "http://shop.example");
        assert_eq!(config.storage.quota_bytes, 0);
        assert_eq!(config.general.log_format, "json");
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/localcart"))
        );

        apply_value(&mut config, "storage.data_dir", "").unwrap();
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_value(&mut config, "storage.origin", "localhost").is_err());
        assert!(apply_value(&mut config, "storage.quota_bytes", "-1").is_err());
        assert!(apply_value(&mut config, "general.log_format", "xml").is_err());
        assert!(apply_value(&mut config, "vm.name", "x").is_err());
        assert_eq!(config.storage.origin, "http://localhost");
    }

    #[tokio::test]
    async fn set_value_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.toml"));

        set_value(&manager, "storage.origin", "https://shop.example")
            .await
            .unwrap();

        let loaded = manager.load().await.unwrap();
        assert_eq!(loaded.storage.origin, "https://shop.example");
    }
}
