//! Integration tests for localcart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    /// Command isolated to a temporary config file and data directory
    fn localcart(dir: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("localcart");
        cmd.env("LOCALCART_CONFIG", dir.path().join("config.toml"))
            .env("LOCALCART_DATA_DIR", dir.path().join("data"))
            .env_remove("LOCALCART_ORIGIN");
        cmd
    }

    #[test]
    fn help_displays() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("persistent local storage"));
    }

    #[test]
    fn version_displays() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("localcart"));
    }

    #[test]
    fn list_empty() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn add_then_list_last_write_wins() {
        let dir = TempDir::new().unwrap();

        localcart(&dir)
            .args(["add", "Apple", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Apple : 3 pcs."));
        localcart(&dir).args(["add", "Banana", "5"]).assert().success();
        localcart(&dir)
            .args(["add", "Apple", "7"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Replaced previous quantity"));

        localcart(&dir)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "{\n  \"Apple\": \"7\",\n  \"Banana\": \"5\"\n}",
            ));

        localcart(&dir)
            .arg("list")
            .assert()
            .success()
            .stdout(
                predicate::str::is_match("(?s)Apple : 7 pcs\\..*Banana : 5 pcs\\.").unwrap(),
            );
    }

    #[test]
    fn store_raw_access() {
        let dir = TempDir::new().unwrap();

        localcart(&dir)
            .args(["store", "set", "username", "JohnDoe"])
            .assert()
            .success();
        localcart(&dir)
            .args(["store", "get", "username"])
            .assert()
            .success()
            .stdout("JohnDoe\n");
        localcart(&dir).args(["add", "Apple", "3"]).assert().success();
        localcart(&dir)
            .args(["store", "keys"])
            .assert()
            .success()
            .stdout("username\ncart\n");
        localcart(&dir)
            .args(["store", "len"])
            .assert()
            .success()
            .stdout("2\n");
        localcart(&dir)
            .args(["store", "get", "cart"])
            .assert()
            .success()
            .stdout("{\"Apple\":\"3\"}\n");
    }

    #[test]
    fn store_get_missing_key_fails() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["store", "get", "nonexistent"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Key not found"));
    }

    #[test]
    fn store_remove_absent_key_is_noop() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["store", "set", "username", "JohnDoe"])
            .assert()
            .success();

        localcart(&dir)
            .args(["store", "remove", "nonexistent"])
            .assert()
            .success()
            .stdout(predicate::str::contains("was not set"));
        localcart(&dir)
            .args(["store", "remove", "username"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));
        localcart(&dir)
            .args(["store", "len"])
            .assert()
            .stdout("0\n");
    }

    #[test]
    fn store_clear_requires_confirmation() {
        let dir = TempDir::new().unwrap();
        localcart(&dir).args(["add", "Apple", "3"]).assert().success();

        localcart(&dir)
            .args(["store", "clear"])
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Aborted."));
        localcart(&dir)
            .args(["store", "len"])
            .assert()
            .stdout("1\n");

        localcart(&dir)
            .args(["store", "clear", "--yes"])
            .assert()
            .success();
        localcart(&dir)
            .args(["store", "len"])
            .assert()
            .stdout("0\n");
    }

    #[test]
    fn origins_are_isolated() {
        let dir = TempDir::new().unwrap();

        localcart(&dir)
            .args(["--origin", "https://shop.example", "add", "Apple", "3"])
            .assert()
            .success();
        localcart(&dir)
            .args(["--origin", "https://other.example", "list", "--format", "json"])
            .assert()
            .success()
            .stdout("{}\n");
        localcart(&dir)
            .args(["--origin", "HTTPS://Shop.Example:443", "store", "len"])
            .assert()
            .success()
            .stdout("1\n");
    }

    #[test]
    fn invalid_origin_reports_hint() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["--origin", "localhost", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid origin"))
            .stderr(predicate::str::contains("scheme://host[:port]"));
    }

    #[test]
    fn quota_from_config_is_enforced() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["config", "set", "storage.quota_bytes", "16"])
            .assert()
            .success();

        localcart(&dir)
            .args(["add", "Watermelon", "12"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("quota exceeded"));
        localcart(&dir)
            .args(["list", "--format", "json"])
            .assert()
            .stdout("{}\n");
    }

    #[test]
    fn malformed_cart_is_an_error() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["store", "set", "cart", "{\"Apple\":"])
            .assert()
            .success();
        localcart(&dir)
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("JSON error"));
    }

    #[test]
    fn config_path() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[storage]"));
    }

    #[test]
    fn config_set_unknown_key_fails() {
        let dir = TempDir::new().unwrap();
        localcart(&dir)
            .args(["config", "set", "vm.name", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown config key"));
    }
}
