//! CLI end-to-end tests against the `shop` binary.
//!
//! Every test runs in its own sandbox: config, data and catalog paths point
//! into a temporary directory so the user's files are never touched.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

struct CliContext {
    sandbox: TempDir,
    config_path: PathBuf,
}

impl CliContext {
    fn new() -> Self {
        let sandbox = TempDir::new().expect("failed to create temporary sandbox");
        let config_path = sandbox.path().join("shop-config.toml");
        fs::create_dir_all(sandbox.path().join("xdg-data")).expect("failed to create data dir");
        Self {
            sandbox,
            config_path,
        }
    }

    fn root(&self) -> &Path {
        self.sandbox.path()
    }

    fn output(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_shop"))
            .args(args)
            .env("SHOP_CONFIG", &self.config_path)
            .env("XDG_DATA_HOME", self.root().join("xdg-data"))
            .env("XDG_CONFIG_HOME", self.root().join("xdg-config"))
            .env("NO_COLOR", "1")
            .env_remove("SHOP_CATALOG")
            .env_remove("SHOP_LOG")
            .output()
            .expect("failed to run shop")
    }

    fn run(&self, args: &[&str]) -> String {
        let output = self.output(args);
        assert!(
            output.status.success(),
            "shop command failed\nargs: {:?}\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut full = vec!["--json"];
        full.extend_from_slice(args);
        let stdout = self.run(&full);
        serde_json::from_str(&stdout).unwrap_or_else(|err| {
            panic!(
                "command did not emit valid JSON\nargs: {:?}\nerror: {}\nstdout:\n{}",
                args, err, stdout
            )
        })
    }
}

fn product_ids(listing: &Value) -> Vec<String> {
    listing["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_str().expect("product id").to_string())
        .collect()
}

// ==================== Browsing ====================

#[test]
fn test_products_json_lists_filtered_catalog() {
    let ctx = CliContext::new();
    let listing = ctx.run_json(&["products", "gender=men,women&sort=price_desc"]);

    assert_eq!(listing["sort"], "price_desc");
    assert_eq!(listing["total"], 15);
    assert_eq!(listing["matched"], 13);
    assert_eq!(listing["chips"].as_array().map(Vec::len), Some(2));
    assert!(listing.get("warnings").is_none());

    let prices: Vec<f64> = listing["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_products_limit_keeps_match_count() {
    let ctx = CliContext::new();
    let listing = ctx.run_json(&["products", "height=mid", "--limit", "1"]);

    assert_eq!(listing["matched"], 2);
    assert_eq!(product_ids(&listing).len(), 1);
}

#[test]
fn test_products_warns_about_misspelled_key() {
    let ctx = CliContext::new();
    let listing = ctx.run_json(&["products", "colour=red"]);

    let warnings = listing["warnings"].as_array().expect("warnings");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["key"], "colour");
    assert_eq!(warnings[0]["suggestion"], "color");
    // The unknown key filters nothing.
    assert_eq!(listing["matched"], 15);
}

#[test]
fn test_products_table_reports_empty_result() {
    let ctx = CliContext::new();
    let stdout = ctx.run(&["products", "gender=kids&price=150%2B"]);
    assert!(stdout.contains("No products match the selected filters."));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let ctx = CliContext::new();
    let output = ctx.output(&["--json", "--verbose", "products", "height=mid"]);
    assert!(output.status.success());

    let listing: Value = serde_json::from_slice(&output.stdout).expect("listing json");
    assert_eq!(listing["matched"], 2);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("evaluated listing"));
    assert!(!stderr.contains("Matched"));
}

// ==================== Navigation ====================

#[test]
fn test_toggle_sort_clear_session() {
    let ctx = CliContext::new();

    let query = ctx.run(&["toggle", "", "color", "red"]);
    assert_eq!(query.trim(), "color=red");

    let query = ctx.run(&["toggle", query.trim(), "gender", "women"]);
    assert_eq!(query.trim(), "color=red&gender=women");

    let query = ctx.run(&["sort", query.trim(), "price-asc"]);
    assert_eq!(query.trim(), "color=red&gender=women&sort=price_asc");

    let query = ctx.run(&["clear", query.trim()]);
    assert_eq!(query.trim(), "sort=price_asc");
}

#[test]
fn test_toggle_json_includes_url() {
    let ctx = CliContext::new();
    let out = ctx.run_json(&["toggle", "color=red", "color", "red"]);
    assert_eq!(out["query"], "");
    assert_eq!(out["url"], "/products");
}

#[test]
fn test_url_canonicalizes_query() {
    let ctx = CliContext::new();
    let stdout = ctx.run(&["url", "color=red&color=blue", "--pathname", "/shoes"]);
    assert_eq!(stdout.trim(), "/shoes?color=red,blue");
}

#[test]
fn test_chips_and_groups() {
    let ctx = CliContext::new();

    let chips = ctx.run_json(&["chips", "price=0-50&color=red"]);
    let labels: Vec<&str> = chips["chips"]
        .as_array()
        .expect("chips array")
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Red", "$0 - $50"]);

    let stdout = ctx.run(&["groups", "color=red"]);
    assert!(stdout.contains("[x] Red"));
}

// ==================== Auth ====================

#[test]
fn test_auth_sign_in_valid() {
    let ctx = CliContext::new();
    let stdout = ctx.run(&[
        "auth",
        "sign-in",
        "--email",
        "ada@example.com",
        "--password",
        "correct-horse",
    ]);
    assert!(stdout.contains("All fields are valid."));
}

#[test]
fn test_auth_sign_up_invalid_exits_nonzero() {
    let ctx = CliContext::new();
    let output = ctx.output(&["--json", "auth", "sign-up", "--email", "nope"]);

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_slice(&output.stdout).expect("auth report");
    assert_eq!(report["valid"], false);
    let error: Value = serde_json::from_slice(&output.stderr).expect("error json");
    assert_eq!(error["error"]["code"], "VALIDATION_ERROR");
}

// ==================== Catalog ====================

#[test]
fn test_catalog_export_then_load() {
    let ctx = CliContext::new();
    let path = ctx.root().join("catalog.json");
    let path_str = path.to_str().unwrap();

    let exported = ctx.run_json(&["catalog", "export", path_str]);
    assert_eq!(exported["products"], 15);
    assert!(path.exists());

    let again = ctx.output(&["catalog", "export", path_str]);
    assert_eq!(again.status.code(), Some(3));

    let listing = ctx.run_json(&["--catalog", path_str, "products"]);
    assert_eq!(listing["total"], 15);
}

#[test]
fn test_missing_explicit_catalog_fails() {
    let ctx = CliContext::new();
    let missing = ctx.root().join("missing.json");
    let output = ctx.output(&["--catalog", missing.to_str().unwrap(), "products"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_catalog_path_defaults_to_builtin() {
    let ctx = CliContext::new();
    let out = ctx.run_json(&["catalog", "path"]);
    assert_eq!(out["source"], "builtin");
}

// ==================== Config ====================

#[test]
fn test_config_set_and_show() {
    let ctx = CliContext::new();
    ctx.run(&["config", "set", "pathname", "/shoes"]);

    let shown = ctx.run_json(&["config", "show"]);
    assert_eq!(shown["exists"], true);
    assert_eq!(shown["config"]["pathname"], "/shoes");

    let out = ctx.run_json(&["toggle", "", "height", "mid"]);
    assert_eq!(out["url"], "/shoes?height=mid");
}

#[test]
fn test_config_rejects_unknown_key() {
    let ctx = CliContext::new();
    let output = ctx.output(&["config", "set", "colour", "true"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown config key"));
}

// ==================== Completions ====================

#[test]
fn test_completions_bash() {
    let ctx = CliContext::new();
    let script = ctx.run(&["completions", "bash"]);
    assert!(script.contains("shop"));
}
