use reportify::cli::Cli;
use reportify::config::{Config, ConfigFormat};
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn default_cli() -> Cli {
    Cli {
        url: "https://example.com".to_string(),
        output: "text".to_string(),
        save: None,
        insights: false,
        insights_endpoint: None,
        api_key: None,
        verbose: false,
        config: None,
    }
}

#[test]
fn test_cli_values_take_precedence_over_config() {
    let config = Config {
        output: Some("json".to_string()),
        save: Some("config-report.json".to_string()),
        insights: Some(true),
        insights_endpoint: Some("https://config.example.com/v1".to_string()),
        api_key: Some("config-key".to_string()),
        verbose: Some(true),
    };

    let mut cli = default_cli();
    cli.output = "json".to_string();
    cli.save = Some("cli-report.json".to_string());
    cli.api_key = Some("cli-key".to_string());

    let merged = config.merge_with_cli(&cli);
    assert_eq!(merged.save, Some("cli-report.json".to_string()));
    assert_eq!(merged.api_key, Some("cli-key".to_string()));
    // Untouched CLI defaults fall back to config values
    assert!(merged.insights);
    assert!(merged.verbose);
    assert_eq!(
        merged.insights_endpoint,
        Some("https://config.example.com/v1".to_string())
    );
}

#[test]
fn test_config_fills_cli_defaults() {
    let config = Config {
        output: Some("json".to_string()),
        insights: Some(true),
        ..Default::default()
    };

    let merged = config.merge_with_cli(&default_cli());
    assert_eq!(merged.output, "json");
    assert!(merged.insights);
    assert_eq!(merged.url, "https://example.com");
    assert_eq!(merged.save, None);
}

#[test]
fn test_empty_config_leaves_cli_untouched() {
    let merged = Config::default().merge_with_cli(&default_cli());
    assert_eq!(merged.output, "text");
    assert!(!merged.insights);
    assert!(!merged.verbose);
    assert_eq!(merged.insights_endpoint, None);
}

#[test]
fn test_from_file_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reportify.ini");
    fs::write(&path, "output = json").unwrap();

    let result = Config::from_file(&path);
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Unsupported config file format")
    );
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reportify.toml");
    fs::write(&path, "output = [not toml").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_from_file_missing_file() {
    let result = Config::from_file(Path::new("/nonexistent/reportify.toml"));
    assert!(result.is_err());
}

#[test]
fn test_default_paths_check_current_directory_first() {
    let paths = Config::default_paths();
    assert_eq!(paths[0], PathBuf::from("reportify.json"));
    assert!(paths.contains(&PathBuf::from("reportify.toml")));
    assert!(paths.contains(&PathBuf::from("reportify.yaml")));
    assert!(paths.contains(&PathBuf::from("reportify.yml")));
}

#[test]
#[serial]
fn test_default_paths_respect_xdg_config_home() {
    let dir = tempdir().unwrap();
    // SAFETY: serialized by #[serial], no concurrent env access in this test
    // binary.
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
    }

    let paths = Config::default_paths();
    let expected = dir.path().join("reportify").join("config.toml");
    assert!(paths.contains(&expected));

    unsafe {
        std::env::remove_var("XDG_CONFIG_HOME");
    }
}

#[test]
fn test_format_extensions() {
    assert_eq!(ConfigFormat::Json.extensions(), &["json"]);
    assert_eq!(ConfigFormat::Toml.extensions(), &["toml"]);
    assert_eq!(ConfigFormat::Yaml.extensions(), &["yaml", "yml"]);
}
