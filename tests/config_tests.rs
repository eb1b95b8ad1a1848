//! Settings loading and token resolution tests

use gh_metrics::config::Settings;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("gh-metrics.yaml");
    fs::write(&path, yaml).unwrap();
    path.to_string_lossy().to_string()
}

fn set_env_token(value: Option<&str>) {
    // SAFETY: every test touching the environment is #[serial]
    unsafe {
        match value {
            Some(token) => std::env::set_var("GITHUB_TOKEN", token),
            None => std::env::remove_var("GITHUB_TOKEN"),
        }
    }
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
token: ghp_from_file
api_base: https://github.example.com/api/v3
organization: octo
repositories:
  - https://github.com/octo/one
  - git@github.com:octo/two.git
"#,
    );

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.token.as_deref(), Some("ghp_from_file"));
    assert_eq!(settings.api_base, "https://github.example.com/api/v3");
    assert_eq!(settings.organization.as_deref(), Some("octo"));
    assert_eq!(settings.repositories.len(), 2);
}

#[test]
fn test_load_rejects_invalid_repository_url() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "repositories:\n  - not-a-url\n");

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid repository URL: 'not-a-url'"));
}

#[test]
fn test_load_rejects_bad_api_base() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "api_base: ftp://example.com\n");

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("API base"));
}

#[test]
fn test_load_malformed_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "repositories: [unclosed\n");

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
#[serial]
fn test_resolve_missing_explicit_config_fails() {
    let err = Settings::resolve(Some("does-not-exist.yaml"), None).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
#[serial]
fn test_resolve_flag_beats_file_and_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "token: ghp_from_file\n");
    set_env_token(Some("ghp_from_env"));

    let settings = Settings::resolve(Some(&path), Some("ghp_from_flag".to_string())).unwrap();
    set_env_token(None);

    assert_eq!(settings.token.as_deref(), Some("ghp_from_flag"));
}

#[test]
#[serial]
fn test_resolve_file_beats_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "token: ghp_from_file\n");
    set_env_token(Some("ghp_from_env"));

    let settings = Settings::resolve(Some(&path), None).unwrap();
    set_env_token(None);

    assert_eq!(settings.token.as_deref(), Some("ghp_from_file"));
}

#[test]
#[serial]
fn test_resolve_falls_back_to_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "repositories: []\n");
    set_env_token(Some("ghp_from_env"));

    let settings = Settings::resolve(Some(&path), None).unwrap();
    set_env_token(None);

    assert_eq!(settings.token.as_deref(), Some("ghp_from_env"));
    assert!(settings.client().is_authenticated());
}

#[test]
#[serial]
fn test_resolve_without_any_token_is_unauthenticated() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "token: \"\"\n");
    set_env_token(None);

    let settings = Settings::resolve(Some(&path), None).unwrap();

    assert!(settings.token.is_none());
    assert!(!settings.client().is_authenticated());
}

#[test]
#[serial]
fn test_resolve_uses_default_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "organization: from-default-file\n");
    set_env_token(None);

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = Settings::resolve(None, None);

    std::env::set_current_dir(original_dir).unwrap();

    let settings = result.unwrap();
    assert_eq!(settings.organization.as_deref(), Some("from-default-file"));
}

#[test]
#[serial]
fn test_resolve_without_default_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    set_env_token(None);

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = Settings::resolve(None, None);

    std::env::set_current_dir(original_dir).unwrap();

    let settings = result.unwrap();
    assert_eq!(settings.api_base, "https://api.github.com");
    assert!(settings.repositories.is_empty());
}
