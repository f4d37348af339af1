use holdem_cli::config::{ENV_BOTS, ENV_CONFIG, ENV_DIFFICULTY, ENV_SEED};
use serde_json::Value;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn clear_env() {
    for key in [
        ENV_CONFIG,
        ENV_BOTS,
        ENV_DIFFICULTY,
        ENV_SEED,
        holdem_cli::config::ENV_CHIPS,
        holdem_cli::config::ENV_SMALL_BLIND,
        holdem_cli::config::ENV_BIG_BLIND,
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg_json() -> Value {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = holdem_cli::run(["holdem", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    serde_json::from_slice(&out).unwrap()
}

#[test]
#[serial]
fn cfg_shows_defaults() {
    clear_env();
    let json = cfg_json();
    assert_eq!(json["num_bots"]["value"], 3);
    assert_eq!(json["num_bots"]["source"], "default");
    assert_eq!(json["difficulty"]["value"], "medium");
    assert_eq!(json["big_blind"]["value"], 20);
    assert!(json["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("holdem.toml");
    fs::write(&path, "seed = 456\nnum_bots = 6\ndifficulty = \"easy\"\n").unwrap();
    unsafe {
        std::env::set_var(ENV_CONFIG, &path);
    }

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["seed"]["source"], "file");
    assert_eq!(json["num_bots"]["value"], 6);
    assert_eq!(json["difficulty"]["source"], "file");

    unsafe {
        std::env::set_var(ENV_SEED, "789");
        std::env::set_var(ENV_DIFFICULTY, "hard");
    }
    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 789);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["num_bots"]["source"], "file");
    clear_env();
}

#[test]
#[serial]
fn cli_flags_override_env() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_BOTS, "8");
    }
    let resolved = holdem_cli::config::load_with_sources(&holdem_cli::config::Overrides {
        num_bots: Some(2),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(resolved.config.num_bots, 2);
    assert_eq!(resolved.sources.num_bots, holdem_cli::config::ValueSource::Cli);

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = holdem_cli::run(["holdem", "deal", "--seed", "1"], &mut out, &mut err);
    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().filter(|l| l.starts_with("Seat ")).count(), 8);
    clear_env();
}

#[test]
#[serial]
fn bad_values_are_reported() {
    clear_env();
    unsafe {
        std::env::set_var(ENV_BOTS, "many");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(holdem_cli::run(["holdem", "cfg"], &mut out, &mut err), 2);
    assert!(String::from_utf8(err).unwrap().contains("Invalid HOLDEM_BOTS: 'many'"));
    clear_env();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "blinds = 5\n").unwrap();
    unsafe {
        std::env::set_var(ENV_CONFIG, &path);
    }
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(holdem_cli::run(["holdem", "cfg"], &mut Vec::<u8>::new(), &mut err), 2);
    assert!(String::from_utf8(err).unwrap().contains("cannot parse config file"));
    clear_env();
}
