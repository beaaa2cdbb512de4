use highcard_cli::run_with_stdin;
use serde_json::Value;
use serial_test::serial;
use std::io::{Cursor, Write};

const VARS: &[&str] = &[
    "HIGHCARD_CONFIG",
    "HIGHCARD_SEED",
    "HIGHCARD_HAND_SIZE",
    "HIGHCARD_PACE",
    "HIGHCARD_POLICY",
];

struct EnvGuard;

impl EnvGuard {
    fn set(pairs: &[(&str, &str)]) -> Self {
        clear();
        for (k, v) in pairs {
            unsafe {
                std::env::set_var(k, v);
            }
        }
        EnvGuard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear();
    }
}

fn clear() {
    for k in VARS {
        unsafe {
            std::env::remove_var(k);
        }
    }
}

fn run(args: &[&str], input: &str) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let code = run_with_stdin(args, &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn cfg_json() -> Value {
    let (code, out, err) = run(&["highcard", "cfg"], "");
    assert_eq!(code, 0, "stderr={}", err);
    serde_json::from_str(&out).unwrap()
}

#[test]
#[serial]
fn defaults_are_reported_as_default() {
    let _env = EnvGuard::set(&[]);
    let json = cfg_json();
    assert_eq!(json["hand_size"]["value"].as_u64(), Some(5));
    assert_eq!(json["hand_size"]["source"].as_str(), Some("default"));
    assert!(json["seed"]["value"].is_null());
    assert_eq!(json["pace"]["value"].as_f64(), Some(1.0));
    assert_eq!(json["policy"]["value"].as_str(), Some("random"));
}

#[test]
#[serial]
fn env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hand_size = 7\nseed = 100\npolicy = \"random\"").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::set(&[
        ("HIGHCARD_CONFIG", path.as_str()),
        ("HIGHCARD_SEED", "200"),
    ]);

    let json = cfg_json();
    assert_eq!(json["hand_size"]["value"].as_u64(), Some(7));
    assert_eq!(json["hand_size"]["source"].as_str(), Some("file"));
    assert_eq!(json["seed"]["value"].as_u64(), Some(200));
    assert_eq!(json["seed"]["source"].as_str(), Some("env"));
    assert_eq!(json["policy"]["source"].as_str(), Some("file"));
    assert_eq!(json["pace"]["source"].as_str(), Some("default"));
}

#[test]
#[serial]
fn invalid_env_value_fails_cfg() {
    let _env = EnvGuard::set(&[("HIGHCARD_HAND_SIZE", "0")]);
    let (code, out, err) = run(&["highcard", "cfg"], "");
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Invalid configuration: hand_size must be within 1..=26"));
}

#[test]
#[serial]
fn unknown_file_keys_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hands = 3").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let _env = EnvGuard::set(&[("HIGHCARD_CONFIG", path.as_str())]);
    let (code, _, err) = run(&["highcard", "cfg"], "");
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn play_uses_env_and_flags_win() {
    let _env = EnvGuard::set(&[
        ("HIGHCARD_HAND_SIZE", "2"),
        ("HIGHCARD_SEED", "4"),
        ("HIGHCARD_PACE", "0"),
    ]);
    let (code, out, _) = run(&["highcard", "play"], "q\n");
    assert_eq!(code, 0);
    assert!(out.contains("play: hand_size=2 seed=4 pace=0 policy=random"));

    let (code, out, _) = run(
        &["highcard", "play", "--hand-size", "6", "--seed", "9"],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("play: hand_size=6 seed=9 pace=0"));
}

#[test]
#[serial]
fn unknown_policy_stops_play() {
    let _env = EnvGuard::set(&[("HIGHCARD_POLICY", "oracle"), ("HIGHCARD_PACE", "0")]);
    let (code, _, err) = run(&["highcard", "play", "--seed", "1"], "q\n");
    assert_eq!(code, 2);
    assert!(err.contains("Unknown opponent policy: oracle"));
}
