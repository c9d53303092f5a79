use std::fs;
use std::path::{Path, PathBuf};

use fruit_cli::{run, Config};

/// Scratch directory unique to one test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fruit-cli-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

fn config(dir: &Path) -> Config {
    Config {
        input: dir.join("input.txt"),
        output: dir.join("output.txt"),
        depth: None,
        policy: None,
        deadline_fraction: None,
        parallel: false,
        log_level: "info".into(),
    }
}

#[test]
fn writes_move_and_board() {
    let dir = scratch("move");
    fs::write(dir.join("input.txt"), "2\n2\n100.0\n11\n11\n").expect("write input");

    let decision = run(&config(&dir)).expect("run succeeds");
    assert_eq!(decision.score, 16);

    let output = fs::read_to_string(dir.join("output.txt")).expect("read output");
    assert_eq!(output, "A2\n**\n**\n");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn empty_board_writes_empty_file() {
    let dir = scratch("empty");
    fs::write(dir.join("input.txt"), "2\n2\n100.0\n**\n**\n").expect("write input");

    let decision = run(&config(&dir)).expect("run succeeds");
    assert_eq!(decision.chosen, None);
    assert_eq!(fs::read_to_string(dir.join("output.txt")).expect("read output"), "");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn fixed_depth_and_deadline() {
    let dir = scratch("fixed");
    fs::write(dir.join("input.txt"), "3\n2\n50\n121\n122\n211\n").expect("write input");

    let mut cfg = config(&dir);
    cfg.depth = Some(2);
    cfg.deadline_fraction = Some(0.5);
    cfg.parallel = true;
    let decision = run(&cfg).expect("run succeeds");
    assert_eq!(decision.stats.depth_limit, 2);
    assert!(decision.chosen.is_some());

    let output = fs::read_to_string(dir.join("output.txt")).expect("read output");
    assert_eq!(output.lines().count(), 4);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn custom_policy_file() {
    let dir = scratch("policy");
    fs::write(dir.join("input.txt"), "2\n2\n100.0\n12\n21\n").expect("write input");
    fs::write(
        dir.join("policy.toml"),
        "[[bands]]\nfallback = 1\n",
    )
    .expect("write policy");

    let mut cfg = config(&dir);
    cfg.policy = Some(dir.join("policy.toml"));
    let decision = run(&cfg).expect("run succeeds");
    assert_eq!(decision.stats.depth_limit, 1);
    assert_eq!(decision.score, 1);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn malformed_input_is_reported() {
    let dir = scratch("malformed");
    fs::write(dir.join("input.txt"), "3\n2\n100.0\n12\n21\n").expect("write input");

    let err = run(&config(&dir)).unwrap_err();
    assert!(err.to_string().contains("malformed game input"));
    assert!(!dir.join("output.txt").exists());
    fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_input_is_reported() {
    let dir = scratch("missing");
    let err = run(&config(&dir)).unwrap_err();
    assert!(err.to_string().contains("failed to read game input"));
    fs::remove_dir_all(dir).ok();
}
