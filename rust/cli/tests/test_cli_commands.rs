mod helpers;

use helpers::cli_runner::CliRunner;

const FAST: [&str; 4] = ["--reveal-delay-ms", "0", "--result-delay-ms", "0"];

fn play_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["play"];
    args.extend_from_slice(&FAST);
    args.extend_from_slice(extra);
    args
}

#[test]
fn help_lists_all_commands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for c in ["play", "sim", "cfg"] {
        assert!(res.stdout.contains(c), "help should mention {c}");
    }
}

#[test]
fn play_end_of_input_quits_cleanly() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&play_args(&["--seed", "11"]), "hint\n");
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("highlow: seed=11"));
    assert!(res.stdout.contains("Higher: "));
    assert!(res.stdout.contains("Final score: 0"));
}

#[test]
fn play_writes_one_log_line_per_guess() {
    let cli = CliRunner::new();
    let log = cli.dir().join("logs/rounds.jsonl");
    let log_arg = log.to_string_lossy().to_string();
    let res = cli.run_with_input(
        &play_args(&["--seed", "5", "--log", &log_arg]),
        "h\nl\nt\nq\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);

    let content = std::fs::read_to_string(&log).expect("log file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["round"], (i + 1) as u64);
        assert_eq!(v["seed"], 5);
        assert!(v["ts"].is_string());
    }
    assert!(lines[0].contains("\"guess\":\"higher\""));
}

#[test]
fn seed_from_environment_is_used() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["sim", "--games", "1"], &[("HIGHLOW_SEED", "314")]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("seed=314"));
}

#[test]
fn cfg_reports_file_and_env_sources() {
    let cli = CliRunner::new();
    let cfg_path = cli.dir().join("highlow.toml");
    std::fs::write(&cfg_path, "seed = 9\nreveal_delay_ms = 250\n").unwrap();
    let cfg_arg = cfg_path.to_string_lossy().to_string();

    let res = cli.run_with_env(
        &["cfg"],
        &[
            ("HIGHLOW_CONFIG", cfg_arg.as_str()),
            ("HIGHLOW_SEED", "10"),
        ],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    let v: serde_json::Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(v["seed"]["value"], 10);
    assert_eq!(v["seed"]["source"], "env");
    assert_eq!(v["reveal_delay_ms"]["value"], 250);
    assert_eq!(v["reveal_delay_ms"]["source"], "file");
    assert_eq!(v["result_delay_ms"]["source"], "default");
}

#[test]
fn play_flag_overrides_out_of_range_env_delay() {
    let cli = CliRunner::new();
    let res = cli.run_with_env_and_input(
        &play_args(&["--seed", "3"]),
        &[("HIGHLOW_REVEAL_DELAY_MS", "60000")],
        "q\n",
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Final score: 0"));
}

#[test]
fn invalid_env_delay_fails_with_exit_two() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["cfg"], &[("HIGHLOW_RESULT_DELAY_MS", "60000")]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr
            .contains("Error: Invalid configuration: result_delay_ms must be <= 10000\n")
    );
    assert_eq!(res.stderr.matches("Invalid configuration:").count(), 1);
}
