use crate::common::{fixture, run_with_config, LAUNCHER_PATH};

#[test]
fn help_prints_usage_and_exits_zero() {
    let cases: [&[&str]; 4] = [
        &["--help"],
        &["-h"],
        &["help"],
        &["complex", "--whole", "--help"],
    ];
    for args in cases {
        let output = run_with_config(
            LAUNCHER_PATH,
            &fixture("tests/fixtures/launcher_missing_binaries.toml"),
            args,
        );
        assert_eq!(output.status.code(), Some(0), "args: {args:?}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage: aider-local"), "stdout: {stdout}");
    }
}

#[test]
fn unknown_mode_exits_one_without_reading_config() {
    // Config path does not exist: reading it would be a different failure.
    let output = run_with_config(
        LAUNCHER_PATH,
        &fixture("tests/fixtures/does_not_exist.toml"),
        &["bogus", "--whole"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown mode `bogus`"), "stderr: {stderr}");
    assert!(!stderr.contains("configuration"), "stderr: {stderr}");
}

#[test]
fn missing_aider_reports_launch_failure() {
    let output = run_with_config(
        LAUNCHER_PATH,
        &fixture("tests/fixtures/launcher_missing_binaries.toml"),
        &["fast"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to launch `/nonexistent/aider-local-test/aider`"),
        "stderr: {stderr}"
    );
    assert!(
        stderr.contains("Continuing without a confirmed model-serving daemon"),
        "stderr: {stderr}"
    );
}

#[test]
fn invalid_config_exits_one() {
    let output = run_with_config(
        LAUNCHER_PATH,
        &fixture("tests/fixtures/launcher_relative_venv.toml"),
        &["primary"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aider.venv"), "stderr: {stderr}");
}

#[cfg(unix)]
mod handoff {
    use crate::common::{run_with_config, FakeInstall, LAUNCHER_PATH};

    #[test]
    fn aider_exit_code_and_arguments_pass_through() {
        let install = FakeInstall::new();
        let output = run_with_config(
            LAUNCHER_PATH,
            &install.config(),
            &[
                "--udiff",
                "--map-tokens",
                "1024",
                "--architect",
                "--whole",
                "notes.md",
            ],
        );

        assert_eq!(
            output.status.code(),
            Some(7),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(
            install.recorded_args(),
            vec![
                "--model",
                "ollama/qwen2.5-coder:7b-instruct-q8_0",
                "--edit-format",
                "whole",
                "--architect",
                "--no-auto-commits",
                "--map-tokens",
                "1024",
                "notes.md",
            ]
        );
        assert_eq!(
            install.recorded_env(),
            vec![
                "http://127.0.0.1:11434".to_string(),
                install.venv.display().to_string(),
            ]
        );
    }

    #[test]
    fn mode_selects_model_and_auto_commits() {
        let install = FakeInstall::new();
        let output = run_with_config(
            LAUNCHER_PATH,
            &install.config(),
            &["complex", "--auto-commits"],
        );

        assert_eq!(output.status.code(), Some(7));
        let args = install.recorded_args();
        assert_eq!(args[1], "ollama/qwen2.5-coder:14b-instruct-q4_K_M");
        assert_eq!(args[3], "diff");
        assert!(args.contains(&"--auto-commits".to_string()));
    }
}
