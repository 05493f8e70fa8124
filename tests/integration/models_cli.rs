use std::process::Command;

use crate::common::{fixture, run_with_config, MODELS_PATH};

#[test]
fn help_lists_subcommands() {
    let output = Command::new(MODELS_PATH)
        .arg("--help")
        .output()
        .expect("llm-models should run");
    assert!(output.status.success(), "llm-models --help should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in ["list", "info", "setup", "test", "benchmark"] {
        assert!(
            stdout.contains(needle),
            "llm-models --help should list {needle}, got:\n{stdout}"
        );
    }
}

#[test]
fn missing_ollama_exits_one() {
    let output = run_with_config(
        MODELS_PATH,
        &fixture("tests/fixtures/launcher_missing_binaries.toml"),
        &["list"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Ollama is not installed or not in PATH"),
        "stderr: {stderr}"
    );
}

#[cfg(unix)]
mod with_fake_ollama {
    use crate::common::{run_with_config, FakeInstall, MODELS_PATH};

    #[test]
    fn setup_without_terminal_pulls_nothing() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["setup"]);
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(install.recorded_pulls().is_empty());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("Setup finished: 0 pulled, 0 failed, 4 skipped"),
            "stdout: {stdout}"
        );
    }

    #[test]
    fn setup_yes_pulls_every_missing_preset() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["setup", "--yes"]);
        assert!(output.status.success());
        assert_eq!(
            install.recorded_pulls(),
            vec![
                "qwen2.5-coder:7b-instruct-q8_0",
                "qwen2.5-coder:7b-instruct-q4_K_M",
                "qwen2.5-coder:7b-instruct-q6_K",
                "qwen2.5-coder:14b-instruct-q4_K_M",
            ]
        );
        let stdout = String::from_utf8_lossy(&output.stdout);
        let pulling = stdout
            .find("Pulling model: qwen2.5-coder:7b-instruct-q4_K_M")
            .expect("notice before the fast pull");
        let pulled = stdout
            .find("✓ Successfully pulled qwen2.5-coder:7b-instruct-q8_0")
            .expect("primary result line");
        assert!(pulled < pulling, "results print as each preset is handled");
    }

    #[test]
    fn unknown_model_key_exits_one() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["test", "bogus"]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown model key `bogus`"), "stderr: {stderr}");
    }

    #[test]
    fn test_of_missing_model_suggests_pull() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["test", "fast"]);
        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("Run: ollama pull qwen2.5-coder:7b-instruct-q4_K_M"),
            "stderr: {stderr}"
        );
    }

    #[test]
    fn info_marks_every_preset_missing() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["info"]);
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        for needle in [
            "✗ PRIMARY: qwen2.5-coder:7b-instruct-q8_0",
            "✗ FAST: qwen2.5-coder:7b-instruct-q4_K_M",
            "✗ EXTENDED: qwen2.5-coder:7b-instruct-q6_K",
            "✗ COMPLEX: qwen2.5-coder:14b-instruct-q4_K_M",
        ] {
            assert!(stdout.contains(needle), "stdout: {stdout}");
        }
    }

    #[test]
    fn benchmark_json_skips_everything_missing() {
        let install = FakeInstall::new();
        let output = run_with_config(MODELS_PATH, &install.config(), &["benchmark", "--json"]);
        assert!(output.status.success());
        let report: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
        assert_eq!(report["results"].as_array().map(Vec::len), Some(0));
        assert_eq!(report["skipped"].as_array().map(Vec::len), Some(4));
        assert_eq!(report["prompt"], "def quicksort(arr):");
    }
}
