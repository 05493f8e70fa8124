//! `llm-models` commands over the mode preset table.
use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{Context, Result};

use crate::{
    cli::{BenchmarkArgs, Mode, ModelsCommand, SetupArgs, TestArgs, DEFAULT_RUN_TIMEOUT_SECS},
    lib::errors::ModelError,
};

pub mod manager;
pub mod report;

pub use manager::ModelManager;
pub use report::{
    banner, confirms_pull, estimate_tokens_per_sec, render_info, render_run_report,
    render_setup_action, BenchmarkEntry, BenchmarkOutcome, BenchmarkReport, RunReport,
    SetupAction,
};

/// Execute a `llm-models` command and return the text to print.
pub async fn execute_models_command(command: ModelsCommand, binary: &str) -> Result<String> {
    let manager = ModelManager::connect(binary).await?;
    match command {
        ModelsCommand::List => Ok(manager.list_models().await?),
        ModelsCommand::Info => Ok(render_info(&manager.list_models().await?)),
        ModelsCommand::Setup(args) => setup(&manager, args).await,
        ModelsCommand::Test(args) => test(&manager, args).await,
        ModelsCommand::Benchmark(args) => benchmark(&manager, args).await,
    }
}

async fn setup(manager: &ModelManager, args: SetupArgs) -> Result<String> {
    println!("Setting up all recommended models...");
    println!("This will download several GB of data.\n");

    let confirm = |mode: Mode| {
        let accepted = args.yes || ask_to_pull(mode).unwrap_or(false);
        if accepted {
            println!("\nPulling model: {}", mode.model_id());
            println!("This may take a while...");
        }
        accepted
    };
    let actions = manager
        .setup(confirm, |mode, action| {
            println!("{}", render_setup_action(mode, action))
        })
        .await?;

    let (mut pulled, mut failed, mut declined) = (0, 0, 0);
    for (_, action) in &actions {
        match action {
            SetupAction::Pulled => pulled += 1,
            SetupAction::Failed(_) => failed += 1,
            SetupAction::Declined => declined += 1,
            SetupAction::AlreadyInstalled => {}
        }
    }
    Ok(format!(
        "\nSetup finished: {pulled} pulled, {failed} failed, {declined} skipped"
    ))
}

/// Ask before pulling. A closed stdin counts as "no".
fn ask_to_pull(mode: Mode) -> io::Result<bool> {
    print!("Pull {} model ({})? [Y/n]: ", mode.as_str(), mode.model_id());
    io::stdout().flush()?;
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(confirms_pull(&answer))
}

async fn test(manager: &ModelManager, args: TestArgs) -> Result<String> {
    let mode = Mode::parse(&args.mode).ok_or_else(|| ModelError::UnknownMode {
        key: args.mode.clone(),
    })?;
    if !manager.is_installed(mode.model_id()).await? {
        return Err(ModelError::NotInstalled {
            model_id: mode.model_id().to_string(),
        }
        .into());
    }

    println!("\nTesting {}...", mode.model_id());
    println!("Prompt: {}", args.prompt);
    println!("{}", "-".repeat(50));

    let report = manager
        .run_model(mode, &args.prompt, Duration::from_secs(args.timeout_secs))
        .await
        .with_context(|| format!("testing {} failed", mode.as_str()))?;

    Ok(render_run_report(&report))
}

async fn benchmark(manager: &ModelManager, args: BenchmarkArgs) -> Result<String> {
    let progress = |mode: Mode, result: &Result<RunReport, ModelError>| {
        if args.json {
            return;
        }
        println!("\nTesting {}...", mode.model_id());
        println!("{}", "-".repeat(50));
        match result {
            Ok(report) => println!("{}", render_run_report(report)),
            Err(err) => println!("✗ {} failed: {err}", mode.as_str()),
        }
    };
    let report = manager
        .benchmark(
            &args.prompt,
            Duration::from_secs(DEFAULT_RUN_TIMEOUT_SECS),
            progress,
        )
        .await?;

    if args.json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = banner("Benchmark Summary");
    out.push('\n');
    out.push_str(&report.render_summary());
    for mode in &report.skipped {
        out.push_str(&format!("Skipped {mode} - not installed\n"));
    }
    Ok(out.trim_end().to_string())
}
