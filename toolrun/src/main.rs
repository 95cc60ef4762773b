//! Sequential linter/formatter runner.
//!
//! With no arguments, runs the built-in tool table from the project root and
//! exits 0 whatever the tools report.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use toolrun::exit_codes;
use toolrun::io::config::{Config, RunnerSettings, load_config};
use toolrun::io::report::write_report;
use toolrun::io::root::RootSource;
use toolrun::io::shell::SystemShell;
use toolrun::logging;
use toolrun::report::render_summary;
use toolrun::run::{RunOptions, run_all};

const DEFAULT_CONFIG: &str = "scripts/tools.toml";

#[derive(Parser)]
#[command(
    name = "toolrun",
    version,
    about = "Run the project's linters and formatters in sequence"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every tool in order (the default).
    Run(RunArgs),
    /// Print the tool table in execution order without running anything.
    List(Location),
}

#[derive(Args, Default)]
struct Location {
    /// Config file. Also anchors the project root (its directory's parent).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Project root; overrides the derived one.
    #[arg(long)]
    root: Option<PathBuf>,
}

#[derive(Args, Default)]
struct RunArgs {
    #[command(flatten)]
    location: Location,
    /// Print a failure summary after the last tool.
    #[arg(long)]
    summary: bool,
    /// Exit non-zero when any tool fails.
    #[arg(long)]
    strict: bool,
    /// Write a JSON report of every tool outcome.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Kill a tool after this many seconds (0 disables).
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_run(RunArgs::default()),
        Some(Command::Run(args)) => cmd_run(args),
        Some(Command::List(location)) => cmd_list(&location),
    }
}

fn cmd_run(args: RunArgs) -> Result<i32> {
    let (root, cfg) = locate(&args.location)?;
    let table = cfg.table()?;
    let settings = effective_settings(&cfg.runner, &args);
    debug!(root = %root.display(), tools = table.len(), "running tools");

    let options = RunOptions {
        timeout: settings.timeout(),
    };
    let report = {
        let mut stdout = std::io::stdout().lock();
        run_all(&table, &root, &SystemShell, options, &mut stdout)?
    };

    if settings.summary {
        for line in render_summary(&report) {
            println!("{line}");
        }
    }
    if let Some(path) = &args.report {
        write_report(path, &report)?;
    }

    if settings.strict && !report.all_succeeded() {
        return Ok(exit_codes::TOOL_FAILED);
    }
    Ok(exit_codes::OK)
}

fn cmd_list(location: &Location) -> Result<i32> {
    let (_, cfg) = locate(location)?;
    for entry in cfg.table()?.iter() {
        println!("{}\t{}", entry.name, entry.command);
    }
    Ok(exit_codes::OK)
}

/// Resolve the project root and load the config that applies to it.
fn locate(location: &Location) -> Result<(PathBuf, Config)> {
    let source = root_source(location)?;
    let root = source.resolve()?;

    let cfg = match &location.config {
        Some(path) => {
            if !path.exists() {
                bail!("config {} not found", path.display());
            }
            load_config(path)?
        }
        None => load_config(&root.join(DEFAULT_CONFIG))?,
    };
    Ok((root, cfg))
}

fn root_source(location: &Location) -> Result<RootSource> {
    if let Some(root) = &location.root {
        return Ok(RootSource::Explicit(root.clone()));
    }
    if let Some(config) = &location.config {
        return Ok(RootSource::Anchor(config.clone()));
    }
    let exe = std::env::current_exe().context("locate toolrun executable")?;
    Ok(RootSource::Anchor(exe))
}

/// CLI flags switch features on; they never switch off what the config enables.
fn effective_settings(cfg: &RunnerSettings, args: &RunArgs) -> RunnerSettings {
    RunnerSettings {
        summary: cfg.summary || args.summary,
        strict: cfg.strict || args.strict,
        timeout_secs: args.timeout_secs.unwrap_or(cfg.timeout_secs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn no_arguments_means_run() {
        let cli = Cli::parse_from(["toolrun"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_run_flags() {
        let cli = Cli::parse_from([
            "toolrun",
            "run",
            "--root",
            "/repo",
            "--summary",
            "--timeout-secs",
            "5",
        ]);
        let Some(Command::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.location.root, Some(PathBuf::from("/repo")));
        assert!(args.summary);
        assert!(!args.strict);
        assert_eq!(args.timeout_secs, Some(5));
    }

    #[test]
    fn parse_list_with_config() {
        let cli = Cli::parse_from(["toolrun", "list", "--config", "scripts/tools.toml"]);
        let Some(Command::List(location)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(location.config, Some(PathBuf::from("scripts/tools.toml")));
    }

    #[test]
    fn flags_override_config_settings() {
        let cfg = RunnerSettings {
            summary: true,
            strict: false,
            timeout_secs: 60,
        };
        let args = RunArgs {
            strict: true,
            timeout_secs: Some(0),
            ..RunArgs::default()
        };
        let merged = effective_settings(&cfg, &args);
        assert!(merged.summary);
        assert!(merged.strict);
        assert_eq!(merged.timeout(), None);
    }

    #[test]
    fn explicit_root_wins_over_config_anchor() {
        let location = Location {
            config: Some(PathBuf::from("scripts/tools.toml")),
            root: Some(PathBuf::from("/repo")),
        };
        let source = root_source(&location).expect("source");
        assert!(matches!(source, RootSource::Explicit(ref path) if path == Path::new("/repo")));
    }
}
