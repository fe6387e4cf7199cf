//! wordlist-dedup - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use wordlist_dedup::{
    cli::{Args, Command},
    config::{validate_config, Config},
    error::{exit_codes, Error, Result},
    gate::{install_hook, run_gate, GateOutcome, GitIndex},
    output::{
        print_commit_allowed, print_commit_blocked, print_config_summary, print_error,
        print_header, print_json_report, print_scan_summary, print_success, print_warning,
    },
    scan::{run_scan, ScanReport},
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Git(_) | Error::HookExists(_) => {
                    ExitCode::from(exit_codes::GIT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout is reserved for the report
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let root = args.root()?;
    let (config_path, explicit) = args.config_path(&root);
    let mut config = if explicit || config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!("No configuration file at {}", config_path.display());
        Config::default()
    };
    config.root = root;

    // Merge CLI arguments into config
    let command = args.command();
    let json = args.json;
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    match command {
        Command::Check => check(&config, json),
        Command::Hook => hook(&config, json),
        Command::Init { force } => {
            if config_path.exists() && !force {
                return Err(Error::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                )));
            }
            config.save(&config_path)?;
            print_success(&format!("Wrote configuration: {}", config_path.display()));
            Ok(exit_codes::SUCCESS)
        }
        Command::InstallHook { force } => {
            let hooks_dir = GitIndex::new(&config.root).hooks_dir()?;
            let path = install_hook(&hooks_dir, force)?;
            print_success(&format!("Installed pre-commit hook: {}", path.display()));
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Full scan; duplicates are reported, never turned into a failing exit code.
fn check(config: &Config, json: bool) -> Result<i32> {
    if !config.options.quiet {
        print_header("WORDLIST DUPLICATION CHECK");
        print_config_summary(
            &config.wordlists.data_dir.display().to_string(),
            &config.wordlists.master_file,
            &config.options.mode.to_string(),
        );
    }

    let report = run_scan(config)?;
    finish_report(&report, json)?;
    Ok(exit_codes::SUCCESS)
}

/// Commit gate.
fn hook(config: &Config, json: bool) -> Result<i32> {
    let outcome = run_gate(config, &GitIndex::new(&config.root))?;

    match &outcome {
        GateOutcome::Skipped => {}
        GateOutcome::Passed(report) => {
            finish_report(report, json)?;
            if !json {
                print_commit_allowed();
            }
        }
        GateOutcome::Blocked(report) => {
            finish_report(report, json)?;
            if !json {
                print_commit_blocked(report);
            }
        }
    }

    if outcome.allows_commit() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::COMMIT_BLOCKED)
    }
}

fn finish_report(report: &ScanReport, json: bool) -> Result<()> {
    if json {
        return print_json_report(report);
    }

    if report.error_count() > 0 {
        print_warning(&format!(
            "{} file(s) could not be processed",
            report.error_count()
        ));
    }
    print_scan_summary(report);
    Ok(())
}
