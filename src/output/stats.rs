//! Scan summary reporting.

use console::style;

use crate::config::ScanMode;
use crate::error::Result;
use crate::output::console::print_rule;
use crate::scan::ScanReport;

/// Print the end-of-run result block.
pub fn print_scan_summary(report: &ScanReport) {
    let verb = match report.mode {
        ScanMode::Fix => "REMOVED",
        ScanMode::Report => "FOUND",
    };

    println!();
    print_rule('=');
    if report.total_removed() > 0 {
        println!(
            "{}",
            style(format!("RESULT: {} {} DUPLICATE(S)", verb, report.total_removed()))
                .yellow()
                .bold()
        );
    } else {
        println!("{}", style("RESULT: NO DUPLICATES FOUND").green().bold());
    }
    println!("  Files checked: {}", report.files_checked());
    println!("  Within files:  {}", report.removed_within());
    println!("  Across files:  {}", report.removed_cross());
    if report.error_count() > 0 {
        println!("  Errors:        {}", style(report.error_count()).red());
    }
    print_rule('=');

    if report.backups().next().is_some() {
        println!();
        println!("Backup files have been created:");
        for backup in report.backups() {
            println!("  {}", backup.display());
        }
        println!("Please review the changes before committing.");
    }
}

/// Print the report as pretty JSON.
pub fn print_json_report(report: &ScanReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Banner line naming what blocked the commit.
pub fn blocked_reason(report: &ScanReport) -> String {
    let duplicates = report.total_removed() > 0;
    let errors = report.error_count();

    match (duplicates, errors) {
        (true, 0) => "COMMIT BLOCKED: Duplicates detected!".to_string(),
        (true, n) => format!(
            "COMMIT BLOCKED: Duplicates detected and {} file(s) could not be processed!",
            n
        ),
        (false, n) => format!("COMMIT BLOCKED: {} file(s) could not be processed!", n),
    }
}

/// Print why the commit was blocked and how to get past the gate.
pub fn print_commit_blocked(report: &ScanReport) {
    println!();
    print_rule('=');
    println!("{}", style(blocked_reason(report)).red().bold());
    print_rule('=');
    println!();
    if report.total_removed() > 0 {
        println!("Review the cleaned files, stage them with `git add`, and commit again.");
    }
    if report.error_count() > 0 {
        println!("Fix the unreadable files listed above and commit again.");
    }
    println!("To bypass this check (not recommended), use: git commit --no-verify");
}

/// Print the all-clear for the commit.
pub fn print_commit_allowed() {
    println!();
    println!(
        "{}",
        style("No duplicates found. Proceeding with commit...").green()
    );
}
