//! Console output utilities.

use console::style;

/// Width of the rules framing headers and results.
const RULE_WIDTH: usize = 60;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a horizontal rule.
pub fn print_rule(ch: char) {
    println!("{}", style(ch.to_string().repeat(RULE_WIDTH)).dim());
}

/// Print a framed section header.
pub fn print_header(title: &str) {
    print_rule('=');
    println!("{}", style(title).cyan().bold());
    print_rule('=');
    println!();
}

/// Print configuration summary.
pub fn print_config_summary(data_dir: &str, master_file: &str, mode: &str) {
    println!("{}", style("Configuration:").bold());
    println!("  Data directory: {}", data_dir);
    println!("  Master file:    {}", master_file);
    println!("  Mode:           {}", mode);
    println!();
}
