//! CLI notice formatting.
//!
//! Each command has a `format_*` function that turns a result value into
//! plain lines, and a `print_*` wrapper that writes them to stdout. Format
//! functions are pure — no I/O — so the exact notices are unit-testable.

use crate::generate::Generated;
use crate::publish::{Outcome, PublishError};

/// Lines reporting what a generator run did.
pub fn format_generated(result: &Generated) -> Vec<String> {
    match result {
        Generated::DryRun {
            week_index,
            title,
            path,
        } => vec![
            format!("[dry-run] Week index: {week_index}"),
            format!("[dry-run] Topic: {title}"),
            format!("[dry-run] Target file: {}", path.display()),
        ],
        Generated::SkippedExistingFile { path } => {
            vec![format!("Post already exists: {}", path.display())]
        }
        Generated::SkippedExistingTitle { title } => {
            vec![format!("Post with this title already exists: {title}")]
        }
        Generated::Created { path } => vec![format!("Created: {}", path.display())],
    }
}

pub fn print_generated(result: &Generated) {
    for line in format_generated(result) {
        println!("{line}");
    }
}

/// One-line report for a single platform's publish attempt.
pub fn format_publish_result(
    platform: &str,
    result: &Result<Outcome, PublishError>,
) -> String {
    match result {
        Ok(Outcome::Skipped(reason)) => format!("[{platform}] Skipped: {reason}"),
        Ok(Outcome::DryRun(plan)) => format!("[{platform}] Dry run: {plan}"),
        Ok(Outcome::Published { status, snippet }) => {
            format!("[{platform}] Published (status={status}): {snippet}")
        }
        Err(err) => format!("[{platform}] Failed: {err}"),
    }
}

pub fn print_publish_result(platform: &str, result: &Result<Outcome, PublishError>) {
    println!("{}", format_publish_result(platform, result));
}
