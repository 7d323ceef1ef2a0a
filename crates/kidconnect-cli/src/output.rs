//! Operator-facing run output.

use console::{style, Emoji};
use kidconnect_dispatch::{BroadcastSummary, DispatchOutcome};

static CHECK: Emoji = Emoji("✓", "+");
static CROSS: Emoji = Emoji("✗", "x");
static SKIP: Emoji = Emoji("⚠", "!");

/// Print one line per recipient, then the totals.
pub fn print_summary(summary: &BroadcastSummary) {
    for outcome in &summary.outcomes {
        print_outcome(outcome);
    }

    if summary.is_empty() {
        println!("No recipients to message.");
        return;
    }

    println!(
        "\nSent {} message(s); {} skipped, {} failed.",
        style(summary.sent).bold(),
        summary.skipped(),
        summary.failed()
    );
}

fn print_outcome(outcome: &DispatchOutcome) {
    let marker = if outcome.is_sent() {
        style(CHECK).green()
    } else if outcome.is_failure() {
        style(CROSS).red()
    } else {
        style(SKIP).yellow()
    };
    println!("  {} {}", marker, outcome);
}
