//! Human-readable parse statistics

use crate::parser::ParseStats;

/// Formats parse statistics as an aligned plain-text block
pub fn format_statistics(stats: &ParseStats) -> String {
    let rows = [
        ("Fragments", stats.fragments),
        ("Conditions", stats.conditions),
        ("Prices", stats.prices),
        ("Duplicate prices ignored", stats.duplicate_prices),
        ("Free returns notes", stats.return_policies),
        ("Delivery options", stats.delivery_options),
        ("Stock notes", stats.stock_notes),
        ("Continuation markers", stats.continuation_markers),
        ("Continuation values", stats.continuation_values),
        ("Unrecognized fragments", stats.unrecognized),
        ("Orphan fragments skipped", stats.orphans_skipped),
        ("Pending continuations dropped", stats.pending_discarded),
    ];

    let mut text = String::from("=== Parse Statistics ===\n\n");
    for (name, value) in rows {
        text.push_str(&format!("  {:<30} {}\n", format!("{}:", name), value));
    }
    text.push_str(&format!(
        "\n  {:<30} {:.2}%\n",
        "Match rate:",
        stats.match_rate()
    ));
    text
}

/// Prints parse statistics to stderr, keeping stdout for the report
pub fn print_statistics(stats: &ParseStats) {
    eprint!("{}", format_statistics(stats));
}
