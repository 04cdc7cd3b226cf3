//! Markdown report generation
//!
//! Renders one table row per offer followed by a delivery-options section,
//! suitable for pasting into notes or issue trackers.

use crate::offer::OfferRecord;
use crate::output::traits::{OutputResult, OutputWriter};
use crate::parser::ParseReport;
use std::io::Write;

/// Writes the report as a markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWriter;

impl OutputWriter for MarkdownWriter {
    fn write_report(&self, report: &ParseReport, out: &mut dyn Write) -> OutputResult<()> {
        out.write_all(format_markdown_report(report).as_bytes())?;
        Ok(())
    }
}

/// Formats a parse report as markdown
pub fn format_markdown_report(report: &ParseReport) -> String {
    let mut md = String::new();

    md.push_str("# Buybox Offers\n\n");
    md.push_str(&format!("- **Locale**: {}\n", report.locale));
    md.push_str(&format!("- **Parsed at**: {}\n", report.parsed_at));
    if let Some(hash) = &report.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push_str(&format!(
        "- **Fragments**: {} ({:.2}% matched)\n\n",
        report.stats.fragments,
        report.stats.match_rate()
    ));

    if report.offers.is_empty() {
        md.push_str("_No offers found._\n");
        return md;
    }

    md.push_str("## Offers\n\n");
    md.push_str("| Condition | Price | Free Returns | Ships From | Sold By | Stock |\n");
    md.push_str("|-----------|-------|--------------|------------|---------|-------|\n");
    for offer in &report.offers {
        md.push_str(&format_offer_row(offer));
    }
    md.push('\n');

    let with_delivery: Vec<&OfferRecord> = report
        .offers
        .iter()
        .filter(|offer| !offer.delivery_options.is_empty())
        .collect();

    if !with_delivery.is_empty() {
        md.push_str("## Delivery Options\n\n");
        for offer in with_delivery {
            md.push_str(&format!("### {}\n\n", escape_cell(&offer.condition)));
            for option in &offer.delivery_options {
                md.push_str(&format!("- {}: {}\n", option.kind, option.eta));
            }
            md.push('\n');
        }
    }

    md
}

fn format_offer_row(offer: &OfferRecord) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} |\n",
        escape_cell(&offer.condition),
        offer.price.as_deref().map(escape_cell).unwrap_or_else(dash),
        if offer.return_policy == Some(true) {
            "yes"
        } else {
            "-"
        },
        offer.ship_from.as_deref().map(escape_cell).unwrap_or_else(dash),
        offer.sold_by.as_deref().map(escape_cell).unwrap_or_else(dash),
        if offer.stock_parsed() {
            escape_cell(&offer.stock_status)
        } else {
            dash()
        },
    )
}

fn dash() -> String {
    "-".to_string()
}

/// Keeps free text from breaking the table layout
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
