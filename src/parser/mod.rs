//! Parser module: from fragment stream to offer records
//!
//! This module contains the single-pass controller and the entry points used
//! by the CLI and by library callers:
//! - `parse_fragments` returns the ordered offer records
//! - `parse_report` additionally returns parse statistics and run metadata
//!
//! A parse holds no shared state; independent streams can be parsed in
//! parallel against the same configuration.

mod controller;
mod pending;
mod stats;

pub use controller::Controller;
pub use pending::PendingFields;
pub use stats::ParseStats;

use crate::config::Config;
use crate::fragment::Fragment;
use crate::offer::OfferRecord;
use crate::ParseResult;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Result of parsing one buybox, with the metadata needed to reproduce it
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// Locale whose marker table was used
    pub locale: String,

    /// SHA-256 of the configuration file, if one was loaded
    pub config_hash: Option<String>,

    /// RFC 3339 UTC timestamp of the parse
    pub parsed_at: String,

    pub stats: ParseStats,

    /// One record per condition, in first-seen order
    pub offers: Vec<OfferRecord>,
}

/// Parses a fragment stream into offer records
///
/// # Arguments
///
/// * `fragments` - The buybox fragments, in document order
/// * `config` - Locale markers and parser behaviour
///
/// # Returns
///
/// * `Ok(Vec<OfferRecord>)` - One record per condition, in first-seen order
/// * `Err(ParseError)` - Offer data appeared before any condition marker
///
/// # Example
///
/// ```
/// use buybox_parser::{parse_fragments, Config, Fragment};
///
/// let fragments = vec![
///     Fragment::unlabeled("New:"),
///     Fragment::unlabeled("49\n€99"),
///     Fragment::unlabeled("In stock"),
/// ];
/// let offers = parse_fragments(&fragments, &Config::default()).unwrap();
/// assert_eq!(offers[0].price.as_deref(), Some("49.99"));
/// ```
pub fn parse_fragments(fragments: &[Fragment], config: &Config) -> ParseResult<Vec<OfferRecord>> {
    Ok(run(fragments, config)?.0)
}

/// Parses a fragment stream and wraps the records into a `ParseReport`
pub fn parse_report(
    fragments: &[Fragment],
    config: &Config,
    config_hash: Option<String>,
) -> ParseResult<ParseReport> {
    let (offers, stats) = run(fragments, config)?;

    tracing::info!(
        "Parsed {} fragments into {} offer(s) ({:.1}% matched)",
        stats.fragments,
        offers.len(),
        stats.match_rate()
    );

    Ok(ParseReport {
        locale: config.locale.name.clone(),
        config_hash,
        parsed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        stats,
        offers,
    })
}

fn run(fragments: &[Fragment], config: &Config) -> ParseResult<(Vec<OfferRecord>, ParseStats)> {
    let mut controller = Controller::new(config);
    for fragment in fragments {
        controller.feed(fragment)?;
    }
    Ok(controller.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;

    fn fragments(texts: &[&str]) -> Vec<Fragment> {
        texts.iter().map(|t| Fragment::unlabeled(*t)).collect()
    }

    #[test]
    fn test_parse_report_metadata() {
        let report = parse_report(
            &fragments(&["New:", "49\n€99"]),
            &Config::default(),
            Some("abc".to_string()),
        )
        .unwrap();

        assert_eq!(report.locale, "en");
        assert_eq!(report.config_hash.as_deref(), Some("abc"));
        assert!(report.parsed_at.ends_with('Z'));
        assert_eq!(report.stats.fragments, 2);
        assert_eq!(report.offers.len(), 1);
    }

    #[test]
    fn test_parse_fragments_propagates_orphan_error() {
        let result = parse_fragments(&fragments(&["Returns FREE"]), &Config::default());
        assert!(matches!(
            result,
            Err(ParseError::NoActiveCondition { index: 0, .. })
        ));
    }

    #[test]
    fn test_independent_streams_parse_in_parallel() {
        let config = Config::default();
        let config = &config;
        let streams = vec![
            fragments(&["New:", "10\n€00"]),
            fragments(&["Used – Good", "8\n€50"]),
        ];

        let prices: Vec<Option<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = streams
                .iter()
                .map(|stream| scope.spawn(move || parse_fragments(stream, config).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap()[0].price.clone())
                .collect()
        });

        assert_eq!(
            prices,
            vec![Some("10.00".to_string()), Some("8.50".to_string())]
        );
    }
}
