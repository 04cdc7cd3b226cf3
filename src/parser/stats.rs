use serde::Serialize;

/// Counters describing what one parse did with its fragments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Fragments fed to the controller
    pub fragments: u64,

    /// Condition markers seen (including repeats of a known condition)
    pub conditions: u64,

    /// Prices written to a record
    pub prices: u64,

    /// Prices discarded because the record already had one
    pub duplicate_prices: u64,

    pub return_policies: u64,
    pub delivery_options: u64,
    pub stock_notes: u64,

    /// Ships-from / sold-by markers seen
    pub continuation_markers: u64,

    /// Fragments consumed as continuation values
    pub continuation_values: u64,

    /// Fragments no classifier matched
    pub unrecognized: u64,

    /// Field-bearing fragments dropped for lack of a condition
    pub orphans_skipped: u64,

    /// Continuations still pending when the stream ended
    pub pending_discarded: u64,
}

impl ParseStats {
    /// Number of fragments that contributed something to a record
    pub fn matched(&self) -> u64 {
        self.fragments - self.unrecognized - self.orphans_skipped
    }

    /// Share of fragments that matched, as a percentage
    pub fn match_rate(&self) -> f64 {
        if self.fragments == 0 {
            return 0.0;
        }
        (self.matched() as f64 / self.fragments as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_rate() {
        let stats = ParseStats {
            fragments: 10,
            unrecognized: 2,
            orphans_skipped: 1,
            ..Default::default()
        };
        assert_eq!(stats.matched(), 7);
        assert!((stats.match_rate() - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_match_rate_zero_fragments() {
        assert_eq!(ParseStats::default().match_rate(), 0.0);
    }
}
