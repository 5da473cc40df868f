//! Session-long tallies of form issues

use serde::{Deserialize, Serialize};

use crate::types::{FormIssue, Limb, PerLimb};

/// Monotonic issue counters for one limb
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounters {
    pub over_extending: u64,
    pub over_curling: u64,
    pub curl_higher: u64,
    pub extend_fully: u64,
}

impl IssueCounters {
    pub fn get(&self, issue: FormIssue) -> u64 {
        match issue {
            FormIssue::OverExtending => self.over_extending,
            FormIssue::OverCurling => self.over_curling,
            FormIssue::CurlHigher => self.curl_higher,
            FormIssue::ExtendFully => self.extend_fully,
        }
    }

    pub fn increment(&mut self, issue: FormIssue) {
        let slot = match issue {
            FormIssue::OverExtending => &mut self.over_extending,
            FormIssue::OverCurling => &mut self.over_curling,
            FormIssue::CurlHigher => &mut self.curl_higher,
            FormIssue::ExtendFully => &mut self.extend_fully,
        };
        *slot = slot.saturating_add(1);
    }

    /// All feedback events for this limb
    pub fn total(&self) -> u64 {
        FormIssue::ALL.iter().map(|issue| self.get(*issue)).sum()
    }
}

/// Aggregated history across the session, one set of counters per limb
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionHistory {
    pub counters: PerLimb<IssueCounters>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `issue` on `limb`
    pub fn record(&mut self, limb: Limb, issue: FormIssue) {
        self.counters[limb].increment(issue);
    }

    pub fn count(&self, limb: Limb, issue: FormIssue) -> u64 {
        self.counters[limb].get(issue)
    }

    /// Total feedback events on `limb`
    pub fn feedback_count(&self, limb: Limb) -> u64 {
        self.counters[limb].total()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_only_touches_one_slot() {
        let mut history = SessionHistory::new();
        history.record(Limb::Left, FormIssue::CurlHigher);
        history.record(Limb::Left, FormIssue::CurlHigher);
        history.record(Limb::Right, FormIssue::OverCurling);

        assert_eq!(history.count(Limb::Left, FormIssue::CurlHigher), 2);
        assert_eq!(history.count(Limb::Left, FormIssue::OverCurling), 0);
        assert_eq!(history.count(Limb::Right, FormIssue::OverCurling), 1);
        assert_eq!(history.feedback_count(Limb::Left), 2);
        assert_eq!(history.feedback_count(Limb::Right), 1);
    }

    #[test]
    fn test_counters_saturate() {
        let mut counters = IssueCounters {
            extend_fully: u64::MAX,
            ..Default::default()
        };
        counters.increment(FormIssue::ExtendFully);
        assert_eq!(counters.extend_fully, u64::MAX);
    }
}
