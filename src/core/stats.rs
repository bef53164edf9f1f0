use super::{Category, Priority};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate counters computed by the backend on each request
///
/// Missing fields decode to zero/empty. Older backends name the breakdowns
/// `priority_breakdown` and `category_breakdown`; both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSnapshot {
    pub total_tickets: u64,
    pub open_tickets: u64,
    /// Average days from creation to resolution
    pub avg_resolution_time: f64,
    #[serde(alias = "priority_breakdown")]
    pub tickets_by_priority: BTreeMap<Priority, u64>,
    #[serde(alias = "category_breakdown", skip_serializing_if = "Option::is_none")]
    pub tickets_by_category: Option<BTreeMap<Category, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_tickets_per_day: Option<f64>,
}

impl StatsSnapshot {
    /// Average resolution time rounded to two decimals
    pub fn rounded_avg_resolution_time(&self) -> f64 {
        round_2dp(self.avg_resolution_time)
    }
}

/// Round to two decimal places, halves away from zero
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_2dp() {
        assert_eq!(round_2dp(3.14159), 3.14);
        assert_eq!(round_2dp(2.0), 2.0);
        assert_eq!(round_2dp(0.125), 0.13);
        assert_eq!(round_2dp(0.0), 0.0);
    }

    #[test]
    fn test_decodes_partial_payload() {
        let stats: StatsSnapshot =
            serde_json::from_str(r#"{"total_tickets": 4, "tickets_by_priority": {"high": 2}}"#)
                .unwrap();
        assert_eq!(stats.total_tickets, 4);
        assert_eq!(stats.open_tickets, 0);
        assert_eq!(stats.avg_resolution_time, 0.0);
        assert_eq!(stats.tickets_by_priority.get(&Priority::High), Some(&2));
        assert!(stats.tickets_by_category.is_none());
    }

    #[test]
    fn test_accepts_breakdown_aliases() {
        let json = r#"{
            "total_tickets": 3,
            "open_tickets": 1,
            "avg_tickets_per_day": 1.5,
            "priority_breakdown": {"low": 1, "critical": 2},
            "category_breakdown": {"billing": 3}
        }"#;
        let stats: StatsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(stats.tickets_by_priority.len(), 2);
        assert_eq!(stats.tickets_by_priority[&Priority::Critical], 2);
        assert_eq!(
            stats.tickets_by_category.as_ref().and_then(|c| c.get(&Category::Billing)),
            Some(&3)
        );
        assert_eq!(stats.avg_tickets_per_day, Some(1.5));
    }
}
