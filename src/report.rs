//! Batch classification with per-label counts.

use crate::size::{classify_with, SizeLabel, SizeThresholds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single classified input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub input: i64,
    pub label: SizeLabel,
}

/// Result of classifying a batch of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    pub thresholds: SizeThresholds,
    pub classifications: Vec<Classification>,
    /// Count per label; every label is present, in ascending order
    pub summary: BTreeMap<SizeLabel, usize>,
}

impl SizeReport {
    pub fn count(&self, label: SizeLabel) -> usize {
        self.summary.get(&label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }
}

/// Classify every input in order
pub fn classify_all(inputs: &[i64], thresholds: &SizeThresholds) -> SizeReport {
    let classifications: Vec<Classification> = inputs
        .iter()
        .map(|&input| Classification {
            input,
            label: classify_with(input, thresholds),
        })
        .collect();

    let summary = summarize(&classifications);
    log::debug!(
        "Classified {} values: {:?}",
        classifications.len(),
        summary
    );

    SizeReport {
        thresholds: *thresholds,
        classifications,
        summary,
    }
}

fn summarize(classifications: &[Classification]) -> BTreeMap<SizeLabel, usize> {
    let empty: BTreeMap<SizeLabel, usize> = SizeLabel::ALL.into_iter().map(|l| (l, 0)).collect();
    classifications.iter().fold(empty, |mut acc, c| {
        *acc.entry(c.label).or_insert(0) += 1;
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_all_preserves_order() {
        let report = classify_all(&[999, -1, 0], &SizeThresholds::default());
        let labels: Vec<_> = report.classifications.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![SizeLabel::Huge, SizeLabel::Negative, SizeLabel::Zero]
        );
    }

    #[test]
    fn test_summary_counts_every_label() {
        let report = classify_all(&[-3, -1, 0, 5, 7, 99, 999], &SizeThresholds::default());
        assert_eq!(report.count(SizeLabel::Negative), 2);
        assert_eq!(report.count(SizeLabel::Zero), 1);
        assert_eq!(report.count(SizeLabel::Small), 2);
        assert_eq!(report.count(SizeLabel::Big), 1);
        assert_eq!(report.count(SizeLabel::Huge), 1);
    }

    #[test]
    fn test_empty_input_has_zeroed_summary() {
        let report = classify_all(&[], &SizeThresholds::default());
        assert!(report.is_empty());
        assert_eq!(report.summary.len(), 5);
        assert!(report.summary.values().all(|&n| n == 0));
    }

    #[test]
    fn test_report_json_shape() {
        let report = classify_all(&[5], &SizeThresholds::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["classifications"][0]["label"], "small");
        assert_eq!(json["summary"]["small"], 1);
        assert_eq!(json["thresholds"]["big_below"], 100);
    }
}
