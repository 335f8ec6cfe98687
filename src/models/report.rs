use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ItemResult {
    Saved { bytes: u64 },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub filename: String,
    pub result: ItemResult,
}

impl ItemOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self.result, ItemResult::Saved { .. })
    }
}

/// On-disk state of one asset after the loop. `size` is `None` when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub filename: String,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
    pub summary: Vec<SummaryEntry>,
    pub pauses: usize,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }

    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.summary
            .iter()
            .filter(|entry| entry.size.is_none())
            .map(|entry| entry.filename.as_str())
    }
}

/// Integer-truncated kibibytes.
pub fn kib(bytes: u64) -> u64 {
    bytes / 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kib_truncates() {
        assert_eq!(kib(0), 0);
        assert_eq!(kib(1023), 0);
        assert_eq!(kib(1024), 1);
        assert_eq!(kib(2_621_439), 2559);
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            outcomes: vec![
                ItemOutcome {
                    filename: "a.png".into(),
                    result: ItemResult::Saved { bytes: 10 },
                },
                ItemOutcome {
                    filename: "b.png".into(),
                    result: ItemResult::Failed {
                        reason: "boom".into(),
                    },
                },
            ],
            summary: vec![
                SummaryEntry {
                    filename: "a.png".into(),
                    size: Some(10),
                },
                SummaryEntry {
                    filename: "b.png".into(),
                    size: None,
                },
            ],
            pauses: 1,
        };
        assert_eq!(report.saved(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.missing().collect::<Vec<_>>(), vec!["b.png"]);
    }
}
