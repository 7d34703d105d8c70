use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Info,
    Warning,
    Error,
}

impl EntryKind {
    pub fn color(&self) -> &'static str {
        match self {
            EntryKind::Error => "#ff4d4f",
            EntryKind::Warning => "#faad14",
            EntryKind::Info => "#1890ff",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            EntryKind::Info => "[INFO]",
            EntryKind::Warning => "[WARNING]",
            EntryKind::Error => "[ERROR]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    pub id: u32,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub message: String,
    pub source: String,
}

/// Canned message the console generator picks from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryTemplate {
    pub kind: EntryKind,
    pub message: &'static str,
    pub source: &'static str,
}

const fn template(kind: EntryKind, message: &'static str, source: &'static str) -> EntryTemplate {
    EntryTemplate {
        kind,
        message,
        source,
    }
}

pub const ENTRY_TEMPLATES: [EntryTemplate; 10] = [
    template(EntryKind::Info, "FCCA audit checkpoint: Working hours compliance verified", "FCCA Audit System"),
    template(EntryKind::Warning, "Minor defect: Fire extinguisher inspection overdue by 3 days", "Safety Compliance"),
    template(EntryKind::Error, "Major defect: Emergency exit blocked in Building C", "Safety Audit"),
    template(EntryKind::Info, "Environmental compliance: Waste segregation standards met", "Environmental Audit"),
    template(EntryKind::Warning, "Minor defect: Personal protective equipment not properly stored", "Workplace Safety"),
    template(EntryKind::Error, "Critical defect: Chemical storage ventilation system malfunction", "Chemical Safety"),
    template(EntryKind::Info, "Labor standards verification: Break time compliance confirmed", "Labor Compliance"),
    template(EntryKind::Warning, "Finding: Training records incomplete for 3 operators", "Training Audit"),
    template(EntryKind::Error, "Major defect: First aid kit expired medications found", "Health & Safety"),
    template(EntryKind::Warning, "Observation: Housekeeping standards below expectation in Zone 2", "Facility Audit"),
];

const INITIAL_ENTRIES: [(&str, EntryKind, &str, &str); 6] = [
    ("2024-03-15 14:32:15", EntryKind::Info, "FCCA audit commenced - Facility assessment initiated", "FCCA Audit Team"),
    ("2024-03-15 14:31:42", EntryKind::Warning, "Minor defect: Worker break area lacks adequate seating", "Worker Welfare Audit"),
    ("2024-03-15 14:30:08", EntryKind::Error, "Major defect: Overtime records exceed regulatory limits", "Labor Standards"),
    ("2024-03-15 14:29:35", EntryKind::Info, "Compliance verified: Age verification documents complete", "Child Labor Prevention"),
    ("2024-03-15 14:28:12", EntryKind::Warning, "Finding: Machine safety guards require adjustment", "Machine Safety Audit"),
    ("2024-03-15 14:27:48", EntryKind::Error, "Critical defect: Electrical panel access obstructed", "Electrical Safety"),
];

/// Picks a template from a uniform sample in `[0, 1)`.
pub fn pick_template(sample: f64) -> &'static EntryTemplate {
    let index = (sample * ENTRY_TEMPLATES.len() as f64).floor() as usize;

    &ENTRY_TEMPLATES[index.min(ENTRY_TEMPLATES.len() - 1)]
}

/// Entries shown by the system console, optionally capped to the most recent ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLog {
    entries: VecDeque<ConsoleEntry>,
    next_id: u32,
    limit: Option<usize>,
}

impl ConsoleLog {
    pub fn new(limit: Option<usize>) -> Self {
        let mut log = Self {
            entries: VecDeque::new(),
            next_id: 1,
            limit,
        };

        for (time, kind, message, source) in INITIAL_ENTRIES {
            log.push(kind, time.into(), message.into(), source.into());
        }

        log
    }

    pub fn entries(&self) -> impl Iterator<Item = &ConsoleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn push_template(&mut self, template: &EntryTemplate, time: String) -> &ConsoleEntry {
        self.push(
            template.kind,
            time,
            template.message.into(),
            template.source.into(),
        )
    }

    fn push(&mut self, kind: EntryKind, time: String, message: String, source: String) -> &ConsoleEntry {
        self.entries.push_back(ConsoleEntry {
            id: self.next_id,
            time,
            kind,
            message,
            source,
        });
        self.next_id += 1;

        if let Some(limit) = self.limit {
            while self.entries.len() > limit.max(1) {
                self.entries.pop_front();
            }
        }

        &self.entries[self.entries.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_six_entries() {
        let log = ConsoleLog::new(None);

        assert_eq!(log.len(), 6);
        assert_eq!(log.next_id(), 7);
        assert_eq!(log.entries().next().map(|e| e.source.as_str()), Some("FCCA Audit Team"));
    }

    #[test]
    fn generated_entries_continue_numbering() {
        let mut log = ConsoleLog::new(None);
        let entry = log
            .push_template(pick_template(0.25), "2024-03-15 15:00:00".into())
            .clone();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.kind, EntryKind::Error);
        assert_eq!(entry.source, "Safety Audit");
        assert_eq!(log.len(), 7);
    }

    #[test]
    fn pick_covers_both_ends() {
        assert_eq!(pick_template(0.0).source, "FCCA Audit System");
        assert_eq!(pick_template(0.999).source, "Facility Audit");
        assert_eq!(pick_template(1.0).source, "Facility Audit");
    }

    #[test]
    fn limit_drops_oldest_entries() {
        let mut log = ConsoleLog::new(Some(4));

        assert_eq!(log.len(), 4);
        log.push_template(&ENTRY_TEMPLATES[0], "now".into());

        let ids: Vec<u32> = log.entries().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);
    }

    #[test]
    fn kind_serializes_as_type() {
        let log = ConsoleLog::new(None);
        let json = serde_json::to_value(log.entries().next().unwrap()).unwrap();

        assert_eq!(json["type"], serde_json::json!("info"));
    }
}
