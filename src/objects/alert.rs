use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub factory: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub level: AlertLevel,
    pub message: String,
    pub time: String,
    pub status: AlertStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertType {
    Safety,
    Quality,
    Environment,
    Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Processing,
    Resolved,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::Safety,
        AlertType::Quality,
        AlertType::Environment,
        AlertType::Operation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertType::Safety => "Safety",
            AlertType::Quality => "Quality",
            AlertType::Environment => "Environment",
            AlertType::Operation => "Operation",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlertType::Safety => "is-danger",
            AlertType::Quality => "is-warning",
            AlertType::Environment => "is-info",
            AlertType::Operation => "is-link",
        }
    }
}

impl AlertLevel {
    pub const ALL: [AlertLevel; 3] = [AlertLevel::Info, AlertLevel::Warning, AlertLevel::Critical];

    pub fn key(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::Info => "Info",
            AlertLevel::Warning => "Warning",
            AlertLevel::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlertLevel::Info => "is-info",
            AlertLevel::Warning => "is-warning",
            AlertLevel::Critical => "is-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning | AlertLevel::Critical => "warning",
        }
    }
}

impl AlertStatus {
    pub const ALL: [AlertStatus; 3] = [
        AlertStatus::Pending,
        AlertStatus::Processing,
        AlertStatus::Resolved,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "pending",
            AlertStatus::Processing => "processing",
            AlertStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "Pending",
            AlertStatus::Processing => "Processing",
            AlertStatus::Resolved => "Resolved",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AlertStatus::Pending => "is-danger",
            AlertStatus::Processing => "is-warning",
            AlertStatus::Resolved => "is-success",
        }
    }
}

/// Select value standing for "no restriction".
pub const FILTER_ALL: &str = "all";

/// Restriction applied to the alert table; `None` on a field matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFilter {
    pub alert_type: Option<AlertType>,
    pub level: Option<AlertLevel>,
    pub status: Option<AlertStatus>,
}

impl AlertFilter {
    pub fn matches(&self, alert: &Alert) -> bool {
        self.alert_type.map_or(true, |t| t == alert.alert_type)
            && self.level.map_or(true, |l| l == alert.level)
            && self.status.map_or(true, |s| s == alert.status)
    }

    pub fn apply<'a>(&self, alerts: &'a [Alert]) -> Vec<&'a Alert> {
        alerts.iter().filter(|a| self.matches(a)).collect()
    }

    pub fn set_type_key(&mut self, key: &str) {
        self.alert_type = AlertType::ALL.into_iter().find(|t| t.label() == key);
    }

    pub fn set_level_key(&mut self, key: &str) {
        self.level = AlertLevel::ALL.into_iter().find(|l| l.key() == key);
    }

    pub fn set_status_key(&mut self, key: &str) {
        self.status = AlertStatus::ALL.into_iter().find(|s| s.key() == key);
    }
}

fn alert(
    id: &str,
    factory: &str,
    alert_type: AlertType,
    level: AlertLevel,
    message: &str,
    time: &str,
    status: AlertStatus,
) -> Alert {
    Alert {
        id: id.into(),
        factory: factory.into(),
        alert_type,
        level,
        message: message.into(),
        time: time.into(),
        status,
    }
}

pub fn mock_alerts() -> Vec<Alert> {
    vec![
        alert(
            "1",
            "Shanghai Factory A",
            AlertType::Safety,
            AlertLevel::Critical,
            "Detected personnel without safety helmet",
            "2024-03-15 10:30:00",
            AlertStatus::Pending,
        ),
        alert(
            "2",
            "Suzhou Factory B",
            AlertType::Quality,
            AlertLevel::Warning,
            "Product pass rate below standard",
            "2024-03-15 09:15:00",
            AlertStatus::Processing,
        ),
        alert(
            "3",
            "Hangzhou Factory C",
            AlertType::Environment,
            AlertLevel::Info,
            "Temperature out of normal range",
            "2024-03-15 08:45:00",
            AlertStatus::Resolved,
        ),
    ]
}

pub const DRAFT_ALERT_TYPES: [&str; 3] = ["Safety", "Quality", "Equipment"];
pub const DRAFT_SEVERITIES: [&str; 3] = ["High", "Medium", "Low"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    AlertType,
    Severity,
    Location,
    Description,
}

impl DraftField {
    pub fn required_message(&self) -> &'static str {
        match self {
            DraftField::AlertType => "Please select alert type",
            DraftField::Severity => "Please select severity",
            DraftField::Location => "Please enter location",
            DraftField::Description => "Please enter description",
        }
    }
}

/// Raw contents of the "Add Alert" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDraft {
    pub alert_type: String,
    pub severity: String,
    pub location: String,
    pub description: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: String,
    pub location: String,
    pub description: String,
}

impl AlertDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::AlertType => self.alert_type = value,
            DraftField::Severity => self.severity = value,
            DraftField::Location => self.location = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Every field is required; selections must be one of the offered options.
    pub fn validate(&self) -> Result<NewAlert, Vec<DraftField>> {
        let mut missing = Vec::new();

        if !DRAFT_ALERT_TYPES.contains(&self.alert_type.as_str()) {
            missing.push(DraftField::AlertType);
        }
        if !DRAFT_SEVERITIES.contains(&self.severity.as_str()) {
            missing.push(DraftField::Severity);
        }
        if self.location.trim().is_empty() {
            missing.push(DraftField::Location);
        }
        if self.description.trim().is_empty() {
            missing.push(DraftField::Description);
        }

        match missing.is_empty() {
            true => Ok(NewAlert {
                alert_type: self.alert_type.clone(),
                severity: self.severity.clone(),
                location: self.location.trim().into(),
                description: self.description.trim().into(),
            }),
            false => Err(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_all_alerts() {
        let alerts = mock_alerts();

        assert_eq!(AlertFilter::default().apply(&alerts).len(), 3);
    }

    #[test]
    fn filter_combines_restrictions() {
        let alerts = mock_alerts();
        let mut filter = AlertFilter::default();

        filter.set_type_key("Quality");
        assert_eq!(filter.apply(&alerts).len(), 1);
        assert_eq!(filter.apply(&alerts)[0].id, "2");

        filter.set_status_key("resolved");
        assert!(filter.apply(&alerts).is_empty());

        filter.set_type_key(FILTER_ALL);
        assert_eq!(filter.alert_type, None);
        assert_eq!(filter.apply(&alerts)[0].id, "3");
    }

    #[test]
    fn level_filter_uses_lowercase_keys() {
        let alerts = mock_alerts();
        let mut filter = AlertFilter::default();

        filter.set_level_key("critical");
        let matched = filter.apply(&alerts);

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].factory, "Shanghai Factory A");
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let missing = AlertDraft::default().validate().unwrap_err();

        assert_eq!(
            missing,
            vec![
                DraftField::AlertType,
                DraftField::Severity,
                DraftField::Location,
                DraftField::Description
            ]
        );
        assert_eq!(missing[2].required_message(), "Please enter location");
    }

    #[test]
    fn complete_draft_is_trimmed() {
        let mut draft = AlertDraft::default();

        draft.set(DraftField::AlertType, "Equipment".into());
        draft.set(DraftField::Severity, "High".into());
        draft.set(DraftField::Location, " Line 2 ".into());
        draft.set(DraftField::Description, "Conveyor belt stalled".into());

        let alert = draft.validate().unwrap();

        assert_eq!(alert.location, "Line 2");
        assert_eq!(
            serde_json::to_value(&alert).unwrap()["type"],
            serde_json::json!("Equipment")
        );
    }

    #[test]
    fn unknown_severity_is_rejected() {
        let draft = AlertDraft {
            alert_type: "Safety".into(),
            severity: "Extreme".into(),
            location: "Gate".into(),
            description: "Open".into(),
        };

        assert_eq!(draft.validate().unwrap_err(), vec![DraftField::Severity]);
    }
}
