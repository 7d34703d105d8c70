use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factory {
    pub id: String,
    pub name: String,
    pub status: FactoryStatus,
    pub last_inspection: String,
    pub alerts: u32,
    pub predictions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryStatus {
    Normal,
    Warning,
    Critical,
}

impl FactoryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FactoryStatus::Normal => "Normal",
            FactoryStatus::Warning => "Warning",
            FactoryStatus::Critical => "Critical",
        }
    }

    /// Bulma colour modifier for the status tag.
    pub fn color(&self) -> &'static str {
        match self {
            FactoryStatus::Normal => "is-success",
            FactoryStatus::Warning => "is-warning",
            FactoryStatus::Critical => "is-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FactoryStatus::Normal => "check_circle",
            FactoryStatus::Warning | FactoryStatus::Critical => "warning",
        }
    }
}

fn factory(
    id: &str,
    name: &str,
    status: FactoryStatus,
    last_inspection: &str,
    alerts: u32,
    predictions: u32,
) -> Factory {
    Factory {
        id: id.into(),
        name: name.into(),
        status,
        last_inspection: last_inspection.into(),
        alerts,
        predictions,
    }
}

pub fn mock_factories() -> Vec<Factory> {
    vec![
        factory("1", "Shanghai Factory A", FactoryStatus::Normal, "2024-03-15", 0, 2),
        factory("2", "Suzhou Factory B", FactoryStatus::Warning, "2024-03-14", 3, 1),
        factory("3", "Hangzhou Factory C", FactoryStatus::Critical, "2024-03-13", 5, 3),
    ]
}
