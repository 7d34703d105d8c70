use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    pub date: String,
    pub actual: f64,
    pub predicted: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Defect,
    Yield,
    Rework,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetric {
    pub kind: MetricKind,
    pub metric: String,
    pub current: String,
    pub predicted: String,
    pub trend: Trend,
    pub confidence: u8,
}

/// Confidence at or above this percentage is shown as a success.
pub const CONFIDENCE_THRESHOLD: u8 = 80;

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Defect, MetricKind::Yield, MetricKind::Rework];

    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::Defect => "defect",
            MetricKind::Yield => "yield",
            MetricKind::Rework => "rework",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Defect => "Defect Rate",
            MetricKind::Yield => "First Pass Yield",
            MetricKind::Rework => "Rework Rate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl QualityMetric {
    pub fn is_confident(&self) -> bool {
        self.confidence >= CONFIDENCE_THRESHOLD
    }
}

/// Metrics of the given kind, or all of them.
pub fn select_metrics(metrics: &[QualityMetric], kind: Option<MetricKind>) -> Vec<&QualityMetric> {
    metrics
        .iter()
        .filter(|m| kind.map_or(true, |k| k == m.kind))
        .collect()
}

pub fn mock_prediction_points() -> Vec<PredictionPoint> {
    [
        ("2024-03-20", 95.0, 93.0),
        ("2024-03-21", 94.0, 92.0),
        ("2024-03-22", 93.0, 91.0),
        ("2024-03-23", 92.0, 90.0),
        ("2024-03-24", 91.0, 89.0),
        ("2024-03-25", 90.0, 88.0),
    ]
    .into_iter()
    .map(|(date, actual, predicted)| PredictionPoint {
        date: date.into(),
        actual,
        predicted,
    })
    .collect()
}

pub fn mock_quality_metrics() -> Vec<QualityMetric> {
    [
        (MetricKind::Defect, "2.5%", "2.8%", Trend::Up, 85),
        (MetricKind::Yield, "95.5%", "94.8%", Trend::Down, 82),
        (MetricKind::Rework, "3.2%", "3.5%", Trend::Up, 78),
    ]
    .into_iter()
    .map(|(kind, current, predicted, trend, confidence)| QualityMetric {
        kind,
        metric: kind.label().into(),
        current: current.into(),
        predicted: predicted.into(),
        trend,
        confidence,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rework_rate_is_below_confidence_threshold() {
        let metrics = mock_quality_metrics();
        let confident: Vec<bool> = metrics.iter().map(QualityMetric::is_confident).collect();

        assert_eq!(confident, vec![true, true, false]);
    }

    #[test]
    fn metric_selection_by_key() {
        let metrics = mock_quality_metrics();

        assert_eq!(select_metrics(&metrics, None).len(), 3);
        let selected = select_metrics(&metrics, MetricKind::from_key("yield"));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].metric, "First Pass Yield");
        assert_eq!(MetricKind::from_key("all"), None);
    }
}
