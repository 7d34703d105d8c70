use crate::{
    components::{ChartSeries, Icon, IconStyle, LineChart, StatCard},
    objects::prediction::{
        mock_prediction_points, mock_quality_metrics, select_metrics, MetricKind, PredictionPoint,
        QualityMetric, Trend,
    },
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub struct PredictionsPage {
    points: Vec<PredictionPoint>,
    metrics: Vec<QualityMetric>,
    selected: Option<MetricKind>,
}

pub enum Message {
    SelectMetric(String),
}

pub fn prediction_series(points: &[PredictionPoint]) -> Vec<ChartSeries> {
    vec![
        ChartSeries::line("Actual", "#1890ff", points.iter().map(|p| p.actual).collect()),
        ChartSeries::line("Predicted", "#faad14", points.iter().map(|p| p.predicted).collect()),
    ]
}

impl PredictionsPage {
    fn view_metric(&self, metric: &QualityMetric) -> Html {
        let (trend_icon, trend_color) = match metric.trend {
            Trend::Up => ("arrow_upward", "#cf1322"),
            Trend::Down => ("arrow_downward", "#3f8600"),
        };
        let bar = match metric.is_confident() {
            true => "is-success",
            false => "is-warning",
        };

        html! {
            <tr key={metric.kind.key()}>
                <td>{&metric.metric}</td>
                <td>{&metric.current}</td>
                <td>{&metric.predicted}</td>
                <td><Icon name={trend_icon} style={IconStyle::Filled} color={trend_color.to_string()}/></td>
                <td>
                    <progress class={classes!("progress", "is-small", bar)} value={metric.confidence.to_string()} max="100">
                        {format!("{}%", metric.confidence)}
                    </progress>
                </td>
            </tr>
        }
    }
}

impl Component for PredictionsPage {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            points: mock_prediction_points(),
            metrics: mock_quality_metrics(),
            selected: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::SelectMetric(key) => {
                self.selected = MetricKind::from_key(&key);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let labels: Vec<String> = self.points.iter().map(|p| p.date.clone()).collect();

        html! {
            <>
                <div class="level">
                    <div class="level-left"><p class="title is-4">{"Quality Prediction Analysis"}</p></div>
                    <div class="level-right">
                        <div class="select">
                            <select aria-label="metric" onchange={ctx.link().callback(|e: Event| Message::SelectMetric(e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                                <option value="">{"All Metrics"}</option>
                                { MetricKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.key()}>{kind.label()}</option>
                                }).collect::<Html>() }
                            </select>
                        </div>
                    </div>
                </div>
                <div class="columns">
                    <div class="column"><StatCard title="Prediction Accuracy" value="92.5" suffix="%" icon="trending_up" color="#3f8600"/></div>
                    <div class="column"><StatCard title="Model Confidence" value="85.3" suffix="%" icon="verified" color="#1890ff"/></div>
                    <div class="column"><StatCard title="Data Points" value="12500" icon="dataset"/></div>
                </div>
                <div class="box">
                    <p class="heading">{"Quality Trend Prediction"}</p>
                    <LineChart labels={labels} series={prediction_series(&self.points)} unit="%"/>
                </div>
                <div class="box">
                    <p class="heading">{"Detailed Metrics"}</p>
                    <table class="table is-fullwidth">
                        <thead>
                            <tr>
                                <th>{"Metric"}</th>
                                <th>{"Current"}</th>
                                <th>{"Predicted"}</th>
                                <th>{"Trend"}</th>
                                <th>{"Confidence"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { select_metrics(&self.metrics, self.selected).into_iter().map(|m| self.view_metric(m)).collect::<Html>() }
                        </tbody>
                    </table>
                </div>
            </>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_actual_and_predicted() {
        let series = prediction_series(&mock_prediction_points());

        assert_eq!(series[0].name, "Actual");
        assert_eq!(series[0].values.first(), Some(&95.0));
        assert_eq!(series[1].values.last(), Some(&88.0));
    }
}
