use yew::prelude::*;

const WIDTH: f64 = 600.0;
const PADDING: f64 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
    /// Draws the area below the line.
    pub filled: bool,
}

impl ChartSeries {
    pub fn line(name: &str, color: &str, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
            filled: false,
        }
    }

    pub fn area(name: &str, color: &str, values: Vec<f64>) -> Self {
        Self {
            filled: true,
            ..Self::line(name, color, values)
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    #[prop_or(240.0)]
    pub height: f64,
    #[prop_or_default]
    pub unit: Option<String>,
}

/// Minimal SVG line chart with a shared y axis for all series.
pub struct LineChart {}

/// Smallest and largest value over all series; a flat range is widened by one on each side.
pub fn value_bounds(series: &[ChartSeries]) -> Option<(f64, f64)> {
    let mut values = series.iter().flat_map(|s| s.values.iter().copied());
    let first = values.next()?;
    let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));

    match (max - min).abs() < f64::EPSILON {
        true => Some((min - 1.0, max + 1.0)),
        false => Some((min, max)),
    }
}

/// Maps values onto the drawing area; the first value sits on the left edge, the last on the right.
pub fn scale_points(values: &[f64], bounds: (f64, f64), width: f64, height: f64) -> Vec<(f64, f64)> {
    let (min, max) = bounds;
    let step = match values.len() {
        0 | 1 => 0.0,
        n => (width - 2.0 * PADDING) / (n - 1) as f64,
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PADDING + step * i as f64;
            let y = height - PADDING - (v - min) / (max - min) * (height - 2.0 * PADDING);
            (x, y)
        })
        .collect()
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<String>>()
        .join(" ")
}

impl LineChart {
    fn view_series(&self, series: &ChartSeries, bounds: (f64, f64), height: f64) -> Html {
        let points = scale_points(&series.values, bounds, WIDTH, height);
        let area = match (series.filled, points.first(), points.last()) {
            (true, Some(first), Some(last)) => {
                let mut outline = points.clone();
                outline.push((last.0, height - PADDING));
                outline.push((first.0, height - PADDING));
                html! {<polygon points={points_attr(&outline)} fill={series.color.clone()} fill-opacity="0.3" stroke="none"/>}
            }
            (_, _, _) => html! {},
        };

        html! {
            <g>
                {area}
                <polyline points={points_attr(&points)} fill="none" stroke={series.color.clone()} stroke-width="2"/>
                { points.iter().map(|(x, y)| html! {
                    <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="3" fill={series.color.clone()}/>
                }).collect::<Html>() }
            </g>
        }
    }
}

impl Component for LineChart {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let height = props.height;
        let bounds = match value_bounds(&props.series) {
            Some(bounds) => bounds,
            None => return html! {<p class="has-text-grey">{"no data"}</p>},
        };
        let unit = props.unit.clone().unwrap_or_default();
        let label_points = scale_points(&vec![bounds.0; props.labels.len()], bounds, WIDTH, height);

        html! {
            <div>
                <svg viewBox={format!("0 0 {} {}", WIDTH, height)} width="100%" preserveAspectRatio="none">
                    <line x1={PADDING.to_string()} y1={(height - PADDING).to_string()} x2={(WIDTH - PADDING).to_string()} y2={(height - PADDING).to_string()} stroke="#d9d9d9" stroke-dasharray="3 3"/>
                    <text x="2" y={(PADDING - 8.0).to_string()} font-size="10">{format!("{:.1}{}", bounds.1, unit)}</text>
                    <text x="2" y={(height - PADDING).to_string()} font-size="10">{format!("{:.1}{}", bounds.0, unit)}</text>
                    { props.labels.iter().zip(label_points.iter()).map(|(label, (x, _))| html! {
                        <text x={format!("{:.1}", x)} y={(height - 8.0).to_string()} font-size="10" text-anchor="middle">{label}</text>
                    }).collect::<Html>() }
                    { props.series.iter().map(|series| self.view_series(series, bounds, height)).collect::<Html>() }
                </svg>
                <div class="tags is-centered">
                    { props.series.iter().map(|series| html! {
                        <span class="tag" style={format!("border-left: 4px solid {}", series.color)}>{&series.name}</span>
                    }).collect::<Html>() }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_span_all_series() {
        let series = vec![
            ChartSeries::line("a", "#000", vec![3.0, 5.0]),
            ChartSeries::line("b", "#fff", vec![-1.0, 4.0]),
        ];

        assert_eq!(value_bounds(&series), Some((-1.0, 5.0)));
        assert_eq!(value_bounds(&[]), None);
    }

    #[test]
    fn flat_series_gets_a_range() {
        let series = vec![ChartSeries::area("flat", "#000", vec![2.0, 2.0])];

        assert_eq!(value_bounds(&series), Some((1.0, 3.0)));
    }

    #[test]
    fn points_fill_the_drawing_area() {
        let points = scale_points(&[0.0, 5.0, 10.0], (0.0, 10.0), 200.0, 100.0);

        assert_eq!(points[0], (PADDING, 100.0 - PADDING));
        assert_eq!(points[1], (100.0, 50.0));
        assert_eq!(points[2], (200.0 - PADDING, PADDING));
    }

    #[test]
    fn points_attribute_format() {
        assert_eq!(points_attr(&[(1.0, 2.5), (3.0, 4.0)]), "1.0,2.5 3.0,4.0");
    }
}
