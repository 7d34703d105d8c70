use super::{ChartSeries, LineChart, StatCard};
use crate::objects::sensor::{mock_sensor_readings, Sensor, SensorReading};
use yew::prelude::*;

pub struct SensorCharts {
    readings: Vec<SensorReading>,
    selected: Sensor,
}

pub enum Message {
    Select(Sensor),
}

/// Temperature and humidity shown together in the overview chart.
pub fn overview_series(readings: &[SensorReading]) -> Vec<ChartSeries> {
    [Sensor::Temperature, Sensor::Humidity]
        .iter()
        .map(|sensor| ChartSeries::area(sensor.label(), sensor.color(), sensor.series(readings)))
        .collect()
}

impl Component for SensorCharts {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            readings: mock_sensor_readings(),
            selected: Sensor::Temperature,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Select(sensor) if sensor != self.selected => {
                self.selected = sensor;
                true
            }
            Message::Select(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let labels: Vec<String> = self.readings.iter().map(|r| r.time.clone()).collect();
        let selected = self.selected;

        html! {
            <div class="box">
                <div class="columns is-mobile">
                    { Sensor::ALL.iter().map(|sensor| {
                        let sensor = *sensor;
                        html! {
                            <div class="column">
                                <StatCard title={sensor.label()} value={format!("{:.1}", sensor.current_value())}
                                    suffix={sensor.unit()} icon={sensor.icon()} color={sensor.color()}
                                    selected={sensor == selected}
                                    onclick={ctx.link().callback(move |_| Message::Select(sensor))}/>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
                <p class="heading">{"All Sensors"}</p>
                <LineChart labels={labels.clone()} series={overview_series(&self.readings)} height={200.0}/>
                <p class="heading">{format!("{} Trend", selected.label())}</p>
                <LineChart labels={labels}
                    series={vec![ChartSeries::line(selected.label(), selected.color(), selected.series(&self.readings))]}
                    unit={selected.unit()} height={200.0}/>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_covers_temperature_and_humidity() {
        let readings = mock_sensor_readings();
        let series = overview_series(&readings);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Temperature");
        assert_eq!(series[1].color, "#1890ff");
        assert!(series.iter().all(|s| s.filled && s.values.len() == readings.len()));
    }
}
