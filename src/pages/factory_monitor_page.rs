use crate::{
    components::{ChartSeries, LineChart, StatCard},
    objects::sensor::{mock_monitor_readings, MonitorReading},
};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonitorTab {
    Live,
    Sensors,
}

pub struct FactoryMonitorPage {
    readings: Vec<MonitorReading>,
    tab: MonitorTab,
}

pub enum Message {
    SelectTab(MonitorTab),
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub factory_id: String,
}

/// Temperature, humidity and people count as chart series.
pub fn monitor_series(readings: &[MonitorReading]) -> Vec<ChartSeries> {
    vec![
        ChartSeries::line("Temperature", "#ff4d4f", readings.iter().map(|r| r.temperature).collect()),
        ChartSeries::line("Humidity", "#1890ff", readings.iter().map(|r| r.humidity).collect()),
        ChartSeries::line("People", "#52c41a", readings.iter().map(|r| r.people).collect()),
    ]
}

impl FactoryMonitorPage {
    fn view_tab(&self, ctx: &Context<Self>, tab: MonitorTab, label: &str) -> Html {
        html! {
            <li class={classes!((self.tab == tab).then(|| "is-active"))}>
                <a onclick={ctx.link().callback(move |_| Message::SelectTab(tab))}>{label}</a>
            </li>
        }
    }

    fn view_content(&self, ctx: &Context<Self>) -> Html {
        match self.tab {
            MonitorTab::Live => html! {
                <figure class="image is-16by9">
                    <img src="https://via.placeholder.com/800x450" alt={format!("Factory {} Live Feed", ctx.props().factory_id)}/>
                </figure>
            },
            MonitorTab::Sensors => html! {
                <LineChart labels={self.readings.iter().map(|r| r.time.clone()).collect::<Vec<String>>()}
                    series={monitor_series(&self.readings)}/>
            },
        }
    }
}

impl Component for FactoryMonitorPage {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            readings: mock_monitor_readings(),
            tab: MonitorTab::Live,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::SelectTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>) -> bool {
        self.tab = MonitorTab::Live;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <p class="title is-4">{format!("Factory {} Monitor", ctx.props().factory_id)}</p>
                <div class="columns">
                    <div class="column"><StatCard title="Temperature" value="26" suffix="°C" icon="local_fire_department"/></div>
                    <div class="column"><StatCard title="Humidity" value="45" suffix="%" icon="cloud"/></div>
                    <div class="column"><StatCard title="People Count" value="45" icon="groups"/></div>
                    <div class="column"><StatCard title="Alert Count" value="3" icon="warning" color="#cf1322"/></div>
                </div>
                <div class="box">
                    <div class="tabs">
                        <ul>
                            { self.view_tab(ctx, MonitorTab::Live, "Live Monitor") }
                            { self.view_tab(ctx, MonitorTab::Sensors, "Sensor Data") }
                        </ul>
                    </div>
                    { self.view_content(ctx) }
                </div>
            </>
        }
    }
}
