use crate::components::{MainVideoPlayer, SensorCharts, SystemConsole, VideoGrid};
use yew::prelude::*;

pub struct FactoryRealtimePage {}

impl Component for FactoryRealtimePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="columns">
                <div class="column is-5">
                    <SensorCharts/>
                    <SystemConsole/>
                </div>
                <div class="column is-7">
                    <MainVideoPlayer/>
                    <VideoGrid/>
                </div>
            </div>
        }
    }
}
