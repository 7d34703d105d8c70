use crate::components::{MonitorVideo, RegionOverlay};
use yew::prelude::*;

pub fn alert_highlight_overlays() -> Vec<RegionOverlay> {
    vec![RegionOverlay::new("is-pulsing", "#ff4d4f", (30.0, 40.0, 20.0, 15.0)).with_label("Alert")]
}

pub fn focus_zoom_overlays() -> Vec<RegionOverlay> {
    vec![RegionOverlay::new("is-elliptical", "#52c41a", (25.0, 20.0, 40.0, 40.0)).with_label("Zoom")]
}

pub fn multi_region_overlays() -> Vec<RegionOverlay> {
    vec![
        RegionOverlay::new("is-region", "#ff4d4f", (10.0, 10.0, 25.0, 25.0)).with_label("Region 1"),
        RegionOverlay::new("is-region", "#1890ff", (50.0, 15.0, 30.0, 20.0)).with_label("Region 2"),
        RegionOverlay::new("is-region", "#52c41a", (25.0, 60.0, 35.0, 25.0)).with_label("Region 3"),
    ]
}

pub struct AlertHighlightPage {}

impl Component for AlertHighlightPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {<MonitorVideo title="Alert Highlight" overlays={alert_highlight_overlays()}/>}
    }
}

pub struct FocusZoomPage {}

impl Component for FocusZoomPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {<MonitorVideo title="Focus Zoom" overlays={focus_zoom_overlays()}/>}
    }
}

pub struct MultiRegionPage {}

impl Component for MultiRegionPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {<MonitorVideo title="Multi-Region Monitoring" overlays={multi_region_overlays()}/>}
    }
}
