use crate::pages::{
    AlertHighlightPage, AlertsPage, DashboardPage, FactoryMonitorPage, FactoryRealtimePage,
    FocusZoomPage, MultiRegionPage, NotFoundPage, PredictionsPage, SnapshotsPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum AppRoute {
    #[at("/")]
    Dashboard,
    #[at("/monitor/:factory_id")]
    FactoryMonitor { factory_id: String },
    #[at("/factory-realtime-v2")]
    FactoryRealtime,
    #[at("/alerts")]
    Alerts,
    #[at("/predictions")]
    Predictions,
    #[at("/snapshots")]
    Snapshots,
    #[at("/video/alert")]
    AlertHighlight,
    #[at("/video/focus")]
    FocusZoom,
    #[at("/video/multi")]
    MultiRegion,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: &AppRoute) -> Html {
    match route {
        AppRoute::Dashboard => html! {<DashboardPage/>},
        AppRoute::FactoryMonitor { factory_id } => {
            html! {<FactoryMonitorPage factory_id={factory_id.clone()}/>}
        }
        AppRoute::FactoryRealtime => html! {<FactoryRealtimePage/>},
        AppRoute::Alerts => html! {<AlertsPage/>},
        AppRoute::Predictions => html! {<PredictionsPage/>},
        AppRoute::Snapshots => html! {<SnapshotsPage/>},
        AppRoute::AlertHighlight => html! {<AlertHighlightPage/>},
        AppRoute::FocusZoom => html! {<FocusZoomPage/>},
        AppRoute::MultiRegion => html! {<MultiRegionPage/>},
        AppRoute::NotFound => html! {<NotFoundPage/>},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_of_routes() {
        assert_eq!(AppRoute::Dashboard.to_path(), "/");
        assert_eq!(
            AppRoute::FactoryMonitor {
                factory_id: "1".into()
            }
            .to_path(),
            "/monitor/1"
        );
        assert_eq!(AppRoute::FactoryRealtime.to_path(), "/factory-realtime-v2");
        assert_eq!(AppRoute::AlertHighlight.to_path(), "/video/alert");
        assert_eq!(AppRoute::FocusZoom.to_path(), "/video/focus");
        assert_eq!(AppRoute::MultiRegion.to_path(), "/video/multi");
    }

    #[test]
    fn paths_of_table_pages() {
        assert_eq!(AppRoute::Alerts.to_path(), "/alerts");
        assert_eq!(AppRoute::Predictions.to_path(), "/predictions");
        assert_eq!(AppRoute::Snapshots.to_path(), "/snapshots");
        assert_eq!(AppRoute::NotFound.to_path(), "/404");
    }
}
