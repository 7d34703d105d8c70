mod alerts_page;
mod dashboard_page;
mod factory_monitor_page;
mod factory_realtime_page;
mod not_found_page;
mod predictions_page;
mod snapshots_page;
mod video_pages;
pub use alerts_page::AlertsPage;
pub use dashboard_page::DashboardPage;
pub use factory_monitor_page::FactoryMonitorPage;
pub use factory_realtime_page::FactoryRealtimePage;
pub use not_found_page::NotFoundPage;
pub use predictions_page::PredictionsPage;
pub use snapshots_page::SnapshotsPage;
pub use video_pages::{AlertHighlightPage, FocusZoomPage, MultiRegionPage};
