pub mod alert;
pub mod console_entry;
pub mod dashboard_config;
pub mod factory;
pub mod prediction;
pub mod sensor;
pub mod snapshot;
pub mod video;
mod js_error;
pub use dashboard_config::DashboardConfig;
pub use js_error::JsError;
pub use video::{OnlineStatus, StreamStatus, Video};
