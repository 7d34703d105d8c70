pub mod alert_form;
pub mod icon;
pub mod line_chart;
pub mod main_layout;
pub mod monitor_video;
pub mod notification;
pub mod router;
pub mod sensor_charts;
pub mod stat_card;
pub mod system_console;
pub mod top;
pub mod video_grid;
pub mod video_player;
pub use alert_form::AlertForm;
pub use icon::{Icon, IconStyle};
pub use line_chart::{ChartSeries, LineChart};
pub use monitor_video::{MonitorVideo, RegionOverlay};
pub use notification::Notification;
pub use sensor_charts::SensorCharts;
pub use stat_card::StatCard;
pub use system_console::SystemConsole;
pub use top::{Top, TopProps};
pub use video_grid::VideoGrid;
pub use video_player::MainVideoPlayer;
