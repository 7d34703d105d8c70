pub mod notifier;
pub mod video_store;
