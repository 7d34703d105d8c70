use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_MAIN_VIDEO_ID: &str = "main-default";
const VIDEO_BASE_URL: &str = "https://misanya-1252867445.cos.ap-shanghai.myqcloud.com/videos";
const GRID_SIZE: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub url: String,
    pub title: String,
    pub location: Option<String>,
    pub status: Option<OnlineStatus>,
    pub stream_status: Option<StreamStatus>,
    pub resolution: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Descriptive connectivity of a camera; it does not gate playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnlineStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    Active,
    Paused,
    Error,
}

impl Display for StreamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StreamStatus::Active => "active",
            StreamStatus::Paused => "paused",
            StreamStatus::Error => "error",
        })
    }
}

impl Video {
    pub fn new(id: &str, url: &str, title: &str) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            location: None,
            status: None,
            stream_status: None,
            resolution: None,
            timestamp: None,
        }
    }

    pub fn is_errored(&self) -> bool {
        self.stream_status == Some(StreamStatus::Error)
    }

    pub fn is_paused(&self) -> bool {
        self.stream_status == Some(StreamStatus::Paused)
    }

    pub fn is_offline(&self) -> bool {
        self.status == Some(OnlineStatus::Offline)
    }

    /// Returns the source locator, or `None` if there is nothing to play.
    pub fn playable_url(&self) -> Option<&str> {
        match self.url.trim().is_empty() {
            true => None,
            false => Some(&self.url),
        }
    }
}

pub fn default_main_video(timestamp: DateTime<Utc>) -> Video {
    Video {
        id: DEFAULT_MAIN_VIDEO_ID.into(),
        url: format!("{}/v1.mp4", VIDEO_BASE_URL),
        title: "Production Line A".into(),
        location: None,
        status: None,
        stream_status: Some(StreamStatus::Active),
        resolution: Some("1920x1080".into()),
        timestamp: Some(timestamp),
    }
}

/// Six grid cameras `cam-1` to `cam-6`; the last one starts offline with an errored stream.
pub fn default_grid_videos(timestamp: DateTime<Utc>) -> Vec<Video> {
    (0..GRID_SIZE)
        .map(|i| {
            let offline = i == GRID_SIZE - 1;

            Video {
                id: format!("cam-{}", i + 1),
                url: format!("{}/v{}.mp4", VIDEO_BASE_URL, i + 2),
                title: format!("Camera {}", (b'A' + i as u8) as char),
                location: Some(format!("Section {}", i + 1)),
                status: Some(match offline {
                    true => OnlineStatus::Offline,
                    false => OnlineStatus::Online,
                }),
                stream_status: Some(match offline {
                    true => StreamStatus::Error,
                    false => StreamStatus::Active,
                }),
                resolution: Some("1280x720".into()),
                timestamp: Some(timestamp),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn default_grid_has_six_lettered_cameras() {
        let grid = default_grid_videos(timestamp());

        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0].id, "cam-1");
        assert_eq!(grid[0].title, "Camera A");
        assert_eq!(grid[5].title, "Camera F");
        assert_eq!(grid[2].location.as_deref(), Some("Section 3"));
        assert!(grid[0].url.ends_with("/v2.mp4"));
        assert!(grid[5].url.ends_with("/v7.mp4"));
    }

    #[test]
    fn only_last_default_camera_is_offline() {
        let grid = default_grid_videos(timestamp());

        for video in &grid[..5] {
            assert_eq!(video.status, Some(OnlineStatus::Online));
            assert_eq!(video.stream_status, Some(StreamStatus::Active));
        }
        assert!(grid[5].is_offline());
        assert!(grid[5].is_errored());
    }

    #[test]
    fn default_main_video_is_active_full_hd() {
        let main = default_main_video(timestamp());

        assert_eq!(main.id, DEFAULT_MAIN_VIDEO_ID);
        assert_eq!(main.title, "Production Line A");
        assert_eq!(main.resolution.as_deref(), Some("1920x1080"));
        assert_eq!(main.stream_status, Some(StreamStatus::Active));
        assert!(main.url.ends_with("/v1.mp4"));
    }

    #[test]
    fn blank_url_is_not_playable() {
        let mut video = Video::new("x", "  ", "Blank");

        assert_eq!(video.playable_url(), None);
        video.url = "https://example.com/a.mp4".into();
        assert_eq!(video.playable_url(), Some("https://example.com/a.mp4"));
    }

    #[test]
    fn stream_status_uses_lowercase_names() {
        let json = serde_json::to_string(&default_main_video(timestamp())).unwrap();

        assert!(json.contains("\"streamStatus\":\"active\""));
    }
}
