use crate::objects::{
    video::{default_grid_videos, default_main_video},
    StreamStatus, Video,
};
use chrono::{DateTime, Utc};
use std::{collections::HashSet, error::Error, fmt::Display};

#[derive(Debug, Clone, PartialEq)]
pub enum SlotError {
    /// The id is already held by the main slot or another grid slot.
    DuplicateId(String),
}

impl Error for SlotError {}

impl Display for SlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlotError::DuplicateId(id) => {
                f.write_fmt(format_args!("video \"{}\" is already shown", id))
            }
        }
    }
}

/// Plain copy of the slot state handed to subscribers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoSnapshot {
    pub current_video: Option<Video>,
    pub grid_videos: Vec<Video>,
    pub previous_main_video: Option<Video>,
}

impl VideoSnapshot {
    pub fn is_previous_main(&self, video: &Video) -> bool {
        self.previous_main_video
            .as_ref()
            .map_or(false, |previous| previous.id == video.id)
    }
}

/// The main video slot and the ordered camera grid.
///
/// Every operation either applies completely or leaves the state untouched. Operations keyed by
/// an id that is not present are silent no-ops and report `false`.
#[derive(Debug, Clone)]
pub struct VideoSlots {
    current_video: Option<Video>,
    grid_videos: Vec<Video>,
    previous_main_video: Option<Video>,
    created: DateTime<Utc>,
}

impl VideoSlots {
    /// Default main video and camera grid, stamped with `created`.
    pub fn new(created: DateTime<Utc>) -> Self {
        Self {
            current_video: Some(default_main_video(created)),
            grid_videos: default_grid_videos(created),
            previous_main_video: None,
            created,
        }
    }

    /// Slots with explicit contents; `reset_videos` still returns to the defaults.
    pub fn with_videos(
        current_video: Option<Video>,
        grid_videos: Vec<Video>,
        created: DateTime<Utc>,
    ) -> Result<Self, SlotError> {
        check_unique(current_video.as_ref(), &grid_videos)?;

        Ok(Self {
            current_video,
            grid_videos,
            previous_main_video: None,
            created,
        })
    }

    pub fn current_video(&self) -> Option<&Video> {
        self.current_video.as_ref()
    }

    pub fn grid_videos(&self) -> &[Video] {
        &self.grid_videos
    }

    pub fn previous_main_video(&self) -> Option<&Video> {
        self.previous_main_video.as_ref()
    }

    pub fn snapshot(&self) -> VideoSnapshot {
        VideoSnapshot {
            current_video: self.current_video.clone(),
            grid_videos: self.grid_videos.clone(),
            previous_main_video: self.previous_main_video.clone(),
        }
    }

    /// Replaces the main slot without touching the grid.
    ///
    /// A main video sharing its id with a grid entry is tolerated (logged) so that the
    /// precedence rules of `update_video_stream_status` stay observable.
    pub fn set_current_video(&mut self, video: Video) {
        if self.grid_videos.iter().any(|v| v.id == video.id) {
            log::warn!("main video \"{}\" is also present in the grid", video.id);
        }
        self.current_video = Some(video);
    }

    pub fn set_grid_videos(&mut self, videos: Vec<Video>) -> Result<(), SlotError> {
        check_unique(self.current_video.as_ref(), &videos)?;
        self.grid_videos = videos;
        Ok(())
    }

    pub fn add_grid_video(&mut self, video: Video) -> Result<(), SlotError> {
        if self.current_video.as_ref().map_or(false, |c| c.id == video.id)
            || self.grid_videos.iter().any(|v| v.id == video.id)
        {
            return Err(SlotError::DuplicateId(video.id));
        }
        self.grid_videos.push(video);
        Ok(())
    }

    pub fn remove_grid_video(&mut self, id: &str) -> bool {
        let len = self.grid_videos.len();

        self.grid_videos.retain(|v| v.id != id);
        self.grid_videos.len() != len
    }

    pub fn clear_grid_videos(&mut self) {
        self.grid_videos.clear();
    }

    /// Moves the grid video `grid_video_id` into the main slot and the main video into its grid
    /// position. Remembers the old main video as `previous_main_video`.
    pub fn swap_with_main_video(&mut self, grid_video_id: &str) -> bool {
        let index = match self.grid_videos.iter().position(|v| v.id == grid_video_id) {
            Some(index) => index,
            None => return false,
        };
        let previous_main = match self.current_video.take() {
            Some(video) => video,
            None => return false,
        };
        let grid_video = std::mem::replace(&mut self.grid_videos[index], previous_main.clone());

        self.current_video = Some(grid_video);
        self.previous_main_video = Some(previous_main);
        true
    }

    /// Updates the main video if it matches, otherwise the first grid match.
    pub fn update_video_stream_status(&mut self, id: &str, status: StreamStatus) -> bool {
        if let Some(current) = self.current_video.as_mut().filter(|v| v.id == id) {
            current.stream_status = Some(status);
            return true;
        }

        match self.grid_videos.iter_mut().find(|v| v.id == id) {
            Some(video) => {
                video.stream_status = Some(status);
                true
            }
            None => false,
        }
    }

    pub fn reset_videos(&mut self) {
        self.current_video = Some(default_main_video(self.created));
        self.grid_videos = default_grid_videos(self.created);
        self.previous_main_video = None;
    }

    /// The main video (whatever its status) followed by every grid video that is not errored.
    pub fn available_videos(&self) -> Vec<Video> {
        self.current_video
            .iter()
            .chain(self.grid_videos.iter().filter(|v| !v.is_errored()))
            .cloned()
            .collect()
    }
}

fn check_unique(current_video: Option<&Video>, grid_videos: &[Video]) -> Result<(), SlotError> {
    let mut seen: HashSet<&str> = current_video.iter().map(|v| v.id.as_str()).collect();

    for video in grid_videos {
        if !seen.insert(video.id.as_str()) {
            return Err(SlotError::DuplicateId(video.id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::video::DEFAULT_MAIN_VIDEO_ID;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap()
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn defaults_after_construction() {
        let slots = VideoSlots::new(created());

        assert_eq!(slots.current_video().unwrap().id, DEFAULT_MAIN_VIDEO_ID);
        assert_eq!(
            ids(slots.grid_videos()),
            vec!["cam-1", "cam-2", "cam-3", "cam-4", "cam-5", "cam-6"]
        );
        assert!(slots.previous_main_video().is_none());
    }

    #[test]
    fn swap_with_third_camera() {
        let mut slots = VideoSlots::new(created());

        assert!(slots.swap_with_main_video("cam-3"));
        assert_eq!(slots.current_video().unwrap().id, "cam-3");
        assert_eq!(slots.grid_videos()[2].id, DEFAULT_MAIN_VIDEO_ID);
        assert_eq!(slots.previous_main_video().unwrap().id, DEFAULT_MAIN_VIDEO_ID);
    }

    #[test]
    fn swap_preserves_cardinality_and_members() {
        for target in ["cam-1", "cam-2", "cam-3", "cam-4", "cam-5", "cam-6"] {
            let mut slots = VideoSlots::new(created());
            let before = slots.snapshot();
            let index = before.grid_videos.iter().position(|v| v.id == target).unwrap();

            assert!(slots.swap_with_main_video(target));

            assert_eq!(slots.grid_videos().len(), before.grid_videos.len());
            assert_eq!(slots.current_video(), Some(&before.grid_videos[index]));
            assert_eq!(Some(&slots.grid_videos()[index]), before.current_video.as_ref());

            let mut all_before: Vec<String> = before
                .current_video
                .iter()
                .chain(before.grid_videos.iter())
                .map(|v| v.id.clone())
                .collect();
            let mut all_after: Vec<String> = slots
                .current_video()
                .into_iter()
                .chain(slots.grid_videos().iter())
                .map(|v| v.id.clone())
                .collect();
            all_before.sort();
            all_after.sort();
            assert_eq!(all_before, all_after);
        }
    }

    #[test]
    fn repeated_swap_performs_another_swap() {
        let mut slots = VideoSlots::new(created());

        assert!(slots.swap_with_main_video("cam-3"));
        // cam-3 is now main, so the same id is no longer in the grid
        assert!(!slots.swap_with_main_video("cam-3"));
        assert_eq!(slots.current_video().unwrap().id, "cam-3");

        assert!(slots.swap_with_main_video(DEFAULT_MAIN_VIDEO_ID));
        assert_eq!(slots.current_video().unwrap().id, DEFAULT_MAIN_VIDEO_ID);
        assert_eq!(slots.grid_videos()[2].id, "cam-3");
        assert_eq!(slots.previous_main_video().unwrap().id, "cam-3");
    }

    #[test]
    fn swap_with_unknown_id_is_noop() {
        let mut slots = VideoSlots::new(created());

        slots.swap_with_main_video("cam-2");
        let before = slots.snapshot();

        assert!(!slots.swap_with_main_video("cam-42"));
        assert_eq!(slots.snapshot(), before);
    }

    #[test]
    fn swap_without_main_video_is_noop() {
        let grid = default_grid_videos(created());
        let mut slots = VideoSlots::with_videos(None, grid, created()).unwrap();
        let before = slots.snapshot();

        assert!(!slots.swap_with_main_video("cam-1"));
        assert_eq!(slots.snapshot(), before);
        assert!(slots.previous_main_video().is_none());
    }

    #[test]
    fn status_update_prefers_main_video() {
        let mut slots = VideoSlots::new(created());
        let duplicate = slots.grid_videos()[1].clone();

        slots.set_current_video(duplicate);
        assert!(slots.update_video_stream_status("cam-2", StreamStatus::Paused));

        assert!(slots.current_video().unwrap().is_paused());
        assert_eq!(slots.grid_videos()[1].stream_status, Some(StreamStatus::Active));
    }

    #[test]
    fn status_update_falls_back_to_grid() {
        let mut slots = VideoSlots::new(created());

        assert!(slots.update_video_stream_status("cam-4", StreamStatus::Error));
        assert!(slots.grid_videos()[3].is_errored());
        assert_eq!(
            slots.current_video().unwrap().stream_status,
            Some(StreamStatus::Active)
        );
        assert!(!slots.update_video_stream_status("cam-99", StreamStatus::Error));
    }

    #[test]
    fn errored_camera_is_not_available() {
        let mut slots = VideoSlots::new(created());

        slots.update_video_stream_status("cam-6", StreamStatus::Error);
        let available = slots.available_videos();

        assert_eq!(
            ids(&available),
            vec![DEFAULT_MAIN_VIDEO_ID, "cam-1", "cam-2", "cam-3", "cam-4", "cam-5"]
        );
    }

    #[test]
    fn errored_main_video_stays_available() {
        let mut slots = VideoSlots::new(created());

        slots.update_video_stream_status(DEFAULT_MAIN_VIDEO_ID, StreamStatus::Error);
        let available = slots.available_videos();

        assert_eq!(available[0].id, DEFAULT_MAIN_VIDEO_ID);
        assert!(available[0].is_errored());
        assert!(available[1..].iter().all(|v| !v.is_errored()));
    }

    #[test]
    fn available_videos_are_not_deduplicated() {
        let mut slots = VideoSlots::new(created());
        let duplicate = slots.grid_videos()[0].clone();

        slots.set_current_video(duplicate);
        let available = slots.available_videos();

        assert_eq!(available[0].id, "cam-1");
        assert_eq!(available[1].id, "cam-1");
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut slots = VideoSlots::new(created());
        let initial = slots.snapshot();

        slots.swap_with_main_video("cam-5");
        slots.update_video_stream_status("cam-1", StreamStatus::Paused);
        slots.remove_grid_video("cam-2");
        slots.reset_videos();

        assert_eq!(slots.snapshot(), initial);
    }

    #[test]
    fn set_current_video_leaves_grid_and_previous_alone() {
        let mut slots = VideoSlots::new(created());

        slots.swap_with_main_video("cam-1");
        let grid = slots.grid_videos().to_vec();
        let previous = slots.previous_main_video().cloned();

        slots.set_current_video(Video::new("ext-1", "https://example.com/ext.mp4", "External"));

        assert_eq!(slots.current_video().unwrap().id, "ext-1");
        assert_eq!(slots.grid_videos(), grid.as_slice());
        assert_eq!(slots.previous_main_video().cloned(), previous);
    }

    #[test]
    fn add_grid_video_rejects_duplicates() {
        let mut slots = VideoSlots::new(created());
        let before = slots.snapshot();

        assert_eq!(
            slots.add_grid_video(Video::new("cam-2", "", "Again")),
            Err(SlotError::DuplicateId("cam-2".into()))
        );
        assert_eq!(
            slots.add_grid_video(Video::new(DEFAULT_MAIN_VIDEO_ID, "", "Main again")),
            Err(SlotError::DuplicateId(DEFAULT_MAIN_VIDEO_ID.into()))
        );
        assert_eq!(slots.snapshot(), before);

        assert!(slots.add_grid_video(Video::new("cam-7", "", "Camera G")).is_ok());
        assert_eq!(slots.grid_videos().last().unwrap().id, "cam-7");
    }

    #[test]
    fn set_grid_videos_rejects_repeated_ids() {
        let mut slots = VideoSlots::new(created());
        let before = slots.snapshot();
        let repeated = vec![Video::new("a", "", "A"), Video::new("a", "", "A again")];

        assert!(slots.set_grid_videos(repeated).is_err());
        assert_eq!(slots.snapshot(), before);

        let replacement = vec![Video::new("a", "", "A"), Video::new("b", "", "B")];
        assert!(slots.set_grid_videos(replacement).is_ok());
        assert_eq!(ids(slots.grid_videos()), vec!["a", "b"]);
    }

    #[test]
    fn remove_and_clear_grid() {
        let mut slots = VideoSlots::new(created());

        assert!(slots.remove_grid_video("cam-3"));
        assert!(!slots.remove_grid_video("cam-3"));
        assert_eq!(slots.grid_videos().len(), 5);

        slots.clear_grid_videos();
        assert!(slots.grid_videos().is_empty());
        assert_eq!(ids(&slots.available_videos()), vec![DEFAULT_MAIN_VIDEO_ID]);
    }

    #[test]
    fn snapshot_marks_previous_main() {
        let mut slots = VideoSlots::new(created());

        slots.swap_with_main_video("cam-4");
        let snapshot = slots.snapshot();

        assert!(snapshot.is_previous_main(&snapshot.grid_videos[3]));
        assert!(!snapshot.is_previous_main(&snapshot.grid_videos[0]));
    }

    #[test]
    fn duplicate_id_error_message() {
        let err = SlotError::DuplicateId("cam-1".into());

        assert_eq!(err.to_string(), "video \"cam-1\" is already shown");
    }
}
