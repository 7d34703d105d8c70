mod slots;

pub use slots::*;

use super::notifier;
use crate::objects::{StreamStatus, Video};
use std::collections::HashSet;
use yew_agent::{Agent, AgentLink, Context, Dispatched, Dispatcher, HandlerId};

#[derive(Debug, Clone)]
pub enum Request {
    SetCurrentVideo(Video),
    SetGridVideos(Vec<Video>),
    AddGridVideo(Video),
    RemoveGridVideo(String),
    ClearGridVideos,
    SwapWithMainVideo(String),
    UpdateStreamStatus(String, StreamStatus),
    ResetVideos,
    GetSnapshot,        // returns Snapshot only to requester
    GetAvailableVideos, // returns AvailableVideos only to requester
}

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Snapshot(VideoSnapshot),
    AvailableVideos(Vec<Video>),
}

/// Owns the video slots for the session and pushes a snapshot to every bridge after each change.
pub struct VideoStore {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    slots: VideoSlots,
    notifier: Dispatcher<notifier::Notifier>,
}

impl VideoStore {
    fn respond(&self, id: HandlerId, response: Response) {
        if id.is_respondable() {
            self.link.respond(id, response);
        }
    }

    fn notify_subscribed(&self) {
        let snapshot = self.slots.snapshot();

        for subscriber in &self.subscribers {
            self.respond(*subscriber, Response::Snapshot(snapshot.clone()));
        }
    }
}

/// Result of an applied request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The slots changed; every subscriber gets a new snapshot.
    Changed,
    Unchanged,
    /// Answer for the requester only.
    Reply(Response),
}

impl Outcome {
    fn changed_if(changed: bool) -> Self {
        match changed {
            true => Outcome::Changed,
            false => Outcome::Unchanged,
        }
    }
}

/// Applies a request to the slots and tells the agent whom to answer.
pub fn apply_request(slots: &mut VideoSlots, msg: Request) -> Result<Outcome, SlotError> {
    match msg {
        Request::SetCurrentVideo(video) => {
            log::info!("main video set to \"{}\"", video.id);
            slots.set_current_video(video);
            Ok(Outcome::Changed)
        }
        Request::SetGridVideos(videos) => {
            slots.set_grid_videos(videos)?;
            Ok(Outcome::Changed)
        }
        Request::AddGridVideo(video) => {
            slots.add_grid_video(video)?;
            Ok(Outcome::Changed)
        }
        Request::RemoveGridVideo(video_id) => {
            Ok(Outcome::changed_if(slots.remove_grid_video(&video_id)))
        }
        Request::ClearGridVideos => {
            slots.clear_grid_videos();
            Ok(Outcome::Changed)
        }
        Request::SwapWithMainVideo(video_id) => {
            let swapped = slots.swap_with_main_video(&video_id);

            match swapped {
                true => log::info!("\"{}\" moved to the main slot", video_id),
                false => log::debug!("swap with \"{}\" ignored", video_id),
            }
            Ok(Outcome::changed_if(swapped))
        }
        Request::UpdateStreamStatus(video_id, status) => {
            let updated = slots.update_video_stream_status(&video_id, status);

            if updated && status == StreamStatus::Error {
                log::warn!("stream of \"{}\" failed", video_id);
            }
            Ok(Outcome::changed_if(updated))
        }
        Request::ResetVideos => {
            slots.reset_videos();
            Ok(Outcome::Changed)
        }
        Request::GetSnapshot => Ok(Outcome::Reply(Response::Snapshot(slots.snapshot()))),
        Request::GetAvailableVideos => Ok(Outcome::Reply(Response::AvailableVideos(
            slots.available_videos(),
        ))),
    }
}

impl Agent for VideoStore {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            slots: VideoSlots::new(chrono::Utc::now()),
            notifier: notifier::Notifier::dispatcher(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, id: HandlerId) {
        match apply_request(&mut self.slots, msg) {
            Ok(Outcome::Changed) => self.notify_subscribed(),
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Reply(response)) => self.respond(id, response),
            Err(e) => self
                .notifier
                .send(notifier::Request::Notify(notifier::Notification {
                    severity: notifier::NotificationSeverity::Warning,
                    text: e.to_string(),
                })),
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.respond(id, Response::Snapshot(self.slots.snapshot()));
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn slots() -> VideoSlots {
        VideoSlots::new(Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap())
    }

    #[test]
    fn applied_mutations_broadcast() {
        let mut slots = slots();

        assert_eq!(
            apply_request(&mut slots, Request::SwapWithMainVideo("cam-3".into())),
            Ok(Outcome::Changed)
        );
        assert_eq!(
            apply_request(
                &mut slots,
                Request::UpdateStreamStatus("cam-1".into(), StreamStatus::Paused)
            ),
            Ok(Outcome::Changed)
        );
        assert_eq!(apply_request(&mut slots, Request::ResetVideos), Ok(Outcome::Changed));
        assert_eq!(apply_request(&mut slots, Request::ClearGridVideos), Ok(Outcome::Changed));
    }

    #[test]
    fn misses_do_not_broadcast() {
        let mut slots = slots();
        let before = slots.snapshot();

        assert_eq!(
            apply_request(&mut slots, Request::SwapWithMainVideo("unknown".into())),
            Ok(Outcome::Unchanged)
        );
        assert_eq!(
            apply_request(
                &mut slots,
                Request::UpdateStreamStatus("unknown".into(), StreamStatus::Error)
            ),
            Ok(Outcome::Unchanged)
        );
        assert_eq!(
            apply_request(&mut slots, Request::RemoveGridVideo("unknown".into())),
            Ok(Outcome::Unchanged)
        );
        assert_eq!(slots.snapshot(), before);
    }

    #[test]
    fn queries_answer_the_requester_only() {
        let mut slots = slots();

        assert_eq!(
            apply_request(&mut slots, Request::GetSnapshot),
            Ok(Outcome::Reply(Response::Snapshot(slots.snapshot())))
        );

        apply_request(
            &mut slots,
            Request::UpdateStreamStatus("cam-6".into(), StreamStatus::Error),
        )
        .unwrap();
        let available = match apply_request(&mut slots, Request::GetAvailableVideos) {
            Ok(Outcome::Reply(Response::AvailableVideos(videos))) => videos,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(available.len(), 6);
        assert!(available.iter().all(|v| v.id != "cam-6"));
    }

    #[test]
    fn duplicate_insert_is_rejected_without_change() {
        let mut slots = slots();
        let before = slots.snapshot();

        assert_eq!(
            apply_request(&mut slots, Request::AddGridVideo(Video::new("cam-2", "", "Copy"))),
            Err(SlotError::DuplicateId("cam-2".into()))
        );
        assert_eq!(slots.snapshot(), before);
    }
}
