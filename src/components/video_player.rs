use super::{Icon, IconStyle};
use crate::{
    agents::{notifier, video_store},
    objects::{JsError, StreamStatus, Video},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{DomException, HtmlVideoElement};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged, Dispatched, Dispatcher};

/// Plays the video in the main slot and drives its stream status.
pub struct MainVideoPlayer {
    video_store: Box<dyn Bridge<video_store::VideoStore>>,
    notifier: Dispatcher<notifier::Notifier>,
    current_video: Option<Video>,
    video_ref: NodeRef,
}

pub enum Message {
    VideoStoreMessage(video_store::Response),
    TogglePlay,
    PlaybackError,
    PlayStarted(Result<JsValue, JsValue>),
}

/// Status the play/pause toggle moves to; an errored stream is retried.
pub fn toggled_status(status: Option<StreamStatus>) -> StreamStatus {
    match status {
        Some(StreamStatus::Active) | None => StreamStatus::Paused,
        Some(StreamStatus::Paused) | Some(StreamStatus::Error) => StreamStatus::Active,
    }
}

/// What to do with a rejected `play()` promise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRejection {
    /// The source cannot be played; the stream is marked as errored.
    MarkErrored,
    /// Interrupted by a pause or a source change.
    Ignore,
    Notify,
}

/// Maps the `DOMException` name of a rejected `play()` to its handling.
pub fn play_rejection(name: Option<&str>) -> PlayRejection {
    match name {
        Some("NotSupportedError") => PlayRejection::MarkErrored,
        Some("AbortError") => PlayRejection::Ignore,
        _ => PlayRejection::Notify,
    }
}

pub fn status_badge(video: &Video) -> String {
    let state = match video.stream_status {
        Some(StreamStatus::Paused) => "⏸ PAUSED",
        Some(StreamStatus::Error) => "✖ NO SIGNAL",
        Some(StreamStatus::Active) | None => "● LIVE",
    };

    match &video.resolution {
        Some(resolution) => format!("{} - {} - {}", state, video.title, resolution),
        None => format!("{} - {}", state, video.title),
    }
}

impl MainVideoPlayer {
    fn send_status(&mut self, status: StreamStatus) {
        if let Some(video) = &self.current_video {
            self.video_store
                .send(video_store::Request::UpdateStreamStatus(video.id.clone(), status));
        }
    }

    /// Brings the element in line with the stream status of the main video.
    fn sync_element(&self, ctx: &Context<Self>) -> Result<(), JsError> {
        let (element, video) = match (self.video_ref.cast::<HtmlVideoElement>(), &self.current_video) {
            (Some(element), Some(video)) => (element, video),
            (_, _) => return Ok(()),
        };

        match video.stream_status {
            Some(StreamStatus::Paused) if !element.paused() => element.pause()?,
            Some(StreamStatus::Active) | None if element.paused() => {
                let promise = element.play()?;
                ctx.link()
                    .send_future(async move { Message::PlayStarted(JsFuture::from(promise).await) });
            }
            _ => {}
        }

        Ok(())
    }

    fn view_surface(&self, ctx: &Context<Self>, video: &Video) -> Html {
        match video.playable_url() {
            Some(url) => html! {
                <video ref={self.video_ref.clone()} key={video.id.clone()} src={url.to_string()} autoplay=true muted=true loop=true playsinline=true
                    class={classes!(video.is_paused().then(|| "is-dimmed"))}
                    onerror={ctx.link().callback(|_: Event| Message::PlaybackError)}/>
            },
            None => html! {<div class="video-placeholder">{"no video source"}</div>},
        }
    }
}

impl Component for MainVideoPlayer {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            video_store: video_store::VideoStore::bridge(
                ctx.link().callback(Message::VideoStoreMessage),
            ),
            notifier: notifier::Notifier::dispatcher(),
            current_video: None,
            video_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::VideoStoreMessage(video_store::Response::Snapshot(snapshot)) => {
                let changed = self.current_video != snapshot.current_video;
                self.current_video = snapshot.current_video;
                changed
            }
            Message::VideoStoreMessage(_) => false,
            Message::TogglePlay => {
                let status = toggled_status(self.current_video.as_ref().and_then(|v| v.stream_status));
                self.send_status(status);
                false
            }
            Message::PlaybackError => {
                self.send_status(StreamStatus::Error);
                false
            }
            Message::PlayStarted(Ok(_)) => false,
            Message::PlayStarted(Err(e)) => {
                let name = e.dyn_ref::<DomException>().map(|exception| exception.name());

                match play_rejection(name.as_deref()) {
                    PlayRejection::MarkErrored => {
                        log::warn!("main video cannot be played: {:?}", name);
                        self.send_status(StreamStatus::Error);
                    }
                    PlayRejection::Ignore => log::debug!("play interrupted"),
                    PlayRejection::Notify => self
                        .notifier
                        .send(notifier::Request::NotifyError(JsError::from(e))),
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Err(e) = self.sync_element(ctx) {
            self.notifier.send(notifier::Request::NotifyError(e));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let video = match &self.current_video {
            Some(video) => video,
            None => return html! {<div class="card"><div class="card-content">{"no main video"}</div></div>},
        };
        let (icon, color) = match video.is_paused() {
            true => ("play_circle", "#52c41a"),
            false => ("pause_circle", "#1890ff"),
        };

        html! {
            <div class="card main-video">
                <header class="card-header">
                    <p class="card-header-title">{format!("Main Video Feed - {}", video.title)}</p>
                    <a class="card-header-icon" aria-label="play or pause" onclick={ctx.link().callback(|_| Message::TogglePlay)}>
                        <Icon name={icon} style={IconStyle::Filled} color={color.to_string()}/>
                    </a>
                </header>
                <div class="card-content video-frame">
                    { self.view_surface(ctx, video) }
                    <span class="video-badge">{status_badge(video)}</span>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_active_and_paused() {
        assert_eq!(toggled_status(Some(StreamStatus::Active)), StreamStatus::Paused);
        assert_eq!(toggled_status(Some(StreamStatus::Paused)), StreamStatus::Active);
        assert_eq!(toggled_status(None), StreamStatus::Paused);
    }

    #[test]
    fn toggle_retries_errored_stream() {
        assert_eq!(toggled_status(Some(StreamStatus::Error)), StreamStatus::Active);
    }

    #[test]
    fn unsupported_source_marks_stream_errored() {
        assert_eq!(play_rejection(Some("NotSupportedError")), PlayRejection::MarkErrored);
    }

    #[test]
    fn interrupted_play_is_ignored() {
        assert_eq!(play_rejection(Some("AbortError")), PlayRejection::Ignore);
    }

    #[test]
    fn other_rejections_are_notified() {
        assert_eq!(play_rejection(Some("NotAllowedError")), PlayRejection::Notify);
        assert_eq!(play_rejection(None), PlayRejection::Notify);
    }

    #[test]
    fn badge_shows_state_title_and_resolution() {
        let mut video = Video::new("cam-1", "https://example.com/v.mp4", "Camera A");

        assert_eq!(status_badge(&video), "● LIVE - Camera A");
        video.resolution = Some("1280x720".into());
        video.stream_status = Some(StreamStatus::Paused);
        assert_eq!(status_badge(&video), "⏸ PAUSED - Camera A - 1280x720");
    }
}
