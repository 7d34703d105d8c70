use super::{Icon, IconStyle};
use crate::{
    agents::video_store::{self, VideoSnapshot},
    objects::{StreamStatus, Video},
};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

/// Camera grid; clicking a camera swaps it with the main video.
pub struct VideoGrid {
    video_store: Box<dyn Bridge<video_store::VideoStore>>,
    snapshot: VideoSnapshot,
}

pub enum Message {
    VideoStoreMessage(video_store::Response),
    Swap(String),
    PlaybackError(String),
}

fn status_dot(video: &Video) -> (&'static str, &'static str) {
    match video.is_offline() {
        true => ("#ff4d4f", "Offline"),
        false => ("#52c41a", "Online"),
    }
}

impl VideoGrid {
    fn view_video(&self, ctx: &Context<Self>, video: &Video) -> Html {
        let id = video.id.clone();
        let error_id = video.id.clone();
        let (dot_color, status_label) = status_dot(video);
        let classes = classes!(
            "card",
            "is-clickable",
            self.snapshot.is_previous_main(video).then(|| "is-previous-main"),
            video.is_errored().then(|| "is-dimmed"),
        );

        html! {
            <div class="column is-one-third">
                <div class={classes} title={format!("{} - {}", video.title, status_label)}
                    onclick={ctx.link().callback(move |_| Message::Swap(id.clone()))}>
                    <div class="card-image">
                        {match video.playable_url() {
                            Some(url) => html! {
                                <video key={video.id.clone()} src={url.to_string()} autoplay=true muted=true loop=true playsinline=true
                                    onerror={ctx.link().callback(move |_: Event| Message::PlaybackError(error_id.clone()))}/>
                            },
                            None => html! {<div class="video-placeholder"><Icon name="videocam_off" style={IconStyle::Outlined}/></div>},
                        }}
                    </div>
                    <div class="card-content is-size-7">
                        <p class="has-text-weight-bold">
                            <span style={format!("color: {}", dot_color)}>{"● "}</span>
                            {&video.title}
                        </p>
                        <p class="has-text-grey">{video.location.clone().unwrap_or_default()}</p>
                    </div>
                </div>
            </div>
        }
    }
}

impl Component for VideoGrid {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            video_store: video_store::VideoStore::bridge(
                ctx.link().callback(Message::VideoStoreMessage),
            ),
            snapshot: VideoSnapshot::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::VideoStoreMessage(video_store::Response::Snapshot(snapshot)) => {
                let changed = self.snapshot != snapshot;
                self.snapshot = snapshot;
                changed
            }
            Message::VideoStoreMessage(_) => false,
            Message::Swap(id) => {
                self.video_store
                    .send(video_store::Request::SwapWithMainVideo(id));
                false
            }
            Message::PlaybackError(id) => {
                log::warn!("playback of \"{}\" failed", id);
                self.video_store
                    .send(video_store::Request::UpdateStreamStatus(id, StreamStatus::Error));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="box">
                <p class="heading">{"Cameras"}</p>
                <div class="columns is-multiline is-mobile">
                    { self.snapshot.grid_videos.iter().map(|video| self.view_video(ctx, video)).collect::<Html>() }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::OnlineStatus;

    #[test]
    fn offline_cameras_get_a_red_dot() {
        let mut video = Video::new("cam-6", "", "Camera F");

        assert_eq!(status_dot(&video).1, "Online");
        video.status = Some(OnlineStatus::Offline);
        assert_eq!(status_dot(&video), ("#ff4d4f", "Offline"));
    }
}
