use crate::{
    agents::video_store,
    objects::{StreamStatus, Video},
};
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

/// Region drawn on top of the video, positioned in percent of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOverlay {
    pub label: Option<String>,
    pub class: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl RegionOverlay {
    pub fn new(class: &str, color: &str, (left, top, width, height): (f64, f64, f64, f64)) -> Self {
        Self {
            label: None,
            class: class.into(),
            left,
            top,
            width,
            height,
            color: color.into(),
        }
    }

    pub fn with_label(self, label: &str) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}%; height: {}%; border-color: {}",
            self.left, self.top, self.width, self.height, self.color
        )
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub overlays: Vec<RegionOverlay>,
}

/// Main video with annotated regions, as used by the video monitoring pages.
pub struct MonitorVideo {
    video_store: Box<dyn Bridge<video_store::VideoStore>>,
    current_video: Option<Video>,
}

pub enum Message {
    VideoStoreMessage(video_store::Response),
    PlaybackError,
}

impl Component for MonitorVideo {
    type Message = Message;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            video_store: video_store::VideoStore::bridge(
                ctx.link().callback(Message::VideoStoreMessage),
            ),
            current_video: None,
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
            Message::PlaybackError => {
                if let Some(video) = &self.current_video {
                    log::warn!("playback of \"{}\" failed", video.id);
                    self.video_store.send(video_store::Request::UpdateStreamStatus(
                        video.id.clone(),
                        StreamStatus::Error,
                    ));
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let surface = match self.current_video.as_ref().and_then(|v| v.playable_url().map(|url| (v, url))) {
            Some((video, url)) => html! {
                <video key={video.id.clone()} src={url.to_string()} controls=true autoplay=true muted=true loop=true
                    onerror={ctx.link().callback(|_: Event| Message::PlaybackError)}/>
            },
            None => html! {<div class="video-placeholder">{"no video source"}</div>},
        };

        html! {
            <div class="card">
                <header class="card-header">
                    <p class="card-header-title">{&ctx.props().title}</p>
                </header>
                <div class="card-content video-frame">
                    {surface}
                    { ctx.props().overlays.iter().map(|overlay| html! {
                        <div class={classes!("region-overlay", overlay.class.clone())} style={overlay.style()}>
                            {match &overlay.label {
                                Some(label) => html! {<span class="tag is-dark">{label}</span>},
                                None => html! {},
                            }}
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_style_positions_in_percent() {
        let overlay = RegionOverlay::new("is-pulsing", "#ff4d4f", (30.0, 40.0, 20.0, 15.0)).with_label("Alert");

        assert_eq!(
            overlay.style(),
            "left: 30%; top: 40%; width: 20%; height: 15%; border-color: #ff4d4f"
        );
        assert_eq!(overlay.label.as_deref(), Some("Alert"));
    }
}
