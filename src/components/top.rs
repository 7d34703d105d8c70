use super::{
    main_layout::MainLayout,
    router::{switch, AppRoute},
};
use crate::{agents::video_store, objects::DashboardConfig};
use yew::{prelude::*, Component};
use yew_agent::{Bridge, Bridged};
use yew_router::prelude::*;

/// Application root. Holds a bridge to the video store so the slots live as long as the page
/// does, whichever route is shown.
pub struct Top {
    _video_store: Box<dyn Bridge<video_store::VideoStore>>,
}

pub enum Message {
    VideoStoreMessage(video_store::Response),
}

#[derive(Properties, Clone, PartialEq)]
pub struct TopProps {
    pub config: DashboardConfig,
}

impl Component for Top {
    type Message = Message;
    type Properties = TopProps;

    fn create(ctx: &Context<Self>) -> Self {
        let video_store_cb = ctx.link().callback(Message::VideoStoreMessage);

        Self {
            _video_store: video_store::VideoStore::bridge(video_store_cb),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::VideoStoreMessage(_resp) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<DashboardConfig> context={ctx.props().config.clone()}>
                <BrowserRouter>
                    <MainLayout>
                        <Switch<AppRoute> render={Switch::render(switch)}/>
                    </MainLayout>
                </BrowserRouter>
            </ContextProvider<DashboardConfig>>
        }
    }
}
