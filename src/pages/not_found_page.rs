use crate::components::router::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

pub struct NotFoundPage {}

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="section has-text-centered">
                <p class="title">{"404"}</p>
                <p class="subtitle">{"The requested page does not exist."}</p>
                <Link<AppRoute> classes={classes!("button", "is-primary")} to={AppRoute::Dashboard}>{"Back to Dashboard"}</Link<AppRoute>>
            </section>
        }
    }
}
