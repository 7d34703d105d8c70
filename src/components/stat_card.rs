use super::{Icon, IconStyle};
use yew::prelude::*;

/// Card with a heading, a large value and an optional icon; clickable when `onclick` is set.
pub struct StatCard {}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub title: String,
    pub value: String,
    #[prop_or_default]
    pub suffix: Option<String>,
    #[prop_or_default]
    pub icon: Option<String>,
    #[prop_or_default]
    pub color: Option<String>,
    #[prop_or_default]
    pub selected: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
}

impl Component for StatCard {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let border = match (props.selected, &props.color) {
            (true, Some(color)) => Some(format!("border: 2px solid {}", color)),
            (_, _) => None,
        };
        let onclick = props.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
        let clickable = props.onclick.as_ref().map(|_| "is-clickable");

        html! {
            <div class={classes!("box", "has-text-centered", clickable)} style={border} onclick={onclick}>
                <p class="heading">{&props.title}</p>
                <p class="title is-4">
                    {match &props.icon {
                        Some(icon) => html! {<Icon name={icon.clone()} style={IconStyle::Outlined} color={props.color.clone()}/>},
                        None => html! {},
                    }}
                    {&props.value}
                    {match &props.suffix {
                        Some(suffix) => html! {<span class="is-size-6">{format!(" {}", suffix)}</span>},
                        None => html! {},
                    }}
                </p>
            </div>
        }
    }
}
