use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconStyle {
    Filled,
    Outlined,
}

#[derive(Clone, PartialEq, Properties)]
pub struct IconProperties {
    pub name: String,
    #[prop_or(IconStyle::Outlined)]
    pub style: IconStyle,
    #[prop_or_default]
    pub color: Option<String>,
}

pub struct Icon {}

impl Component for Icon {
    type Message = ();
    type Properties = IconProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = props.color.as_ref().map(|color| format!("color: {}", color));
        let class = match props.style {
            IconStyle::Filled => "material-icons",
            IconStyle::Outlined => "material-icons-outlined",
        };

        html! {<span class="icon" style={style}><span class={class}>{&props.name}</span></span>}
    }
}
