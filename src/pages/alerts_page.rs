use crate::{
    components::{AlertForm, Icon, IconStyle},
    objects::alert::{mock_alerts, Alert, AlertFilter, AlertLevel, AlertStatus, AlertType, FILTER_ALL},
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub struct AlertsPage {
    alerts: Vec<Alert>,
    filter: AlertFilter,
    form_active: bool,
}

pub enum Message {
    FilterType(String),
    FilterLevel(String),
    FilterStatus(String),
    OpenForm,
    CloseForm,
}

fn select_value(e: Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

impl AlertsPage {
    fn view_filter(&self, label: &str, options: Vec<(&'static str, &'static str)>, onchange: Callback<Event>) -> Html {
        html! {
            <div class="control">
                <div class="select">
                    <select aria-label={label.to_string()} onchange={onchange}>
                        <option value={FILTER_ALL}>{format!("All {}", label)}</option>
                        { options.into_iter().map(|(value, text)| html! {<option value={value}>{text}</option>}).collect::<Html>() }
                    </select>
                </div>
            </div>
        }
    }

    fn view_alert(&self, alert: &Alert) -> Html {
        html! {
            <tr key={alert.id.clone()}>
                <td>{&alert.factory}</td>
                <td><span class={classes!("tag", alert.alert_type.color())}>{alert.alert_type.label()}</span></td>
                <td>
                    <span class={classes!("tag", alert.level.color())}>
                        <Icon name={alert.level.icon()} style={IconStyle::Outlined}/>
                        {alert.level.label()}
                    </span>
                </td>
                <td>{&alert.message}</td>
                <td>{&alert.time}</td>
                <td><span class={classes!("tag", alert.status.color())}>{alert.status.label()}</span></td>
                <td>
                    <div class="buttons are-small">
                        <button class="button is-link is-light">{"Handle"}</button>
                        <button class="button is-light">{"Details"}</button>
                    </div>
                </td>
            </tr>
        }
    }
}

impl Component for AlertsPage {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            alerts: mock_alerts(),
            filter: AlertFilter::default(),
            form_active: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::FilterType(key) => self.filter.set_type_key(&key),
            Message::FilterLevel(key) => self.filter.set_level_key(&key),
            Message::FilterStatus(key) => self.filter.set_status_key(&key),
            Message::OpenForm => self.form_active = true,
            Message::CloseForm => self.form_active = false,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="box">
                <div class="level">
                    <div class="level-left">
                        <div class="field is-grouped">
                            { self.view_filter("Types", AlertType::ALL.iter().map(|t| (t.label(), t.label())).collect(),
                                link.callback(|e: Event| Message::FilterType(select_value(e)))) }
                            { self.view_filter("Levels", AlertLevel::ALL.iter().map(|l| (l.key(), l.label())).collect(),
                                link.callback(|e: Event| Message::FilterLevel(select_value(e)))) }
                            { self.view_filter("Statuses", AlertStatus::ALL.iter().map(|s| (s.key(), s.label())).collect(),
                                link.callback(|e: Event| Message::FilterStatus(select_value(e)))) }
                        </div>
                    </div>
                    <div class="level-right">
                        <button class="button is-primary" onclick={link.callback(|_| Message::OpenForm)}>
                            <Icon name="add" style={IconStyle::Filled}/>
                            <span>{"Add Alert"}</span>
                        </button>
                    </div>
                </div>
                <table class="table is-fullwidth is-hoverable">
                    <thead>
                        <tr>
                            <th>{"Factory"}</th>
                            <th>{"Type"}</th>
                            <th>{"Level"}</th>
                            <th>{"Message"}</th>
                            <th>{"Time"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { self.filter.apply(&self.alerts).into_iter().map(|a| self.view_alert(a)).collect::<Html>() }
                    </tbody>
                </table>
                <AlertForm active={self.form_active} on_close={link.callback(|_| Message::CloseForm)}/>
            </div>
        }
    }
}
