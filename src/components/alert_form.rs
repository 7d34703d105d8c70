use crate::{
    agents::notifier::{self, Notification, NotificationSeverity},
    objects::{
        alert::{AlertDraft, DraftField, NewAlert, DRAFT_ALERT_TYPES, DRAFT_SEVERITIES},
        JsError,
    },
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

/// "Add Alert" modal. Nothing is stored; a valid submission is logged.
pub struct AlertForm {
    draft: AlertDraft,
    errors: Vec<DraftField>,
    notifier: Dispatcher<notifier::Notifier>,
}

pub enum Message {
    Set(DraftField, String),
    Submit,
    Cancel,
}

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub active: bool,
    pub on_close: Callback<()>,
}

fn submit(alert: &NewAlert) -> Result<(), JsError> {
    log::info!("form values: {}", serde_json::to_string(alert)?);
    Ok(())
}

impl AlertForm {
    fn view_error(&self, field: DraftField) -> Html {
        match self.errors.contains(&field) {
            true => html! {<p class="help is-danger">{field.required_message()}</p>},
            false => html! {},
        }
    }

    fn view_select(&self, ctx: &Context<Self>, label: &str, field: DraftField, options: &[&str], value: &str) -> Html {
        html! {
            <div class="field">
                <label class="label">{label}</label>
                <div class="control">
                    <div class="select is-fullwidth">
                        <select onchange={ctx.link().callback(move |e: Event| Message::Set(field, e.target_unchecked_into::<HtmlSelectElement>().value()))}>
                            <option value="" selected={value.is_empty()}>{format!("Select {}", label.to_lowercase())}</option>
                            { options.iter().map(|option| html! {
                                <option value={option.to_string()} selected={*option == value}>{option}</option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                </div>
                { self.view_error(field) }
            </div>
        }
    }
}

impl Component for AlertForm {
    type Message = Message;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: AlertDraft::default(),
            errors: Vec::new(),
            notifier: notifier::Notifier::dispatcher(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Set(field, value) => {
                self.draft.set(field, value);
                self.errors.retain(|f| *f != field);
            }
            Message::Submit => match self.draft.validate() {
                Ok(alert) => {
                    match submit(&alert) {
                        Ok(()) => self.notifier.send(notifier::Request::Notify(Notification {
                            text: format!("{} alert for {} submitted", alert.alert_type, alert.location),
                            severity: NotificationSeverity::Info,
                        })),
                        Err(e) => self.notifier.send(notifier::Request::NotifyError(e)),
                    }
                    self.draft = AlertDraft::default();
                    self.errors.clear();
                    ctx.props().on_close.emit(());
                }
                Err(fields) => self.errors = fields,
            },
            Message::Cancel => {
                self.errors.clear();
                ctx.props().on_close.emit(());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().active {
            return html! {};
        }

        html! {
            <div class="modal is-active">
                <div class="modal-background" onclick={ctx.link().callback(|_| Message::Cancel)}></div>
                <div class="modal-card">
                    <header class="modal-card-head">
                        <p class="modal-card-title">{"Add New Alert"}</p>
                        <button class="delete" aria-label="close" onclick={ctx.link().callback(|_| Message::Cancel)}></button>
                    </header>
                    <section class="modal-card-body">
                        { self.view_select(ctx, "Alert Type", DraftField::AlertType, &DRAFT_ALERT_TYPES, &self.draft.alert_type) }
                        { self.view_select(ctx, "Severity", DraftField::Severity, &DRAFT_SEVERITIES, &self.draft.severity) }
                        <div class="field">
                            <label class="label">{"Location"}</label>
                            <div class="control">
                                <input class="input" type="text" placeholder="Enter location" value={self.draft.location.clone()}
                                    oninput={ctx.link().callback(|e: InputEvent| Message::Set(DraftField::Location, e.target_unchecked_into::<HtmlInputElement>().value()))}/>
                            </div>
                            { self.view_error(DraftField::Location) }
                        </div>
                        <div class="field">
                            <label class="label">{"Description"}</label>
                            <div class="control">
                                <textarea class="textarea" rows="4" placeholder="Enter alert description" value={self.draft.description.clone()}
                                    oninput={ctx.link().callback(|e: InputEvent| Message::Set(DraftField::Description, e.target_unchecked_into::<HtmlTextAreaElement>().value()))}/>
                            </div>
                            { self.view_error(DraftField::Description) }
                        </div>
                    </section>
                    <footer class="modal-card-foot">
                        <button class="button is-primary" onclick={ctx.link().callback(|_| Message::Submit)}>{"Submit"}</button>
                        <button class="button" onclick={ctx.link().callback(|_| Message::Cancel)}>{"Cancel"}</button>
                    </footer>
                </div>
            </div>
        }
    }
}
