use crate::{
    agents::notifier,
    objects::console_entry::{pick_template, ConsoleLog},
    utils::{self, Interval},
};
use web_sys::Element;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

/// Scrolling audit log fed by a timer with canned messages.
pub struct SystemConsole {
    log: ConsoleLog,
    interval: Option<Interval>,
    _notifier: Dispatcher<notifier::Notifier>,
    list_ref: NodeRef,
}

pub enum Message {
    Tick,
}

impl Component for SystemConsole {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = utils::config_of(ctx);
        let mut notifier = notifier::Notifier::dispatcher();
        let interval = match Interval::new(
            config.console_interval_ms,
            ctx.link().callback(|_| Message::Tick),
        ) {
            Ok(interval) => Some(interval),
            Err(e) => {
                notifier.send(notifier::Request::NotifyError(e));
                None
            }
        };

        Self {
            log: ConsoleLog::new(config.console_history_limit),
            interval,
            _notifier: notifier,
            list_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Tick => {
                let entry = self
                    .log
                    .push_template(pick_template(utils::random_sample()), utils::local_time_string());
                log::debug!("console entry {} from {}", entry.id, entry.source);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(list) = self.list_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="box system-console">
                <p class="heading">{"System Console"}</p>
                <div class="console-lines" ref={self.list_ref.clone()}>
                    { self.log.entries().map(|entry| html! {
                        <p key={entry.id.to_string()} class="is-family-monospace is-size-7">
                            <span class="has-text-grey">{format!("[{}] ", entry.time)}</span>
                            <span style={format!("color: {}", entry.kind.color())}>{entry.kind.tag()}</span>
                            {format!(" {} ", entry.message)}
                            <span class="has-text-grey">{format!("({})", entry.source)}</span>
                        </p>
                    }).collect::<Html>() }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.interval = None;
    }
}
