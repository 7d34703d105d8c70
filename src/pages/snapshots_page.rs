use crate::{
    agents::notifier,
    objects::snapshot::{mock_snapshots, parse_range_input, Snapshot, SnapshotRange},
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_agent::{Dispatched, Dispatcher};

pub struct SnapshotsPage {
    snapshots: Vec<Snapshot>,
    range: SnapshotRange,
    notifier: Dispatcher<notifier::Notifier>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Start,
    End,
}

pub enum Message {
    SetBound(Bound, String),
}

impl SnapshotsPage {
    fn view_bound(&self, ctx: &Context<Self>, bound: Bound, label: &str) -> Html {
        html! {
            <div class="field">
                <label class="label">{label}</label>
                <div class="control">
                    <input class="input" type="datetime-local"
                        onchange={ctx.link().callback(move |e: Event| Message::SetBound(bound, e.target_unchecked_into::<HtmlInputElement>().value()))}/>
                </div>
            </div>
        }
    }
}

impl Component for SnapshotsPage {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            snapshots: mock_snapshots(),
            range: SnapshotRange::default(),
            notifier: notifier::Notifier::dispatcher(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::SetBound(bound, value) => match parse_range_input(&value) {
                Ok(time) => {
                    match bound {
                        Bound::Start => self.range.start = time,
                        Bound::End => self.range.end = time,
                    }
                    true
                }
                Err(e) => {
                    self.notifier.send(notifier::Request::NotifyError(e));
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let shown = self.range.apply(&self.snapshots);

        html! {
            <div class="box">
                <p class="title is-4">{"Snapshots"}</p>
                <div class="field is-grouped">
                    <div class="control">{ self.view_bound(ctx, Bound::Start, "From") }</div>
                    <div class="control">{ self.view_bound(ctx, Bound::End, "To") }</div>
                </div>
                <div class="columns is-multiline">
                    { shown.into_iter().map(|snapshot| html! {
                        <div class="column is-one-third" key={snapshot.id.clone()}>
                            <div class="card">
                                <div class="card-image">
                                    <figure class="image is-16by9">
                                        <img src={snapshot.url.clone()} alt={format!("Snapshot {}", snapshot.id)}/>
                                    </figure>
                                </div>
                                <div class="card-content">
                                    <p class="has-text-weight-bold">{format!("Snapshot {}", snapshot.id)}</p>
                                    <p class="has-text-grey is-size-7">{&snapshot.time}</p>
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>
        }
    }
}
