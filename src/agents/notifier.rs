use std::collections::{HashSet, VecDeque};
use yew_agent::{Agent, AgentLink, Context, HandlerId};

use crate::objects::JsError;

pub struct Notifier {
    subscribers: HashSet<HandlerId>,
    link: AgentLink<Self>,
    notifications: VecDeque<Notification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub severity: NotificationSeverity,
}

#[derive(Debug)]
pub enum Request {
    Notify(Notification),
    NotifyError(JsError),
    Dismiss,
}

#[derive(Debug, Clone)]
pub enum Response {
    Notification(Option<Notification>),
}

impl Notifier {
    fn notify_subscribed(&self) {
        for subscriber in &self.subscribers {
            if subscriber.is_respondable() {
                self.link.respond(
                    *subscriber,
                    Response::Notification(self.notifications.front().cloned()),
                );
            }
        }
    }

    fn push(&mut self, notification: Notification) {
        match notification.severity {
            NotificationSeverity::Error => log::error!("{}", notification.text),
            NotificationSeverity::Warning => log::warn!("{}", notification.text),
            NotificationSeverity::Info => log::info!("{}", notification.text),
        }
        self.notifications.push_back(notification);
    }
}

impl Agent for Notifier {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Request;
    type Output = Response;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
            notifications: VecDeque::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        match msg {
            Request::Notify(notification) => self.push(notification),
            Request::NotifyError(err) => self.push(Notification {
                severity: NotificationSeverity::Error,
                text: err.description,
            }),
            Request::Dismiss => {
                self.notifications.pop_front();
            }
        }
        self.notify_subscribed();
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
        self.notify_subscribed();
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
