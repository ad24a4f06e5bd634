/// Toast host: renders the queue and runs each toast's timers

use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::notify::{Notification, NotificationKind, NotificationQueue};

pub enum NotifyAction {
    Push(NotificationKind, String),
    Leave(u64),
    Dismiss(u64),
}

impl Reducible for NotificationQueue {
    type Action = NotifyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            NotifyAction::Push(kind, message) => {
                queue.push(kind, message);
            }
            NotifyAction::Leave(id) => {
                queue.mark_leaving(id);
            }
            NotifyAction::Dismiss(id) => {
                queue.dismiss(id);
            }
        }
        queue.into()
    }
}

pub type Notifier = UseReducerDispatcher<NotificationQueue>;

pub fn notify(notifier: &Notifier, kind: NotificationKind, message: impl Into<String>) {
    notifier.dispatch(NotifyAction::Push(kind, message.into()));
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    pub items: Vec<Notification>,
    pub notifier: Notifier,
    pub lifetime_ms: u32,
    pub exit_ms: u32,
}

#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    html! {
        <div class="notification-host">
            {for props.items.iter().map(|item| html! {
                <Toast
                    key={item.id}
                    notification={item.clone()}
                    notifier={props.notifier.clone()}
                    lifetime_ms={props.lifetime_ms}
                    exit_ms={props.exit_ms}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notification: Notification,
    notifier: Notifier,
    lifetime_ms: u32,
    exit_ms: u32,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.notification.id;

    {
        let notifier = props.notifier.clone();
        let lifetime_ms = props.lifetime_ms;
        use_effect_with((), move |_| {
            let timeout = Timeout::new(lifetime_ms, move || {
                notifier.dispatch(NotifyAction::Leave(id));
            });
            move || drop(timeout)
        });
    }

    {
        let notifier = props.notifier.clone();
        let exit_ms = props.exit_ms;
        use_effect_with(props.notification.leaving, move |leaving| {
            let timeout = leaving.then(|| {
                Timeout::new(exit_ms, move || {
                    notifier.dispatch(NotifyAction::Dismiss(id));
                })
            });
            move || drop(timeout)
        });
    }

    let class = classes!(
        "notification",
        props.notification.kind.css_class(),
        props.notification.leaving.then_some("notification-leaving"),
    );

    html! {
        <div {class} role="status">
            {&props.notification.message}
        </div>
    }
}
