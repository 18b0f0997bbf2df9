//! User notifications (toasts)
//!
//! `NotificationCenter` keeps the queue in a signal; `NotificationHost`
//! renders it and dismisses each entry after the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Fire-and-forget sink for user-facing messages
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    pub items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            })
        });
    }
}

#[component]
pub fn NotificationHost(center: NotificationCenter, dismiss_after_ms: u32) -> impl IntoView {
    view! {
        <div class="notification-host">
            <For
                each=move || center.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    spawn_local(async move {
                        TimeoutFuture::new(dismiss_after_ms).await;
                        center.dismiss(id);
                    });
                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };
                    view! {
                        <MessageBar intent=intent>
                            <div class="notification" on:click=move |_| center.dismiss(id)>
                                <strong class="notification__title">{n.title.clone()}</strong>
                                " "
                                <span class="notification__message">{n.message.clone()}</span>
                            </div>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_appends_in_order_and_dismiss_removes() {
        let center = NotificationCenter::new();
        center.notify(NotificationKind::Success, "Succès", "ok");
        center.notify(NotificationKind::Error, "Erreur", "ko");

        let items = center.items.get_untracked();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, NotificationKind::Success);
        assert_eq!(items[1].message, "ko");
        assert_ne!(items[0].id, items[1].id);

        center.dismiss(items[0].id);
        let items = center.items.get_untracked();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Erreur");
    }
}
