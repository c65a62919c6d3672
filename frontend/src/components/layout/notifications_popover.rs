use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{fixtures, ops, Notification, NotificationKind};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Delay before an opened panel marks everything read on its own.
const AUTO_READ_DELAY_MS: u32 = 1_500;

enum FeedAction {
    MarkAllRead,
    Dismiss(String),
}

/// Local notification list. Reduced so the delayed mark-all-read acts on the
/// list as it is when the timer fires; anything dismissed during the delay
/// stays dismissed.
struct NotificationFeed {
    items: Vec<Notification>,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self { items: fixtures::notifications() }
    }
}

impl Reducible for NotificationFeed {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: FeedAction) -> Rc<Self> {
        let items = match action {
            FeedAction::MarkAllRead => ops::mark_all_read(&self.items),
            FeedAction::Dismiss(id) => ops::dismiss_notification(&self.items, &id),
        };
        Rc::new(Self { items })
    }
}

/// Bell trigger plus dropdown panel with local read/unread tracking.
///
/// Opening the panel with unread items schedules a delayed mark-all-read. The
/// `Timeout` handle is kept so the pending action is cancelled (by drop) when
/// the panel closes, the component unmounts, or the user marks everything read
/// manually first.
#[function_component(NotificationsPopover)]
pub fn notifications_popover() -> Html {
    let notifs = use_reducer(NotificationFeed::default);
    let is_open = use_state(|| false);
    let pending_auto_read = use_mut_ref(|| Option::<Timeout>::None);

    let unread = ops::unread_count(&notifs.items);

    let mark_all_read = {
        let notifs = notifs.clone();
        let pending_auto_read = pending_auto_read.clone();
        Callback::from(move |_: MouseEvent| {
            // Manual action supersedes a pending delayed one
            pending_auto_read.borrow_mut().take();
            notifs.dispatch(FeedAction::MarkAllRead);
        })
    };

    let toggle = {
        let notifs = notifs.clone();
        let is_open = is_open.clone();
        let pending_auto_read = pending_auto_read.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = !*is_open;
            if opening && ops::unread_count(&notifs.items) > 0 {
                let notifs = notifs.clone();
                let timeout = Timeout::new(AUTO_READ_DELAY_MS, move || {
                    Logger::debug_with_component("notifications", "auto mark-all-read fired");
                    notifs.dispatch(FeedAction::MarkAllRead);
                });
                // Replacing a previous handle drops (cancels) it
                *pending_auto_read.borrow_mut() = Some(timeout);
            } else {
                pending_auto_read.borrow_mut().take();
            }
            is_open.set(opening);
        })
    };

    let close = {
        let is_open = is_open.clone();
        let pending_auto_read = pending_auto_read.clone();
        Callback::from(move |_: MouseEvent| {
            pending_auto_read.borrow_mut().take();
            is_open.set(false);
        })
    };

    let panel = if *is_open {
        html! {
            <>
                <div class="popover-backdrop" onclick={close} />
                <div class="notifications-panel">
                    <div class="notifications-header">
                        <span class="notifications-title">{"Уведомления"}</span>
                        {if unread > 0 {
                            html! { <span class="notifications-unread-chip">{unread}</span> }
                        } else {
                            html! {}
                        }}
                        <button class="notifications-mark-read" onclick={mark_all_read}>
                            {"Прочитать все"}
                        </button>
                    </div>

                    <div class="notifications-list">
                        {for notifs.items.iter().map(|n| {
                            let icon = match n.kind {
                                NotificationKind::Payment => "💳",
                                NotificationKind::Price => "📈",
                                NotificationKind::Family => "👥",
                                NotificationKind::Promo => "🎁",
                            };
                            let dismiss = {
                                let notifs = notifs.clone();
                                let id = n.id.clone();
                                Callback::from(move |_: MouseEvent| {
                                    notifs.dispatch(FeedAction::Dismiss(id.clone()));
                                })
                            };
                            html! {
                                <div
                                    key={n.id.clone()}
                                    class={if n.read { "notification-row" } else { "notification-row notification-unread" }}
                                >
                                    <span class="notification-icon">{icon}</span>
                                    <div class="notification-body">
                                        <div class="notification-top">
                                            <span class="notification-title">{&n.title}</span>
                                            <span class="notification-time">{&n.time}</span>
                                        </div>
                                        <div class="notification-description">{&n.description}</div>
                                    </div>
                                    <button class="notification-dismiss" onclick={dismiss}>{"✕"}</button>
                                </div>
                            }
                        })}

                        {if notifs.items.is_empty() {
                            html! {
                                <div class="notifications-empty">{"Нет уведомлений"}</div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="notifications">
            <button class="notifications-bell" onclick={toggle}>
                {"🔔"}
                {if unread > 0 {
                    html! { <span class="notifications-badge">{unread}</span> }
                } else {
                    html! {}
                }}
            </button>
            {panel}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_mark_all_read_keeps_mid_delay_dismissal() {
        // Dismiss while the auto-read is still pending; the later mark-all-read
        // must not bring the dismissed item back
        let feed = Rc::new(NotificationFeed::default());
        let before = feed.items.len();
        let dismissed = feed.items[0].id.clone();

        let feed = feed.reduce(FeedAction::Dismiss(dismissed.clone()));
        let feed = feed.reduce(FeedAction::MarkAllRead);

        assert_eq!(feed.items.len(), before - 1);
        assert!(feed.items.iter().all(|n| n.read));
        assert!(!feed.items.iter().any(|n| n.id == dismissed));
    }
}
