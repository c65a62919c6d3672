use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Default time a toast stays on screen.
pub const DEFAULT_TOAST_MS: u32 = 3500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Info,
}

/// A transient notification. Emission is fire-and-forget: screens push a toast
/// and move on; dismissal timing is owned entirely by the `Toaster`.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, description)
    }

    fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        thread_local! {
            static NEXT_ID: Cell<u64> = Cell::new(0);
        }
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        Self {
            id,
            kind,
            title: title.into(),
            description: description.into(),
            duration_ms: DEFAULT_TOAST_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

enum ToastsAction {
    Push(Toast),
    Dismiss(u64),
}

/// The on-screen toast stack. Mutations go through the reducer so a delayed
/// dismissal applies to the stack as it is when the timer fires, not to the
/// stack as it was when the toast appeared.
#[derive(Default, PartialEq)]
struct ToastStack {
    items: Vec<Toast>,
}

impl Reducible for ToastStack {
    type Action = ToastsAction;

    fn reduce(self: Rc<Self>, action: ToastsAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastsAction::Push(toast) => items.push(toast),
            ToastsAction::Dismiss(id) => items.retain(|t| t.id != id),
        }
        Rc::new(Self { items })
    }
}

/// Shared handle screens use to emit toasts.
#[hook]
pub fn use_toaster() -> (Vec<Toast>, Callback<Toast>) {
    let toasts = use_reducer(ToastStack::default);

    let push = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            let duration = toast.duration_ms;
            toasts.dispatch(ToastsAction::Push(toast));

            // Auto-dismiss after the caller-supplied duration
            let toasts = toasts.clone();
            spawn_local(async move {
                TimeoutFuture::new(duration).await;
                toasts.dispatch(ToastsAction::Dismiss(id));
            });
        })
    };

    (toasts.items.clone(), push)
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismissal_only_removes_its_own_toast() {
        // Two toasts alive at once; the first dismissal must not touch the second
        let a = Toast::success("a", "");
        let b = Toast::success("b", "");
        let (a_id, b_id) = (a.id, b.id);

        let stack = Rc::new(ToastStack::default());
        let stack = stack.reduce(ToastsAction::Push(a));
        let stack = stack.reduce(ToastsAction::Push(b));
        let stack = stack.reduce(ToastsAction::Dismiss(a_id));

        assert_eq!(stack.items.len(), 1);
        assert_eq!(stack.items[0].id, b_id);
    }

    #[test]
    fn test_dismissing_an_already_removed_toast_is_a_noop() {
        let a = Toast::info("a", "");
        let a_id = a.id;

        let stack = Rc::new(ToastStack::default());
        let stack = stack.reduce(ToastsAction::Push(a));
        let stack = stack.reduce(ToastsAction::Dismiss(a_id));
        let stack = stack.reduce(ToastsAction::Dismiss(a_id));

        assert!(stack.items.is_empty());
    }
}

/// Bottom-right stack of transient notifications.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            {for props.toasts.iter().map(|toast| {
                let kind_class = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Info => "toast toast-info",
                };
                html! {
                    <div key={toast.id.to_string()} class={kind_class}>
                        <div class="toast-title">{&toast.title}</div>
                        <div class="toast-description">{&toast.description}</div>
                    </div>
                }
            })}
        </div>
    }
}
