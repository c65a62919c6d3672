use shared::Subscription;
use yew::prelude::*;

use crate::components::service_icon::ServiceIcon;

const CATEGORIES: [&str; 5] = ["Работа", "Развлечения", "Обучение", "Фитнес", "Другое"];

#[derive(Properties, PartialEq)]
pub struct SubscriptionSettingsSheetProps {
    /// Snapshot of the staged subscription; None keeps the sheet closed
    pub subscription: Option<Subscription>,
    pub on_close: Callback<()>,
    /// Routes the cancel mutation back to the dashboard's collection
    pub on_cancel: Callback<String>,
}

/// Right-hand settings sheet for an active subscription. Cancelling takes two
/// clicks: the first arms the button, the second commits the mutation.
#[function_component(SubscriptionSettingsSheet)]
pub fn subscription_settings_sheet(props: &SubscriptionSettingsSheetProps) -> Html {
    let category = use_state(|| "Развлечения".to_string());
    let hidden_from_stats = use_state(|| false);
    let confirm_armed = use_state(|| false);

    let sub = match &props.subscription {
        Some(sub) => sub.clone(),
        None => return html! {},
    };

    let close = {
        let on_close = props.on_close.clone();
        let confirm_armed = confirm_armed.clone();
        Callback::from(move |_: MouseEvent| {
            confirm_armed.set(false);
            on_close.emit(());
        })
    };

    let cancel_click = {
        let confirm_armed = confirm_armed.clone();
        let on_cancel = props.on_cancel.clone();
        let on_close = props.on_close.clone();
        let id = sub.id.clone();
        Callback::from(move |_: MouseEvent| {
            if !*confirm_armed {
                confirm_armed.set(true);
                return;
            }
            on_cancel.emit(id.clone());
            confirm_armed.set(false);
            on_close.emit(());
        })
    };

    let toggle_hidden = {
        let hidden_from_stats = hidden_from_stats.clone();
        Callback::from(move |_: MouseEvent| hidden_from_stats.set(!*hidden_from_stats))
    };

    html! {
        <>
            <div class="sheet-backdrop" onclick={close.clone()} />
            <div class="sheet">
                <div class="sheet-header">
                    <ServiceIcon name={sub.name.clone()} size={52} />
                    <div>
                        <h2 class="sheet-title">{&sub.name}</h2>
                        <div class="sheet-price">{format!("${}/мес", sub.price)}</div>
                    </div>
                </div>

                <div class={if sub.is_unused { "sub-status sub-status-unused" } else { "sub-status sub-status-ok" }}>
                    {if sub.is_unused {
                        format!("Неактивна: {}", sub.last_used)
                    } else {
                        format!("В норме: {}", sub.last_used)
                    }}
                </div>

                <div class="sheet-block">
                    <p class="sheet-block-label">{"Следующее списание"}</p>
                    <p class="sheet-block-value">{&sub.next_payment}</p>
                </div>

                <div class="sheet-block">
                    <p class="sheet-block-label">{"Категория"}</p>
                    <div class="category-chips">
                        {for CATEGORIES.iter().map(|cat| {
                            let category = category.clone();
                            let value = cat.to_string();
                            let selected = *category == value;
                            html! {
                                <button
                                    class={if selected { "chip chip-selected" } else { "chip" }}
                                    onclick={Callback::from(move |_| category.set(value.clone()))}
                                >
                                    {*cat}
                                </button>
                            }
                        })}
                    </div>
                </div>

                <div class="sheet-block sheet-toggle-row">
                    <div>
                        <div class="sheet-toggle-label">{"Скрыть из статистики"}</div>
                        <div class="sheet-toggle-hint">{"Не учитывать при подсчёте трат"}</div>
                    </div>
                    <button
                        class={if *hidden_from_stats { "toggle toggle-on" } else { "toggle" }}
                        onclick={toggle_hidden}
                    >
                        <span class="toggle-knob" />
                    </button>
                </div>

                <button
                    class={if *confirm_armed { "btn btn-destructive btn-armed" } else { "btn btn-destructive" }}
                    onclick={cancel_click}
                >
                    {if *confirm_armed {
                        "Нажмите ещё раз для подтверждения"
                    } else {
                        "Отменить подписку"
                    }}
                </button>
                <button class="btn btn-ghost" onclick={close}>{"Закрыть"}</button>
            </div>
        </>
    }
}
