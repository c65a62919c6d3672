use shared::{fixtures, ops, ChargeStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::toaster::Toast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum SettingsSection {
    Profile,
    Billing,
    Alerts,
}

#[derive(Properties, PartialEq)]
pub struct ProfileSettingsProps {
    pub on_toast: Callback<Toast>,
}

/// Profile settings screen: three independent panels (profile fields, billing,
/// alert toggles), each with its own local save that only confirms via toast.
#[function_component(ProfileSettings)]
pub fn profile_settings(props: &ProfileSettingsProps) -> Html {
    let section = use_state(|| SettingsSection::Profile);

    let tabs = [
        (SettingsSection::Profile, "Профиль"),
        (SettingsSection::Billing, "Биллинг"),
        (SettingsSection::Alerts, "Алерты"),
    ];

    let body = match *section {
        SettingsSection::Profile => html! { <ProfilePanel on_toast={props.on_toast.clone()} /> },
        SettingsSection::Billing => html! { <BillingPanel on_toast={props.on_toast.clone()} /> },
        SettingsSection::Alerts => html! { <AlertsPanel on_toast={props.on_toast.clone()} /> },
    };

    html! {
        <div class="screen profile-settings">
            <div class="screen-header">
                <div>
                    <h1 class="screen-title">{"Настройки профиля"}</h1>
                    <p class="screen-subtitle">{"Управляйте своим аккаунтом и предпочтениями"}</p>
                </div>
            </div>

            <div class="settings-tabs">
                {for tabs.iter().map(|(tab, label)| {
                    let tab = *tab;
                    let active = *section == tab;
                    let section = section.clone();
                    html! {
                        <button
                            class={if active { "settings-tab settings-tab-active" } else { "settings-tab" }}
                            onclick={Callback::from(move |_| section.set(tab))}
                        >
                            {*label}
                        </button>
                    }
                })}
            </div>

            <div class="card settings-panel">{body}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    on_toast: Callback<Toast>,
}

const CURRENCY_OPTIONS: [(&str, &str); 4] = [
    ("USD", "USD — Доллар США"),
    ("EUR", "EUR — Евро"),
    ("KZT", "KZT — Тенге"),
    ("RUB", "RUB — Рубль"),
];

#[function_component(ProfilePanel)]
fn profile_panel(props: &PanelProps) -> Html {
    let name = use_state(|| "Аскар Кенжебаев".to_string());
    let email = use_state(|| "askar@example.com".to_string());
    let phone = use_state(|| "+7 777 777 7777".to_string());
    let currency = use_state(|| "USD".to_string());

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_currency = {
        let currency = currency.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            currency.set(select.value());
        })
    };

    let save = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            on_toast.emit(Toast::success("Профиль сохранён!", "Данные успешно обновлены."));
        })
    };

    html! {
        <div class="profile-panel">
            <div class="profile-identity">
                <img class="profile-avatar" src="https://i.pravatar.cc/150?u=current_user" alt={(*name).clone()} />
                <div>
                    <div class="profile-name">{(*name).clone()}</div>
                    <span class="badge badge-primary">{"Pro Plan"}</span>
                </div>
            </div>

            <div class="field-grid">
                <label class="field">
                    <span class="field-label">{"Имя"}</span>
                    <input type="text" value={(*name).clone()} oninput={text_input(&name)} placeholder="Ваше имя" />
                </label>
                <label class="field">
                    <span class="field-label">{"Email"}</span>
                    <input type="email" value={(*email).clone()} oninput={text_input(&email)} />
                </label>
                <label class="field">
                    <span class="field-label">{"Телефон"}</span>
                    <input type="text" value={(*phone).clone()} oninput={text_input(&phone)} />
                </label>
                <label class="field">
                    <span class="field-label">{"Валюта"}</span>
                    // Selection is set per option; value on a <select> is not a DOM attribute
                    <select onchange={on_currency}>
                        {for CURRENCY_OPTIONS.iter().map(|(code, label)| html! {
                            <option value={*code} selected={*currency == *code}>{*label}</option>
                        })}
                    </select>
                </label>
            </div>

            <button class="btn btn-primary" onclick={save}>{"✓ Сохранить изменения"}</button>
        </div>
    }
}

#[function_component(BillingPanel)]
fn billing_panel(props: &PanelProps) -> Html {
    let cards = use_state(fixtures::payment_cards);
    let show_add_card = use_state(|| false);

    let remove = {
        let cards = cards.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |id: String| {
            cards.set(ops::remove_card(&cards, &id));
            on_toast.emit(Toast::success("Карта удалена", ""));
        })
    };

    let make_default = {
        let cards = cards.clone();
        Callback::from(move |id: String| {
            cards.set(ops::set_default_card(&cards, &id));
        })
    };

    let toggle_add = {
        let show_add_card = show_add_card.clone();
        Callback::from(move |_: MouseEvent| show_add_card.set(!*show_add_card))
    };

    // Stub until a payment gateway exists; only closes the form and confirms
    let add_card = {
        let show_add_card = show_add_card.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            show_add_card.set(false);
            on_toast.emit(Toast::success(
                "Карта добавлена!",
                "Временная заглушка — интеграция с платёжным шлюзом.",
            ));
        })
    };

    html! {
        <div class="billing-panel">
            <div class="card plan-card">
                <div>
                    <div class="card-label">{"Текущий тариф"}</div>
                    <div class="plan-name">
                        {"Pro Plan"}
                        <span class="badge badge-primary">{"$9.99/мес"}</span>
                    </div>
                    <div class="plan-next">{"Следующее списание: 1 марта 2026"}</div>
                </div>
                <div class="plan-actions">
                    <button class="btn btn-outline">{"Изменить план"}</button>
                    <button class="btn btn-ghost">{"Отменить"}</button>
                </div>
            </div>

            <div class="cards-block">
                <div class="cards-block-header">
                    <h3>{"Методы оплаты"}</h3>
                    <button class="btn btn-outline" onclick={toggle_add}>{"+ Добавить карту"}</button>
                </div>

                {if *show_add_card {
                    html! {
                        <div class="card add-card-form">
                            <label class="field">
                                <span class="field-label">{"Номер карты"}</span>
                                <input type="text" placeholder="1234 5678 9012 3456" />
                            </label>
                            <div class="field-row">
                                <label class="field">
                                    <span class="field-label">{"Срок"}</span>
                                    <input type="text" placeholder="MM/YY" />
                                </label>
                                <label class="field">
                                    <span class="field-label">{"CVV"}</span>
                                    <input type="text" placeholder="•••" />
                                </label>
                            </div>
                            <div class="form-actions">
                                <button class="btn btn-primary" onclick={add_card}>{"Добавить"}</button>
                                <button class="btn btn-ghost" onclick={
                                    let show_add_card = show_add_card.clone();
                                    Callback::from(move |_| show_add_card.set(false))
                                }>{"Отмена"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }}

                <div class="card-list">
                    {for cards.iter().map(|card| {
                        let default_marker = if card.is_default {
                            html! { <span class="badge badge-ok">{"По умолчанию"}</span> }
                        } else {
                            let make_default = make_default.clone();
                            let id = card.id.clone();
                            html! {
                                <button
                                    class="btn btn-ghost"
                                    onclick={Callback::from(move |_| make_default.emit(id.clone()))}
                                >
                                    {"Сделать основной"}
                                </button>
                            }
                        };
                        let on_remove = {
                            let remove = remove.clone();
                            let id = card.id.clone();
                            Callback::from(move |_| remove.emit(id.clone()))
                        };
                        html! {
                            <div key={card.id.clone()} class="payment-card-row">
                                <span class={if card.card_type == "Visa" { "card-brand card-visa" } else { "card-brand card-mc" }}>
                                    {if card.card_type == "Visa" { "VISA" } else { "MC" }}
                                </span>
                                <div class="payment-card-info">
                                    <div>{format!("{} •••• {}", card.card_type, card.last4)}</div>
                                    <div class="cell-muted">{format!("Истекает {}", card.expires)}</div>
                                </div>
                                {default_marker}
                                <button class="payment-card-remove" onclick={on_remove}>{"🗑"}</button>
                            </div>
                        }
                    })}
                </div>
            </div>

            <div class="history-block">
                <h3>{"История транзакций"}</h3>
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>{"Дата"}</th>
                            <th>{"Сервис"}</th>
                            <th class="cell-right">{"Сумма"}</th>
                            <th class="cell-right">{"Статус"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for fixtures::charge_history().iter().map(|charge| {
                            let status = match charge.status {
                                ChargeStatus::Success => html! {
                                    <span class="badge badge-ok">{"Успешно"}</span>
                                },
                                ChargeStatus::Failed => html! {
                                    <span class="badge badge-danger">{"Ошибка"}</span>
                                },
                            };
                            html! {
                                <tr key={charge.id.clone()}>
                                    <td class="cell-muted">{&charge.date}</td>
                                    <td>{&charge.service}</td>
                                    <td class="cell-right cell-mono">{&charge.amount}</td>
                                    <td class="cell-right">{status}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

const DAY_OPTIONS: [(&str, &str); 4] = [
    ("1", "1 день"),
    ("2", "2 дня"),
    ("3", "3 дня"),
    ("7", "7 дней"),
];

#[function_component(AlertsPanel)]
fn alerts_panel(props: &PanelProps) -> Html {
    let settings = use_state(fixtures::alert_settings);
    let days_before = use_state(|| "3".to_string());

    let on_days = {
        let days_before = days_before.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            days_before.set(select.value());
        })
    };

    let save = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |_: MouseEvent| {
            on_toast.emit(Toast::success("Настройки алертов сохранены!", ""));
        })
    };

    html! {
        <div class="alerts-panel">
            <div class="alert-setting-list">
                {for settings.iter().map(|setting| {
                    let toggle = {
                        let settings = settings.clone();
                        let id = setting.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            settings.set(ops::toggle_alert_setting(&settings, &id));
                        })
                    };
                    // The payment alert exposes its lead-time selector when on
                    let extra = if setting.id == "payment" && setting.enabled {
                        html! {
                            <div class="days-selector">
                                <span>{"За"}</span>
                                <select onchange={on_days.clone()}>
                                    {for DAY_OPTIONS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={*days_before == *value}>{*label}</option>
                                    })}
                                </select>
                                <span>{"до списания"}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    };
                    html! {
                        <div key={setting.id.clone()} class="alert-setting-row">
                            <div>
                                <div class="alert-setting-label">{&setting.label}</div>
                                <div class="alert-setting-hint">{&setting.description}</div>
                                {extra}
                            </div>
                            <button
                                class={if setting.enabled { "toggle toggle-on" } else { "toggle" }}
                                onclick={toggle}
                            >
                                <span class="toggle-knob" />
                            </button>
                        </div>
                    }
                })}
            </div>

            <button class="btn btn-primary" onclick={save}>{"✓ Сохранить настройки"}</button>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Default lead time is "3" while the first option is "1"; the rendered
    // select must follow state, not document order
    #[wasm_bindgen_test]
    async fn test_days_select_follows_state() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        yew::Renderer::<AlertsPanel>::with_root_and_props(
            host.clone(),
            PanelProps { on_toast: Callback::noop() },
        )
        .render();
        TimeoutFuture::new(50).await;

        let select = host
            .query_selector(".days-selector select")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlSelectElement>()
            .unwrap();
        assert_eq!(select.value(), "3");
    }
}
