use shared::{fixtures, format_payment_date, ops, Subscription};
use yew::prelude::*;

use crate::components::features::subscription_settings_sheet::SubscriptionSettingsSheet;
use crate::components::service_icon::ServiceIcon;
use crate::components::toaster::Toast;
use crate::hooks::use_count_up_default;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_toast: Callback<Toast>,
}

/// Personal dashboard: spend headline, potential savings, upcoming payments
/// strip, and the subscription cards with their cancel/settings actions.
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let subs = use_state(fixtures::subscriptions);
    // Subscription staged in the settings sheet; None keeps the sheet closed
    let sheet_sub = use_state(|| Option::<Subscription>::None);

    let unused_total = ops::unused_total(&subs);
    let spent_animated = use_count_up_default(fixtures::SPENT_THIS_MONTH);
    let savings_animated = use_count_up_default(unused_total);

    // Cancel is irreversible within the session; no undo is offered
    let cancel = {
        let subs = subs.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |id: String| match ops::cancel_subscription(&subs, &id) {
            Ok((remaining, cancelled)) => {
                on_toast.emit(Toast::success(
                    format!("Подписка {} отменена 🎉", cancelled.name),
                    format!("Вы сэкономили ${}/мес", cancelled.price),
                ));
                subs.set(remaining);
            }
            Err(e) => {
                Logger::warn_with_component("dashboard", &format!("cancel rejected: {}", e));
            }
        })
    };

    let close_sheet = {
        let sheet_sub = sheet_sub.clone();
        Callback::from(move |_| sheet_sub.set(None))
    };

    html! {
        <div class="screen dashboard">
            <div class="hero-grid">
                <div class="card hero-card">
                    <div class="card-label">{"💳 Траты за этот месяц"}</div>
                    <div class="hero-amount">
                        {format!("${:.2}", spent_animated)}
                        <span class="hero-amount-unit">{"/мес"}</span>
                    </div>
                    {if unused_total > 0.0 {
                        html! {
                            <div class="hero-waste-chip">
                                {format!("Из них ${:.2} — за подписки, которыми вы не пользовались", unused_total)}
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="card savings-card">
                    <div class="card-label">{"Потенциальная экономия"}</div>
                    <div class="savings-amount">{format!("${:.2}", savings_animated)}</div>
                    <p class="card-hint">{"Отмените неактивные сервисы сейчас"}</p>
                </div>
            </div>

            <section class="calendar-strip-section">
                <h2 class="section-title">{"Календарь платежей (ближайшие 7 дней)"}</h2>
                <div class="calendar-strip">
                    {for fixtures::calendar_payments().iter().map(|payment| html! {
                        <div key={payment.id.clone()} class="card calendar-card">
                            <ServiceIcon name={payment.service.clone()} size={32} />
                            <div class="calendar-card-service">{&payment.service}</div>
                            <div class="calendar-card-date">{format_payment_date(&payment.date)}</div>
                            <span class={if payment.is_unused { "amount-chip amount-chip-warn" } else { "amount-chip" }}>
                                {format!("${}", payment.amount)}
                            </span>
                        </div>
                    })}
                </div>
            </section>

            <section class="subs-section">
                <h2 class="section-title">{"Ваши подписки"}</h2>
                <div class="subs-grid">
                    {for subs.iter().map(|sub| {
                        let status = if sub.is_unused {
                            html! {
                                <div class="sub-status sub-status-unused">
                                    {format!("Неактивна: {}", sub.last_used)}
                                </div>
                            }
                        } else {
                            html! {
                                <div class="sub-status sub-status-ok">
                                    {format!("В норме: {}", sub.last_used)}
                                </div>
                            }
                        };

                        // Unused gets the one-click cancel; active gets settings
                        let action = if sub.is_unused {
                            let cancel = cancel.clone();
                            let id = sub.id.clone();
                            html! {
                                <button
                                    class="btn btn-destructive"
                                    onclick={Callback::from(move |_| cancel.emit(id.clone()))}
                                >
                                    {"Отменить в 1 клик"}
                                </button>
                            }
                        } else {
                            let sheet_sub = sheet_sub.clone();
                            let selected = sub.clone();
                            html! {
                                <button
                                    class="btn btn-outline"
                                    onclick={Callback::from(move |_| sheet_sub.set(Some(selected.clone())))}
                                >
                                    {"Настройки →"}
                                </button>
                            }
                        };

                        html! {
                            <div key={sub.id.clone()} class="card sub-card">
                                <div class="sub-card-top">
                                    <ServiceIcon name={sub.name.clone()} size={32} />
                                    <div>
                                        <h3 class="sub-name">{&sub.name}</h3>
                                        <div class="sub-price">{format!("${}/мес", sub.price)}</div>
                                    </div>
                                </div>
                                {status}
                                {action}
                            </div>
                        }
                    })}
                </div>
            </section>

            <SubscriptionSettingsSheet
                subscription={(*sheet_sub).clone()}
                on_close={close_sheet}
                on_cancel={cancel.clone()}
            />
        </div>
    }
}
