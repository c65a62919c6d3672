use shared::{fixtures, ops, AlertStatus, EmployeeStatus};
use yew::prelude::*;

use crate::components::service_icon::ServiceIcon;
use crate::components::toaster::Toast;
use crate::hooks::use_count_up_default;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct B2bAuditProps {
    pub on_toast: Callback<Toast>,
}

/// B2B license audit: waste alerts with disable/remind actions plus the
/// display-only employees table.
#[function_component(B2bAudit)]
pub fn b2b_audit(props: &B2bAuditProps) -> Html {
    let alerts = use_state(fixtures::b2b_alerts);

    let total_waste = ops::waste_total(&alerts);
    let waste_animated = use_count_up_default(total_waste);
    let inactive_count = alerts.len();

    // Removes the alert outright; there is no confirmation step here
    let disable = {
        let alerts = alerts.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |id: String| match ops::disable_license(&alerts, &id) {
            Ok((remaining, disabled)) => {
                on_toast.emit(Toast::success(
                    format!("Лицензия {} для {} отключена", disabled.tool, disabled.employee),
                    format!("Бизнес сэкономил ${}/мес", disabled.cost),
                ));
                alerts.set(remaining);
            }
            Err(e) => {
                Logger::warn_with_component("b2b", &format!("disable rejected: {}", e));
            }
        })
    };

    // Pure notification side effect, never mutates state
    let remind = {
        let on_toast = props.on_toast.clone();
        Callback::from(move |employee: String| {
            on_toast.emit(Toast::info(
                format!("Уведомление отправлено {}", employee),
                "Мы напомнили ему об использовании сервиса.",
            ));
        })
    };

    html! {
        <div class="screen b2b-audit">
            <div class="screen-header">
                <div>
                    <h1 class="screen-title">{"Аудит Лицензий (B2B)"}</h1>
                    <p class="screen-subtitle">{"Оптимизируйте расходы компании на SaaS-инструменты"}</p>
                </div>
            </div>

            <div class="stat-grid">
                <div class="card stat-card">
                    <div class="card-label">{"Активных лицензий"}</div>
                    <div class="stat-value">{fixtures::ACTIVE_LICENSES}</div>
                </div>
                <div class="card stat-card stat-warn">
                    <div class="card-label">{"Неактивных / Уволенных"}</div>
                    <div class="stat-value">{inactive_count}</div>
                </div>
                <div class="card stat-card stat-ok">
                    <div class="card-label">{"Потенциальная экономия"}</div>
                    <div class="stat-value">{format!("${:.2}", waste_animated)}</div>
                </div>
            </div>

            <section class="alerts-section">
                <h2 class="section-title">{"⚠ Требуют внимания"}</h2>

                {if alerts.is_empty() {
                    html! {
                        <div class="card empty-card">
                            <p class="empty-title">{"Все лицензии оптимизированы!"}</p>
                            <p class="empty-hint">{"Нет неактивных подписок, вы не переплачиваете."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="alerts-grid">
                            {for alerts.iter().map(|alert| {
                                let card_class = match alert.status {
                                    AlertStatus::Fired => "card alert-card alert-fired",
                                    _ => "card alert-card alert-sleeping",
                                };
                                let status_label = match alert.status {
                                    AlertStatus::Fired => html! {
                                        <span class="alert-status alert-status-fired">{"Сотрудник уволен"}</span>
                                    },
                                    _ => html! {
                                        <span class="alert-status alert-status-sleeping">
                                            {format!("Спит {} дней", alert.days_inactive)}
                                        </span>
                                    },
                                };

                                let on_disable = {
                                    let disable = disable.clone();
                                    let id = alert.id.clone();
                                    Callback::from(move |_| disable.emit(id.clone()))
                                };

                                // Remind is only offered for sleeping licenses
                                let remind_btn = if alert.status == AlertStatus::Sleeping {
                                    let remind = remind.clone();
                                    let employee = alert.employee.clone();
                                    html! {
                                        <button
                                            class="btn btn-outline"
                                            onclick={Callback::from(move |_| remind.emit(employee.clone()))}
                                        >
                                            {"Напомнить"}
                                        </button>
                                    }
                                } else {
                                    html! {}
                                };

                                html! {
                                    <div key={alert.id.clone()} class={card_class}>
                                        <div class="alert-card-top">
                                            <img class="alert-avatar" src={alert.avatar.clone()} alt={alert.employee.clone()} />
                                            <div>
                                                <h3 class="alert-employee">{&alert.employee}</h3>
                                                {status_label}
                                            </div>
                                            <span class="cost-chip">{format!("${}/мес", alert.cost)}</span>
                                        </div>
                                        <div class="alert-tool">
                                            {"Инструмент: "}
                                            <ServiceIcon name={alert.tool.clone()} size={20} />
                                            <strong>{&alert.tool}</strong>
                                        </div>
                                        <div class="alert-actions">
                                            <button class="btn btn-destructive" onclick={on_disable}>
                                                {"Отключить"}
                                            </button>
                                            {remind_btn}
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }}
            </section>

            <section class="employees-section">
                <h2 class="section-title">{"Все сотрудники"}</h2>
                <table class="employees-table">
                    <thead>
                        <tr>
                            <th>{"Сотрудник"}</th>
                            <th>{"Email"}</th>
                            <th>{"Инструмент"}</th>
                            <th>{"Активность"}</th>
                            <th class="cell-right">{"Статус"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {for fixtures::employees().iter().map(|employee| {
                            let row_class = if employee.status == EmployeeStatus::Fired {
                                "employee-row employee-fired"
                            } else {
                                "employee-row"
                            };
                            let status_badge = match employee.status {
                                EmployeeStatus::Active => html! {
                                    <span class="badge badge-ok">{"Активен"}</span>
                                },
                                EmployeeStatus::Inactive => html! {
                                    <span class="badge badge-warn">{"Не активен"}</span>
                                },
                                EmployeeStatus::Fired => html! {
                                    <span class="badge badge-danger">{"Уволен"}</span>
                                },
                            };
                            html! {
                                <tr key={employee.id.clone()} class={row_class}>
                                    <td>
                                        <img class="employee-avatar" src={employee.avatar.clone()} alt={employee.name.clone()} />
                                        <span>{&employee.name}</span>
                                    </td>
                                    <td>{&employee.email}</td>
                                    <td>
                                        <ServiceIcon name={employee.tool.clone()} size={20} />
                                        <span>{&employee.tool}</span>
                                    </td>
                                    <td class="cell-muted">{&employee.last_active}</td>
                                    <td class="cell-right">{status_badge}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
