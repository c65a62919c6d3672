use shared::{fixtures, ops, FamilyPlan};
use yew::prelude::*;

use crate::components::features::create_family_modal::CreateFamilyModal;
use crate::components::service_icon::ServiceIcon;
use crate::components::toaster::Toast;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct FamilySharingProps {
    pub on_toast: Callback<Toast>,
}

/// Family-sharing marketplace: join an existing plan or publish your own
/// through the three-step wizard.
#[function_component(FamilySharing)]
pub fn family_sharing(props: &FamilySharingProps) -> Html {
    let plans = use_state(fixtures::family_plans);
    let wizard_open = use_state(|| false);

    let join = {
        let plans = plans.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |id: String| {
            let service = plans
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.service.clone())
                .unwrap_or_default();
            match ops::join_family(&plans, &id) {
                Ok(next) => {
                    on_toast.emit(Toast::success(
                        format!("Вы присоединились к семье {}! 🎉", service),
                        "Доступ будет открыт в течение 5 минут.",
                    ));
                    plans.set(next);
                }
                Err(e) => {
                    // UI disables the button, but the state boundary is the guard
                    Logger::warn_with_component("family", &format!("join rejected: {}", e));
                }
            }
        })
    };

    let open_wizard = {
        let wizard_open = wizard_open.clone();
        Callback::from(move |_: MouseEvent| wizard_open.set(true))
    };

    let close_wizard = {
        let wizard_open = wizard_open.clone();
        Callback::from(move |_| wizard_open.set(false))
    };

    let on_created = {
        let plans = plans.clone();
        let on_toast = props.on_toast.clone();
        Callback::from(move |plan: FamilyPlan| {
            on_toast.emit(Toast::success(
                format!("Семья {} опубликована!", plan.service),
                format!("${:.2} с человека в месяц", plan.price_per_slot),
            ));
            plans.set(ops::add_family(&plans, plan));
        })
    };

    html! {
        <div class="screen family-sharing">
            <div class="screen-header">
                <div>
                    <h1 class="screen-title">{"Семейные подписки"}</h1>
                    <p class="screen-subtitle">{"Делитесь подписками и платите меньше"}</p>
                </div>
                <button class="btn btn-primary" onclick={open_wizard.clone()}>
                    {"+ Создать семью"}
                </button>
            </div>

            <div class="family-grid">
                {for plans.iter().map(|plan| {
                    let is_full = plan.used >= plan.slots;

                    let slot_avatars = (0..plan.used).map(|i| html! {
                        <img
                            key={format!("used-{}", i)}
                            class="slot-avatar"
                            src={format!("https://i.pravatar.cc/100?u={}_{}", plan.id, i)}
                            alt="Участник"
                        />
                    });
                    let free_slots = (0..plan.slots.saturating_sub(plan.used)).map(|i| html! {
                        <span key={format!("free-{}", i)} class="slot-avatar slot-free">{"+"}</span>
                    });

                    let action = if plan.is_joined {
                        html! {
                            <button class="btn btn-secondary" disabled=true>{"✓ Вы в семье"}</button>
                        }
                    } else {
                        let join = join.clone();
                        let id = plan.id.clone();
                        let label = if is_full {
                            "Мест нет".to_string()
                        } else {
                            format!("Вступить за ${:.2}", plan.price_per_slot)
                        };
                        html! {
                            <button
                                class="btn btn-primary"
                                disabled={is_full}
                                onclick={Callback::from(move |_| join.emit(id.clone()))}
                            >
                                {label}
                            </button>
                        }
                    };

                    html! {
                        <div key={plan.id.clone()} class="card family-card">
                            <div class="family-card-header">
                                <ServiceIcon name={plan.service.clone()} size={40} />
                                <div>
                                    <h3 class="family-service">{&plan.service}</h3>
                                    <p class="family-owner">{format!("Владелец: {}", plan.owner)}</p>
                                </div>
                                {if plan.is_hot && !plan.is_joined {
                                    html! { <span class="hot-badge">{"🔥 Горячее"}</span> }
                                } else {
                                    html! {}
                                }}
                            </div>

                            <div class="family-card-meta">
                                <div>
                                    <div class="family-price">{format!("${:.2}", plan.price_per_slot)}</div>
                                    <div class="family-price-hint">{"в месяц с человека"}</div>
                                </div>
                                <div class="family-slots">
                                    <div class="family-slots-count">{format!("{} / {}", plan.used, plan.slots)}</div>
                                    <div class="family-slots-hint">{"занято мест"}</div>
                                </div>
                            </div>

                            <div class="slot-row">
                                {for slot_avatars}
                                {for free_slots}
                            </div>

                            {action}
                        </div>
                    }
                })}
            </div>

            <button class="fab" onclick={open_wizard}>{"+"}</button>

            <CreateFamilyModal
                open={*wizard_open}
                on_close={close_wizard}
                on_created={on_created}
            />
        </div>
    }
}
