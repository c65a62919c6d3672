use gloo::timers::callback::Timeout;
use shared::{fixtures, ops, FamilyPlan};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::service_icon::ServiceIcon;

/// The captured fields are cleared this long after the close transition starts,
/// so the modal does not visibly reset while fading out.
const RESET_AFTER_CLOSE_MS: u32 = 300;

const SLOT_OPTIONS: [(u32, &str); 3] = [(2, "Пара"), (4, "Семья"), (6, "Большая")];

#[derive(Debug, Clone, Copy, PartialEq)]
enum WizardStep {
    SelectService,
    ConfigureTerms,
    Confirm,
}

impl WizardStep {
    fn title(self) -> &'static str {
        match self {
            WizardStep::SelectService => "Выберите сервис",
            WizardStep::ConfigureTerms => "Настройте условия",
            WizardStep::Confirm => "Подтверждение",
        }
    }

    fn index(self) -> u32 {
        match self {
            WizardStep::SelectService => 1,
            WizardStep::ConfigureTerms => 2,
            WizardStep::Confirm => 3,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CreateFamilyModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Receives the synthesized plan; the owning screen prepends it
    pub on_created: Callback<FamilyPlan>,
}

/// Three-step create-family wizard. `Next` is gated on the current step's
/// required fields; closing at any point resets every captured field once the
/// close transition has finished.
#[function_component(CreateFamilyModal)]
pub fn create_family_modal(props: &CreateFamilyModalProps) -> Html {
    let step = use_state(|| WizardStep::SelectService);
    let service = use_state(String::new);
    let slots = use_state(|| 4u32);
    let price_input = use_state(String::new);
    let search = use_state(String::new);
    let pending_reset = use_mut_ref(|| Option::<Timeout>::None);

    let price = price_input.trim().parse::<f64>().ok();
    let price_per_slot = ops::per_slot_price(price, *slots);
    let price_per_slot_label = match price_per_slot {
        Some(p) => format!("${:.2}", p),
        None => "—".to_string(),
    };

    let close = {
        let step = step.clone();
        let service = service.clone();
        let slots = slots.clone();
        let price_input = price_input.clone();
        let search = search.clone();
        let pending_reset = pending_reset.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            let step = step.clone();
            let service = service.clone();
            let slots = slots.clone();
            let price_input = price_input.clone();
            let search = search.clone();
            *pending_reset.borrow_mut() = Some(Timeout::new(RESET_AFTER_CLOSE_MS, move || {
                step.set(WizardStep::SelectService);
                service.set(String::new());
                slots.set(4);
                price_input.set(String::new());
                search.set(String::new());
            }));
        })
    };

    let publish = {
        let service = service.clone();
        let slots = slots.clone();
        let on_created = props.on_created.clone();
        let close = close.clone();
        Callback::from(move |e: MouseEvent| {
            let per_slot = match price_per_slot {
                Some(p) => p,
                None => return,
            };
            let epoch_millis = js_sys::Date::now() as u64;
            on_created.emit(FamilyPlan {
                id: FamilyPlan::generate_id(epoch_millis),
                service: (*service).clone(),
                owner: fixtures::CURRENT_USER.to_string(),
                slots: *slots,
                used: 1,
                price_per_slot: per_slot,
                is_hot: false,
                is_joined: false,
            });
            close.emit(e);
        })
    };

    if !props.open {
        return html! {};
    }

    let go_next = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            let next = match *step {
                WizardStep::SelectService => WizardStep::ConfigureTerms,
                _ => WizardStep::Confirm,
            };
            step.set(next);
        })
    };

    let go_back = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            let prev = match *step {
                WizardStep::Confirm => WizardStep::ConfigureTerms,
                _ => WizardStep::SelectService,
            };
            step.set(prev);
        })
    };

    let body = match *step {
        WizardStep::SelectService => {
            let search_lower = search.to_lowercase();
            let on_search = {
                let search = search.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    search.set(input.value());
                })
            };
            html! {
                <>
                    <input
                        type="text"
                        class="wizard-search"
                        placeholder="Поиск сервиса..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                    <div class="wizard-service-grid">
                        {for fixtures::WIZARD_SERVICES
                            .iter()
                            .filter(|s| s.to_lowercase().contains(&search_lower))
                            .map(|s| {
                                let name = s.to_string();
                                let selected = *service == name;
                                let service = service.clone();
                                let value = name.clone();
                                html! {
                                    <button
                                        key={name.clone()}
                                        class={if selected { "wizard-service wizard-service-selected" } else { "wizard-service" }}
                                        onclick={Callback::from(move |_| service.set(value.clone()))}
                                    >
                                        <ServiceIcon name={name.clone()} size={24} />
                                        <span>{name.clone()}</span>
                                        {if selected { html! { <span class="wizard-check">{"✓"}</span> } } else { html! {} }}
                                    </button>
                                }
                            })}
                    </div>
                    <button class="btn btn-primary" disabled={service.is_empty()} onclick={go_next}>
                        {"Далее ›"}
                    </button>
                </>
            }
        }

        WizardStep::ConfigureTerms => {
            let on_price = {
                let price_input = price_input.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    price_input.set(input.value());
                })
            };
            let next_enabled = price_per_slot.is_some();
            html! {
                <>
                    <div class="wizard-service-summary">
                        <ServiceIcon name={(*service).clone()} size={36} />
                        <div>
                            <div class="wizard-service-name">{(*service).clone()}</div>
                            <div class="wizard-owner">{format!("Владелец: {}", fixtures::CURRENT_USER)}</div>
                        </div>
                    </div>

                    <p class="wizard-label">{"Количество мест"}</p>
                    <div class="wizard-slot-grid">
                        {for SLOT_OPTIONS.iter().map(|(value, desc)| {
                            let value = *value;
                            let selected = *slots == value;
                            let slots = slots.clone();
                            html! {
                                <button
                                    key={value.to_string()}
                                    class={if selected { "wizard-slot wizard-slot-selected" } else { "wizard-slot" }}
                                    onclick={Callback::from(move |_| slots.set(value))}
                                >
                                    <span class="wizard-slot-count">{value}</span>
                                    <span class="wizard-slot-desc">{*desc}</span>
                                </button>
                            }
                        })}
                    </div>

                    <label class="wizard-label">{"Полная стоимость подписки в месяц ($)"}</label>
                    <input
                        type="number"
                        class="wizard-price"
                        placeholder="Например: 15.99"
                        value={(*price_input).clone()}
                        oninput={on_price}
                    />
                    {if price_per_slot.is_some() {
                        html! {
                            <p class="wizard-per-slot">
                                {"≈ "}<strong>{price_per_slot_label.clone()}</strong>{" с человека в месяц"}
                            </p>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="wizard-actions">
                        <button class="btn btn-outline" onclick={go_back}>{"Назад"}</button>
                        <button class="btn btn-primary" disabled={!next_enabled} onclick={go_next}>
                            {"Далее ›"}
                        </button>
                    </div>
                </>
            }
        }

        WizardStep::Confirm => html! {
            <>
                <div class="wizard-confirm-card">
                    <div class="wizard-service-summary">
                        <ServiceIcon name={(*service).clone()} size={52} />
                        <div>
                            <div class="wizard-service-name">{(*service).clone()}</div>
                            <div class="wizard-owner">{format!("{} • {} мест", fixtures::CURRENT_USER, *slots)}</div>
                        </div>
                    </div>
                    <div class="wizard-confirm-grid">
                        <div class="wizard-confirm-cell">
                            <div class="wizard-confirm-label">{"Цена / чел."}</div>
                            <div class="wizard-confirm-value">
                                {price_per_slot_label.clone()}<span class="wizard-confirm-unit">{"/мес"}</span>
                            </div>
                        </div>
                        <div class="wizard-confirm-cell">
                            <div class="wizard-confirm-label">{"Мест"}</div>
                            <div class="wizard-confirm-value">{*slots}</div>
                        </div>
                    </div>
                </div>

                <div class="wizard-actions">
                    <button class="btn btn-outline" onclick={go_back}>{"Назад"}</button>
                    <button class="btn btn-primary" onclick={publish}>{"+ Опубликовать"}</button>
                </div>
            </>
        },
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal wizard">
                <div class="wizard-header">
                    <h2 class="wizard-title">{step.title()}</h2>
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                </div>
                <div class="wizard-progress">
                    {for (1..=3u32).map(|n| html! {
                        <div key={n.to_string()} class={if n <= step.index() { "wizard-bar wizard-bar-done" } else { "wizard-bar" }} />
                    })}
                </div>
                <div class="wizard-body">{body}</div>
            </div>
        </div>
    }
}
