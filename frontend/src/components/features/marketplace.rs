use shared::{fixtures, month_word_ru, CollabOffer};
use yew::prelude::*;

use crate::components::features::promo_code_dialog::PromoCodeDialog;
use crate::components::service_icon::ServiceIcon;
use crate::components::toaster::Toast;

#[derive(Properties, PartialEq)]
pub struct MarketplaceProps {
    pub on_toast: Callback<Toast>,
}

/// Cross-sell marketplace. Activating an offer opens the promo-code dialog and
/// leaves the offer in the list, so it can be activated again later.
#[function_component(Marketplace)]
pub fn marketplace(props: &MarketplaceProps) -> Html {
    let offers = use_state(fixtures::collab_offers);
    let active_category = use_state(|| "Все".to_string());
    // Offer staged in the promo dialog; None keeps it closed
    let dialog_offer = use_state(|| Option::<CollabOffer>::None);

    let close_dialog = {
        let dialog_offer = dialog_offer.clone();
        Callback::from(move |_| dialog_offer.set(None))
    };

    let visible: Vec<CollabOffer> = offers
        .iter()
        .filter(|o| *active_category == "Все" || o.category == *active_category)
        .cloned()
        .collect();

    html! {
        <div class="screen marketplace">
            <div class="screen-header">
                <div>
                    <h1 class="screen-title">
                        {"Маркетплейс "}
                        <span class="badge badge-primary">{"✨ Для вас"}</span>
                    </h1>
                    <p class="screen-subtitle">{"Эксклюзивные предложения на основе ваших подписок"}</p>
                </div>

                <div class="category-chips">
                    {for fixtures::OFFER_CATEGORIES.iter().map(|tag| {
                        let value = tag.to_string();
                        let selected = *active_category == value;
                        let active_category = active_category.clone();
                        html! {
                            <button
                                key={value.clone()}
                                class={if selected { "chip chip-selected" } else { "chip" }}
                                onclick={Callback::from(move |_| active_category.set(value.clone()))}
                            >
                                {*tag}
                            </button>
                        }
                    })}
                </div>
            </div>

            <div class="offer-grid">
                {for visible.iter().map(|offer| {
                    let activate = {
                        let dialog_offer = dialog_offer.clone();
                        let staged = offer.clone();
                        Callback::from(move |_: MouseEvent| dialog_offer.set(Some(staged.clone())))
                    };
                    html! {
                        <div key={offer.id.clone()} class="card offer-card">
                            <span class="badge badge-ok">{format!("Экономия {}", offer.saving)}</span>

                            <div class="offer-icons">
                                <ServiceIcon name={offer.from.clone()} size={48} />
                                <span class="offer-arrow">{"→"}</span>
                                <ServiceIcon name={offer.to.clone()} size={56} class={classes!("offer-icon-to")} />
                            </div>

                            <h3 class="offer-title">
                                {format!(
                                    "Отмени {} → получи {} {} {} бесплатно",
                                    offer.from,
                                    offer.free_months,
                                    month_word_ru(offer.free_months),
                                    offer.to,
                                )}
                            </h3>
                            <p class="offer-hint">{"Идеальная замена по лучшей цене"}</p>

                            <button class="btn btn-primary" onclick={activate}>
                                {"🎁 Активировать"}
                            </button>
                        </div>
                    }
                })}

                {if visible.is_empty() {
                    html! {
                        <div class="card empty-card">
                            <p class="empty-title">{"В этой категории пока пусто"}</p>
                            <p class="empty-hint">{"Загляните позже — предложения обновляются"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>

            <PromoCodeDialog
                offer={(*dialog_offer).clone()}
                on_close={close_dialog}
                on_toast={props.on_toast.clone()}
            />
        </div>
    }
}
