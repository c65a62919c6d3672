use shared::{month_word_ru, ops, CollabOffer};
use yew::prelude::*;

use crate::components::service_icon::ServiceIcon;
use crate::components::toaster::Toast;
use crate::services::clipboard;

#[derive(Properties, PartialEq)]
pub struct PromoCodeDialogProps {
    /// Snapshot of the activated offer; None keeps the dialog closed
    pub offer: Option<CollabOffer>,
    pub on_close: Callback<()>,
    pub on_toast: Callback<Toast>,
}

/// Confirmation dialog shown on offer activation. Reveals the promo code
/// (partner-supplied, or generated in the fixed SUBMAN shape) with a
/// copy-to-clipboard action. Closing never touches the offer collection.
#[function_component(PromoCodeDialog)]
pub fn promo_code_dialog(props: &PromoCodeDialogProps) -> Html {
    let offer = match &props.offer {
        Some(offer) => offer.clone(),
        None => return html! {},
    };

    let code = offer
        .promo_code
        .clone()
        .unwrap_or_else(|| ops::promo_code(&offer.to));

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let copy = {
        let on_toast = props.on_toast.clone();
        let to = offer.to.clone();
        let code = code.clone();
        Callback::from(move |_: MouseEvent| {
            clipboard::copy_text(code.clone());
            // Leave the code confirmation up longer than a standard toast
            on_toast.emit(
                Toast::success(
                    format!("Промокод для {} скопирован! 🎉", to),
                    "Перенаправляем в приложение...",
                )
                .with_duration(5_000),
            );
        })
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal promo-dialog">
                <div class="promo-dialog-header">
                    <h2 class="promo-dialog-title">{format!("Промокод {}", offer.to)}</h2>
                    <button class="modal-close" onclick={close.clone()}>{"✕"}</button>
                </div>

                <div class="offer-icons">
                    <ServiceIcon name={offer.from.clone()} size={40} />
                    <span class="offer-arrow">{"→"}</span>
                    <ServiceIcon name={offer.to.clone()} size={48} />
                </div>

                <p class="promo-dialog-summary">
                    {format!(
                        "{} {} {} бесплатно после отмены {}",
                        offer.free_months,
                        month_word_ru(offer.free_months),
                        offer.to,
                        offer.from,
                    )}
                </p>

                <div class="promo-code-box">
                    <code class="promo-code">{code.clone()}</code>
                    <button class="btn btn-primary" onclick={copy}>{"Скопировать"}</button>
                </div>

                <button class="btn btn-ghost" onclick={close}>{"Закрыть"}</button>
            </div>
        </div>
    }
}
