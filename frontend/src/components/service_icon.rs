use yew::prelude::*;

use crate::services::icons;

#[derive(Properties, PartialEq)]
pub struct ServiceIconProps {
    pub name: String,
    /// Icon edge in px
    #[prop_or(40)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders the resolved icon for a service; a failed image load (404, offline
/// CDN) swaps in a first-letter badge instead of surfacing an error.
#[function_component(ServiceIcon)]
pub fn service_icon(props: &ServiceIconProps) -> Html {
    let load_failed = use_state(|| false);

    let onerror = {
        let load_failed = load_failed.clone();
        Callback::from(move |_: Event| load_failed.set(true))
    };

    let initial = props
        .name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    if *load_failed {
        let style = format!(
            "width: {size}px; height: {size}px; font-size: {font}px;",
            size = props.size,
            font = props.size / 2
        );
        return html! {
            <div class={classes!("service-icon-fallback", props.class.clone())} style={style}>
                {initial}
            </div>
        };
    }

    let style = format!("width: {0}px; height: {0}px;", props.size);
    html! {
        <div class={classes!("service-icon", props.class.clone())}>
            <img
                src={icons::resolve(&props.name)}
                alt={props.name.clone()}
                style={style}
                {onerror}
            />
        </div>
    }
}
