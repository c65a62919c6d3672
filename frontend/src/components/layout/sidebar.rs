use yew::prelude::*;

use crate::app::Tab;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_tab: Tab,
    pub on_select: Callback<Tab>,
    /// Small-viewport overlay visibility, independent of tab selection
    pub is_open: bool,
    pub on_close: Callback<()>,
}

const NAV_ITEMS: [(Tab, &str, &str); 5] = [
    (Tab::Dashboard, "Главная", "🏠"),
    (Tab::Family, "Семья", "👥"),
    (Tab::B2b, "Бизнес", "💼"),
    (Tab::Marketplace, "Маркетплейс", "🎁"),
    (Tab::Settings, "Настройки", "⚙️"),
];

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let backdrop = if props.is_open {
        let on_close = props.on_close.clone();
        html! {
            <div
                class="sidebar-backdrop"
                onclick={Callback::from(move |_| on_close.emit(()))}
            />
        }
    } else {
        html! {}
    };

    let sidebar_class = if props.is_open {
        "sidebar sidebar-open"
    } else {
        "sidebar"
    };

    html! {
        <>
            {backdrop}
            <aside class={sidebar_class}>
                <div class="sidebar-logo">
                    <span class="sidebar-logo-mark">{"S"}</span>
                    <span class="sidebar-logo-text">{"SubMan"}</span>
                </div>

                <nav class="sidebar-nav">
                    {for NAV_ITEMS.iter().map(|(tab, label, icon)| {
                        let tab = *tab;
                        let active = props.active_tab == tab;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| {
                                on_select.emit(tab);
                                on_close.emit(());
                            })
                        };
                        html! {
                            <button
                                class={if active { "sidebar-item sidebar-item-active" } else { "sidebar-item" }}
                                {onclick}
                            >
                                <span class="sidebar-item-icon">{icon}</span>
                                <span>{*label}</span>
                            </button>
                        }
                    })}
                </nav>

                <div class="sidebar-footer">
                    <img
                        class="sidebar-avatar"
                        src="https://i.pravatar.cc/150?u=current_user"
                        alt="Аскар К."
                    />
                    <div>
                        <div class="sidebar-user-name">{"Аскар К."}</div>
                        <div class="sidebar-user-plan">{"Pro Plan"}</div>
                    </div>
                </div>
            </aside>
        </>
    }
}
