use yew::prelude::*;

use crate::app::Tab;
use crate::components::layout::notifications_popover::NotificationsPopover;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_tab: Tab,
    pub on_open_sidebar: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let title = match props.active_tab {
        Tab::Dashboard => "Дашборд",
        Tab::Family => "Семья",
        Tab::B2b => "Команда",
        Tab::Marketplace => "Маркетплейс",
        Tab::Settings => "Настройки",
    };

    let on_menu = {
        let on_open_sidebar = props.on_open_sidebar.clone();
        Callback::from(move |_| on_open_sidebar.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-left">
                <button class="header-menu-btn" onclick={on_menu}>{"☰"}</button>
                <h1 class="header-title">{title}</h1>
            </div>

            <div class="header-right">
                <div class="header-search">
                    <input type="search" placeholder="Поиск сервисов..." />
                </div>
                <NotificationsPopover />
                <img
                    class="header-avatar"
                    src="https://i.pravatar.cc/150?u=current_user"
                    alt="Аскар К."
                />
            </div>
        </header>
    }
}
