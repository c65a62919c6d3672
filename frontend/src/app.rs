use yew::prelude::*;

use crate::components::features::{B2bAudit, Dashboard, FamilySharing, Marketplace, ProfileSettings};
use crate::components::layout::{Header, Sidebar};
use crate::components::toaster::{use_toaster, Toaster};
use crate::services::logging::Logger;

/// The single active-tab value. Exactly one screen is mounted at a time, and a
/// screen's collections reset to their seeds whenever it is re-mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Dashboard,
    Family,
    B2b,
    Marketplace,
    Settings,
}

#[function_component(App)]
pub fn app() -> Html {
    let active_tab = use_state(|| Tab::Dashboard);
    // Small-viewport overlay state, independent of tab selection
    let sidebar_open = use_state(|| false);
    let (toasts, push_toast) = use_toaster();

    let select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| {
            Logger::info_with_component("shell", &format!("tab selected: {:?}", tab));
            active_tab.set(tab);
        })
    };

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(true))
    };

    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_| sidebar_open.set(false))
    };

    let screen = match *active_tab {
        Tab::Dashboard => html! { <Dashboard on_toast={push_toast.clone()} /> },
        Tab::Family => html! { <FamilySharing on_toast={push_toast.clone()} /> },
        Tab::B2b => html! { <B2bAudit on_toast={push_toast.clone()} /> },
        Tab::Marketplace => html! { <Marketplace on_toast={push_toast.clone()} /> },
        Tab::Settings => html! { <ProfileSettings on_toast={push_toast.clone()} /> },
    };

    html! {
        <div class="app-layout">
            <Sidebar
                active_tab={*active_tab}
                on_select={select_tab}
                is_open={*sidebar_open}
                on_close={close_sidebar}
            />

            <div class="app-content">
                <Header active_tab={*active_tab} on_open_sidebar={open_sidebar} />
                <main class="app-main">{screen}</main>
            </div>

            <Toaster toasts={toasts} />
        </div>
    }
}
