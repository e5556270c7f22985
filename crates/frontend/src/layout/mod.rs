pub mod shell_context;
pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::toast::ToastHost;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application frame: top bar, collapsible drawer, routed content area.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <TopHeader />
            <div class="app-shell__body">
                <Sidebar />
                <main class="app-shell__content">
                    <Outlet />
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
