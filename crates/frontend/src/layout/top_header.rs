//! Application top bar: drawer toggle, brand, notifications badge,
//! theme toggle, user info and logout.

use leptos::prelude::*;

use crate::layout::shell_context::use_shell;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::use_auth;

// Mock badge count, matching the demo data feed.
const NOTIFICATION_COUNT: u32 = 3;

#[component]
pub fn TopHeader() -> impl IntoView {
    let shell = use_shell();
    let auth = use_auth();

    let toggle_drawer = move |_| {
        shell.toggle_drawer();
    };

    let logout = move |_| {
        auth.logout();
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_drawer
                    title=move || if shell.drawer_open.get() { "Sembunyikan navigasi" } else { "Tampilkan navigasi" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Balai Yasa Dashboard"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn top-header__notifications" title="Notifikasi">
                    {icon("bell")}
                    <span class="top-header__badge">{NOTIFICATION_COUNT}</span>
                </button>

                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth.user.get().unwrap_or_else(|| "Tamu".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
