//! Navigation drawer driven by the static menu tree in
//! `contracts::nav`. Groups expand in place; leaves navigate.

use contracts::nav::{item_is_active, NavItem, MAIN_MENU};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::layout::shell_context::{use_shell, ShellContext};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();
    let location = use_location();
    let navigate = use_navigate();
    let pathname = location.pathname;

    view! {
        <aside
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !shell.drawer_open.get()
        >
            <div class="app-sidebar__content">
                {MAIN_MENU.iter().map(|item| {
                    let item = *item;
                    let navigate = navigate.clone();
                    if item.is_group() {
                        group_view(shell, pathname, navigate, item).into_any()
                    } else {
                        leaf_view(pathname, navigate, item, false).into_any()
                    }
                }).collect_view()}
            </div>
        </aside>
    }
}

fn leaf_view(
    pathname: Memo<String>,
    navigate: impl Fn(&str, NavigateOptions) + Clone + Send + Sync + 'static,
    item: NavItem,
    nested: bool,
) -> impl IntoView {
    let path = item.path.unwrap_or("/");
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || item_is_active(&pathname.get(), &item)
            class:app-sidebar__item--nested=nested
            on:click=move |_| navigate(path, NavigateOptions::default())
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span class="app-sidebar__label">{item.label}</span>
            </div>
        </div>
    }
}

fn group_view(
    shell: ShellContext,
    pathname: Memo<String>,
    navigate: impl Fn(&str, NavigateOptions) + Clone + Send + Sync + 'static,
    item: NavItem,
) -> impl IntoView {
    let label = item.label;
    let expanded = move || shell.expanded.get().iter().any(|group| group == label);

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || item_is_active(&pathname.get(), &item)
                on:click=move |_| shell.toggle_group(label)
            >
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span class="app-sidebar__label">{label}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>

            // the group holding the active route stays open
            <Show when=move || expanded() || item_is_active(&pathname.get(), &item)>
                <div class="app-sidebar__children">
                    {item.children.iter().map(|child| {
                        let navigate = navigate.clone();
                        leaf_view(pathname, navigate, *child, true)
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
