//! Light/dark mode switching for the shell.
//!
//! The mode lives in a context signal and is pushed onto `<body>` as a
//! `data-theme` attribute plus a set of CSS custom properties, so both
//! the stylesheet and inline styles see the same tokens. The mode is
//! deliberately not persisted; a reload starts from the default.

use contracts::theme::{Palette, ThemeMode};
use leptos::prelude::*;
use web_sys::window;

use crate::shared::icons::icon;

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new() -> Self {
        let mode = RwSignal::new(ThemeMode::default());
        apply_mode(mode.get_untracked());
        Self { mode }
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggle();
        self.mode.set(next);
        apply_mode(next);
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Push the mode onto `<body>`: a `data-theme` attribute plus the
/// palette tokens as CSS custom properties.
fn apply_mode(mode: ThemeMode) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };
    let _ = body.set_attribute("data-theme", mode.as_str());

    let palette = Palette::for_mode(mode);
    let style = body.style();
    let tokens = [
        ("--app-bar", palette.app_bar),
        ("--background", palette.background),
        ("--surface", palette.surface),
        ("--drawer", palette.drawer),
        ("--text-primary", palette.text_primary),
        ("--text-secondary", palette.text_secondary),
        ("--divider", palette.divider),
        ("--accent", palette.accent),
    ];
    for (name, value) in tokens {
        let _ = style.set_property(name, value);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found")
}

/// Sun/moon toggle button shown in the top header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || match ctx.mode.get() {
                ThemeMode::Light => "Mode gelap",
                ThemeMode::Dark => "Mode terang",
            }
        >
            {move || match ctx.mode.get() {
                ThemeMode::Light => icon("moon"),
                ThemeMode::Dark => icon("sun"),
            }}
        </button>
    }
}
