use leptos::prelude::*;

/// Small summary card used at the top of the dashboard-style pages.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
            {hint.map(|text| view! { <div class="stat-card__hint">{text}</div> })}
        </div>
    }
}
