use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404"</h2>
            <p>"Halaman tidak ditemukan"</p>
            <a href="/" class="btn btn--primary">"Kembali ke Dashboard"</a>
        </div>
    }
}
