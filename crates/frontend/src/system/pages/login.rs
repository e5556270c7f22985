use leptos::prelude::*;

use crate::system::auth::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match auth.login(&username.get_untracked(), &password.get_untracked()) {
            Ok(()) => error.set(None),
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="login">
            <form class="login__card" on:submit=submit>
                <h1 class="login__title">"Balai Yasa Dashboard"</h1>
                <p class="login__subtitle">"Silakan masuk untuk melanjutkan"</p>

                <label class="form__label">"Username"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />

                <label class="form__label">"Password"</label>
                <input
                    type="password"
                    class="form__input"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! {
                    <div class="form__error">{message}</div>
                })}

                <button type="submit" class="btn btn--primary login__submit">"Masuk"</button>
            </form>
        </div>
    }
}
