use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Search field writing into the page's filter signal.
///
/// With `debounce_ms = 0` every keystroke updates the filter directly;
/// otherwise the update fires after the typing pause.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(optional)] debounce_ms: i32,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);
    let debounce_closure = StoredValue::new_local(None::<Closure<dyn Fn()>>);

    // Cancels the pending timeout and drops its callback. Also runs on
    // teardown so a keystroke followed by navigation cannot fire into a
    // disposed scope.
    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
        debounce_closure.set_value(None);
    };

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if debounce_ms <= 0 {
            value.set(new_value);
            return;
        }

        cancel_pending();

        let closure = Closure::wrap(Box::new(move || {
            value.set(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                debounce_ms,
            ) {
                debounce_timeout.set_value(Some(timeout_id));
            }
        }
        debounce_closure.set_value(Some(closure));
    };

    on_cleanup(cancel_pending);

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder.unwrap_or_else(|| "Cari...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
        </div>
    }
}
