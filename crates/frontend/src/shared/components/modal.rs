use leptos::prelude::*;

use crate::shared::icons::icon;

/// Centered dialog over a dimmed overlay. Clicking the overlay or the
/// close button closes it; clicks inside the dialog do not propagate.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h3 class="modal__title">{move || title.get()}</h3>
                        <button class="modal__close" on:click=move |_| open.set(false)>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="modal__body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
