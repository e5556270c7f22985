use leptos::prelude::*;

/// Yes/no confirmation used before destructive actions.
#[component]
pub fn ConfirmDialog(
    open: RwSignal<bool>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <div class="modal modal--confirm" on:click=|ev| ev.stop_propagation()>
                    <p class="modal__message">{move || message.get()}</p>
                    <div class="modal__actions">
                        <button class="btn btn--secondary" on:click=move |_| open.set(false)>
                            "Batal"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |_| {
                                open.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Hapus"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
