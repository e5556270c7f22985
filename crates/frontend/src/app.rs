use crate::layout::shell_context::ShellContext;
use crate::routes::AppRoutes;
use crate::shared::theme::ThemeContext;
use crate::shared::toast::ToastService;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Application-level state containers, provided once for the whole
    // view tree.
    provide_context(ShellContext::new());
    provide_context(ThemeContext::new());
    provide_context(ToastService::new());
    provide_context(AuthContext::new());

    view! {
        <AppRoutes />
    }
}
