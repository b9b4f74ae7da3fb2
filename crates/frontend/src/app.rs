use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Layout state (sidebar visibility) for the whole app
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
