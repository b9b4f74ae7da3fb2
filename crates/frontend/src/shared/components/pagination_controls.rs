use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - previous/next over server cursors
///
/// Buttons are enabled from the `previous`/`next` cursors of the last page
/// received, never from a computed page count.
#[component]
pub fn PaginationControls(
    /// Page label, e.g. "Página 2 · 57 registros"
    #[prop(into)]
    summary: Signal<String>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    on_previous: Callback<()>,

    on_next: Callback<()>,

    /// Disables both buttons while a page is loading
    #[prop(optional, into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=move || busy.get() || !has_previous.get()
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{summary}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || busy.get() || !has_next.get()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
