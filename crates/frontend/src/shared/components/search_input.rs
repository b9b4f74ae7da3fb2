use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box that submits on Enter or the search button
///
/// Typing only updates `value`; the list is queried on submit.
#[component]
pub fn SearchInput(
    /// Text currently in the box
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    /// Empties the box and searches everything
    on_clear: Callback<()>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let has_text = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                }
            />
            <Show when=has_text>
                <button
                    class="search-input__clear"
                    title="Limpiar"
                    on:click=move |_| on_clear.run(())
                >
                    {icon("x")}
                </button>
            </Show>
            <button
                class="button button--secondary"
                on:click=move |_| on_submit.run(())
            >
                {icon("search")}
                {"Buscar"}
            </button>
        </div>
    }
}
