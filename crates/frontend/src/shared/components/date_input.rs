use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in its own locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, "" when cleared)
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] id: String,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form-input"
            id=id
            disabled=disabled
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
