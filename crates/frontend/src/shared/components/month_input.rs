use leptos::prelude::*;

/// Month picker bound to a "YYYY-MM" value
#[component]
pub fn MonthInput(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] id: String,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <input
            type="month"
            class="form-input"
            id=id
            disabled=disabled
            prop:value=value
            on:input=move |ev| on_change(event_target_value(&ev))
        />
    }
}
