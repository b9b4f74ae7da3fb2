use crate::shared::resource_api::ResourceApi;
use contracts::domain::common::{ApiResource, ResourceId};
use leptos::prelude::*;

/// `<select>` over every record of `R`, loaded once per mount
///
/// Options come from `list_all`, so a second select of the same resource
/// within the cache lifetime does not hit the server.
#[component]
pub fn ReferenceSelect<R>(
    #[prop(into)] value: Signal<Option<ResourceId>>,
    on_change: Callback<Option<ResourceId>>,
    #[prop(optional, into)] id: String,
    #[prop(optional)] disabled: bool,
    /// Option text; `display_name` when absent
    #[prop(optional)]
    label: Option<fn(&R) -> String>,
) -> impl IntoView
where
    R: ApiResource,
{
    let (options, set_options) = signal::<Vec<(ResourceId, String)>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let label = label.unwrap_or(R::display_name);

    wasm_bindgen_futures::spawn_local(async move {
        match ResourceApi::<R>::browser().list_all().await {
            Ok(list) => {
                let opts = list
                    .results
                    .iter()
                    .filter_map(|item| item.id().map(|id| (id, label(item))))
                    .collect();
                set_options.set(opts);
                set_error.set(None);
            }
            Err(e) => {
                log::warn!("Failed to load {} options: {}", R::list_name(), e);
                set_error.set(Some(e.user_message()));
            }
        }
    });

    view! {
        <select
            class="form-select"
            id=id
            disabled=disabled
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<ResourceId>().ok())
        >
            <option value="" selected=move || value.get().is_none()>
                {format!("Seleccione {}", R::element_name().to_lowercase())}
            </option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(option_id, label)| {
                        view! {
                            <option
                                value=option_id.to_string()
                                selected=move || value.get() == Some(option_id)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
        {move || error.get().map(|e| view! { <span class="field-error">{e}</span> })}
    }
}
