use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::config::config;
use crate::shared::list_utils::{filter_list, ListState};
use crate::shared::resource_api::ResourceApi;
use contracts::domain::common::ApiResource;
use contracts::shared::page::PageQuery;
use leptos::prelude::*;

/// One table column: header and cell text
pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R) -> String,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, cell: fn(&R) -> String) -> Self {
        Self { header, cell }
    }
}

/// Server-paginated table of one resource
///
/// The search box is submitted on Enter; page buttons follow the server
/// cursors. With `client_filter` a second box filters the rows already on
/// screen without a request.
#[component]
pub fn PagedList<R>(
    columns: Vec<Column<R>>,
    /// Row click
    #[prop(optional)]
    on_select: Option<Callback<R>>,
    /// Changing this signal reloads the current page
    #[prop(optional, into)]
    reload: Option<Signal<u32>>,
    #[prop(optional)]
    client_filter: bool,
) -> impl IntoView
where
    R: ApiResource + Send + Sync,
{
    let columns = StoredValue::new(columns);
    let state = RwSignal::new(ListState::new(config().list.search_min_chars));
    let (items, set_items) = signal::<Vec<R>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (filter, set_filter) = signal(String::new());

    let load = move |query: PageQuery| {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ResourceApi::<R>::browser().list(&query).await {
                Ok(page) => {
                    state.update(|s| s.apply_page(&page));
                    set_items.set(page.results);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("Failed to load {}: {}", R::list_name(), e);
                    set_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if let Some(reload) = reload {
            reload.track();
        }
        load(state.with_untracked(|s| s.query()));
    });

    let submit_search = Callback::new(move |_: ()| {
        if let Some(query) = state.try_update(|s| s.submit_search()) {
            load(query);
        }
    });

    let clear_search = Callback::new(move |_: ()| {
        if let Some(query) = state.try_update(|s| s.clear_search()) {
            load(query);
        }
    });

    let go_previous = Callback::new(move |_: ()| {
        if let Some(Some(query)) = state.try_update(|s| s.previous()) {
            load(query);
        }
    });

    let go_next = Callback::new(move |_: ()| {
        if let Some(Some(query)) = state.try_update(|s| s.next()) {
            load(query);
        }
    });

    let visible = move || {
        let rows = items.get();
        if client_filter {
            filter.with(|f| filter_list(&rows, f))
        } else {
            rows
        }
    };

    view! {
        <div class="list-toolbar">
            <SearchInput
                value=Signal::derive(move || state.with(|s| s.search_input.clone()))
                on_input=Callback::new(move |text: String| state.update(|s| s.search_input = text))
                on_submit=submit_search
                on_clear=clear_search
                placeholder=format!("Buscar {}...", R::list_name().to_lowercase())
            />
            <Show when=move || client_filter>
                <input
                    type="text"
                    class="list-toolbar__filter"
                    placeholder="Filtrar en pantalla"
                    prop:value=filter
                    on:input=move |ev| set_filter.set(event_target_value(&ev))
                />
            </Show>
        </div>

        {move || error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}

        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {columns.with_value(|cols| {
                            cols.iter()
                                .map(|c| view! { <th class="table__header-cell">{c.header}</th> })
                                .collect_view()
                        })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = visible();
                        if rows.is_empty() && !loading.get() {
                            let span = columns.with_value(|cols| cols.len());
                            return view! {
                                <tr class="table__row table__row--empty">
                                    <td class="table__cell" colspan=span.to_string()>{"Sin registros"}</td>
                                </tr>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|item| {
                                let cells: Vec<String> = columns
                                    .with_value(|cols| cols.iter().map(|c| (c.cell)(&item)).collect());
                                view! {
                                    <tr
                                        class="table__row"
                                        on:click=move |_| {
                                            if let Some(on_select) = on_select {
                                                on_select.run(item.clone());
                                            }
                                        }
                                    >
                                        {cells
                                            .into_iter()
                                            .map(|text| view! { <td class="table__cell">{text}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>

        <PaginationControls
            summary=Signal::derive(move || state.with(ListState::summary))
            has_previous=Signal::derive(move || state.with(|s| s.has_previous))
            has_next=Signal::derive(move || state.with(|s| s.has_next))
            on_previous=go_previous
            on_next=go_next
            busy=loading
        />
    }
}
