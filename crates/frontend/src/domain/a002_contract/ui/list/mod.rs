use crate::domain::a002_contract::ui::details::ContractDetails;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_list::{Column, PagedList};
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a002_contract::aggregate::Contract;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

/// Status shown in the table: recomputed from the dates when possible
fn status_label(c: &Contract) -> String {
    c.status_at(SystemClock.today())
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| c.status.clone())
}

fn columns() -> Vec<Column<Contract>> {
    vec![
        Column::new("Número", |c: &Contract| c.number.clone()),
        Column::new("Inicio", |c: &Contract| format_opt_date(c.start_date)),
        Column::new("Fin", |c: &Contract| format_opt_date(c.end_date)),
        Column::new("Estado", status_label),
        Column::new("Total mensual", |c: &Contract| format_currency(c.monthly_total())),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    // None: closed, Some(None): new contract, Some(Some(id)): editing
    let editing = RwSignal::new(None::<Option<ResourceId>>);
    let reload = RwSignal::new(0u32);

    view! {
        <div class="page" id=page_id("a002_contract", PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Contratos">
                <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    {"Nuevo contrato"}
                </button>
                <button class="button button--secondary" on:click=move |_| reload.update(|n| *n += 1)>
                    {icon("refresh")}
                    {"Actualizar"}
                </button>
            </PageHeader>

            <div class="page__content">
                {move || editing.get().map(|id| {
                    let on_saved: Rc<dyn Fn(())> = Rc::new(move |_: ()| {
                        editing.set(None);
                        reload.update(|n| *n += 1);
                    });
                    let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_: ()| editing.set(None));
                    view! {
                        <div class="details-panel">
                            <ContractDetails id=id on_saved=on_saved on_cancel=on_cancel />
                        </div>
                    }
                })}

                <PagedList<Contract>
                    columns=columns()
                    on_select=Callback::new(move |c: Contract| editing.set(Some(c.id)))
                    reload=reload
                />
            </div>
        </div>
    }
}
