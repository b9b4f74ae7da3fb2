use crate::domain::a003_invoice::ui::details::InvoiceDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_list::{Column, PagedList};
use crate::shared::date_utils::{date_to_month, format_iso};
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

/// "2024-12 → 2025-01"
fn period(i: &Invoice) -> String {
    let month = |d: Option<chrono::NaiveDate>| {
        d.map(|d| date_to_month(&format_iso(d))).unwrap_or_default()
    };
    format!("{} → {}", month(i.period_start), month(i.period_end))
}

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("Número", |i: &Invoice| i.number.clone()),
        Column::new("Periodo", period),
        Column::new("Valor", |i: &Invoice| format_currency(i.amount)),
        Column::new("Pagada", |i: &Invoice| if i.paid { "Sí" } else { "No" }.to_string()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let editing = RwSignal::new(None::<Option<ResourceId>>);
    let reload = RwSignal::new(0u32);

    view! {
        <div class="page" id=page_id("a003_invoice", PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Facturas">
                <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    {"Nueva factura"}
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
                            <InvoiceDetails id=id on_saved=on_saved on_cancel=on_cancel />
                        </div>
                    }
                })}

                <PagedList<Invoice>
                    columns=columns()
                    on_select=Callback::new(move |i: Invoice| editing.set(Some(i.id)))
                    reload=reload
                />
            </div>
        </div>
    }
}
