use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_list::{Column, PagedList};
use crate::shared::number_format::format_number_with_decimals;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a004_pole::aggregate::Pole;
use leptos::prelude::*;

fn columns() -> Vec<Column<Pole>> {
    vec![
        Column::new("Código", |p: &Pole| p.code.clone()),
        Column::new("Latitud", |p: &Pole| format_number_with_decimals(p.coordinates().0, 6)),
        Column::new("Longitud", |p: &Pole| format_number_with_decimals(p.coordinates().1, 6)),
        Column::new("Altura (m)", |p: &Pole| p.height_m.to_string()),
        Column::new("Propietario", |p: &Pole| p.owner.clone()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PoleList() -> impl IntoView {
    view! {
        <div class="page" id=page_id("a004_pole", PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Postes" />
            <div class="page__content">
                <PagedList<Pole> columns=columns() />
            </div>
        </div>
    }
}
