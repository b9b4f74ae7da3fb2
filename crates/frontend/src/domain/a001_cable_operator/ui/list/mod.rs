use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_list::{Column, PagedList};
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a001_cable_operator::aggregate::CableOperator;
use leptos::prelude::*;

fn columns() -> Vec<Column<CableOperator>> {
    vec![
        Column::new("Nombre", |o: &CableOperator| o.name.clone()),
        Column::new("NIT", |o: &CableOperator| o.nit.clone()),
        Column::new("Correo", |o: &CableOperator| o.email.clone()),
        Column::new("Teléfono", |o: &CableOperator| o.phone.clone()),
        Column::new("Activo", |o: &CableOperator| if o.active { "Sí" } else { "No" }.to_string()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CableOperatorList() -> impl IntoView {
    view! {
        <div class="page" id=page_id("a001_cable_operator", PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Operadores" subtitle="Operadores de cable con acceso a la infraestructura".to_string() />
            <div class="page__content">
                <PagedList<CableOperator> columns=columns() client_filter=true />
            </div>
        </div>
    }
}
