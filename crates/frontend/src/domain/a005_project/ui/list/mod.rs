use crate::shared::components::page_header::PageHeader;
use crate::shared::components::paged_list::{Column, PagedList};
use crate::shared::date_utils::format_opt_date;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};
use contracts::domain::a005_project::aggregate::ProjectIntake;
use leptos::prelude::*;

fn columns() -> Vec<Column<ProjectIntake>> {
    vec![
        Column::new("Proyecto", |p: &ProjectIntake| p.name.clone()),
        Column::new("Radicado el", |p: &ProjectIntake| format_opt_date(p.filed_on)),
        Column::new("Estado", |p: &ProjectIntake| p.status.label().to_string()),
        Column::new("Postes", |p: &ProjectIntake| p.pole_count.to_string()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProjectIntakeList() -> impl IntoView {
    view! {
        <div class="page" id=page_id("a005_project", PAGE_CAT_LIST) data-page-category=PAGE_CAT_LIST>
            <PageHeader title="Proyectos" subtitle="Radicación de proyectos de despliegue".to_string() />
            <div class="page__content">
                <PagedList<ProjectIntake> columns=columns() />
            </div>
        </div>
    }
}
