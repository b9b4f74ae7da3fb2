use crate::domain::a001_cable_operator::ui::list::CableOperatorList;
use crate::domain::a002_contract::ui::list::ContractList;
use crate::domain::a003_invoice::ui::list::InvoiceList;
use crate::domain::a004_pole::ui::list::PoleList;
use crate::domain::a005_project::ui::list::ProjectIntakeList;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Menu entries: (path, label, icon)
pub const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/operadores", "Operadores", "operators"),
    ("/contratos", "Contratos", "contracts"),
    ("/facturas", "Facturas", "invoices"),
    ("/postes", "Postes", "poles"),
    ("/proyectos", "Proyectos", "projects"),
];

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">{"Página no encontrada"}</h1>
            <a href="/contratos">{"Ir a contratos"}</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/contratos" /> } />
                    <Route path=path!("/operadores") view=CableOperatorList />
                    <Route path=path!("/contratos") view=ContractList />
                    <Route path=path!("/facturas") view=InvoiceList />
                    <Route path=path!("/postes") view=PoleList />
                    <Route path=path!("/proyectos") view=ProjectIntakeList />
                </Routes>
            </Shell>
        </Router>
    }
}
