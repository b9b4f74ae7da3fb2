//! Sidebar with the navigation menu

use crate::routes::routes::NAV_ITEMS;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    let pick = |paths: &[&str]| -> Vec<(&'static str, &'static str, &'static str)> {
        NAV_ITEMS
            .iter()
            .filter(|(path, _, _)| paths.contains(path))
            .copied()
            .collect()
    };
    vec![
        MenuGroup {
            label: "Registros",
            items: pick(&["/operadores", "/postes"]),
        },
        MenuGroup {
            label: "Gestión",
            items: pick(&["/contratos", "/facturas", "/proyectos"]),
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|(path, label, icon_name)| view! {
                        <a href=path class="app-sidebar__item">
                            <div class="app-sidebar__item-content">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </div>
                        </a>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}
