use super::form::{ContractForm, UsageBlock};
use super::view_model::ContractDetailsViewModel;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use contracts::domain::a001_cable_operator::aggregate::CableOperator;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ContractDetails(
    id: Option<ResourceId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ContractDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container contract-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar contrato" } else { "Nuevo contrato" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="operador">{"Operador"}</label>
                    <ReferenceSelect<CableOperator>
                        id="operador"
                        value=Signal::derive(move || vm.form.with(|f| f.cable_operator))
                        on_change=Callback::new(move |op: Option<ResourceId>| {
                            vm.form.update(|f| f.cable_operator = op)
                        })
                    />
                </div>

                <div class="form-group">
                    <label for="numero">{"Número"}</label>
                    <input
                        type="text"
                        id="numero"
                        prop:value=move || vm.form.with(|f| f.number.clone())
                        on:input=move |ev| vm.form.update(|f| f.number = event_target_value(&ev))
                        placeholder="CT-2025-001"
                    />
                </div>

                <div class="form-group">
                    <label for="fecha_inicio">{"Fecha de inicio"}</label>
                    <DateInput
                        id="fecha_inicio"
                        value=Signal::derive(move || vm.form.with(|f| f.start_date.clone()))
                        on_change=move |value| vm.set_start_date(value)
                    />
                </div>

                <div class="form-group">
                    <label for="duracion_anos">{"Duración (años)"}</label>
                    <input
                        type="number"
                        id="duracion_anos"
                        min="1"
                        prop:value=move || vm.form.with(|f| f.duration_years.to_string())
                        on:input=move |ev| {
                            let years = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                            vm.set_duration_years(years);
                        }
                    />
                </div>

                <div class="form-group">
                    <label>{"Fecha de fin"}</label>
                    <span class="form-value">{move || vm.form.with(|f| format_date(&f.end_date))}</span>
                </div>

                <div class="form-group">
                    <label>{"Estado"}</label>
                    <span class="form-value">{move || vm.form.with(|f| f.status.clone())}</span>
                </div>

                <fieldset class="form-fieldset">
                    <legend>{"Elementos instalados"}</legend>
                    {UsageBlock::ALL
                        .into_iter()
                        .map(|block| {
                            let read = move || vm.form.with(|f| f.usage(block));
                            view! {
                                <div class="form-row">
                                    <span class="form-row__label">{block.label()}</span>
                                    <input
                                        type="number"
                                        min="0"
                                        title="Cantidad"
                                        prop:value=move || read().cantidad.to_string()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                                            vm.form.update(|f| f.usage_mut(block).cantidad = value);
                                        }
                                    />
                                    <input
                                        type="number"
                                        min="0"
                                        title="Tarifa"
                                        prop:value=move || read().tarifa.to_string()
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev).parse::<u64>().unwrap_or(0);
                                            vm.form.update(|f| f.usage_mut(block).tarifa = value);
                                        }
                                    />
                                    <span class="form-row__total">
                                        {move || format_currency(read().monthly_total())}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                    <div class="form-row form-row--total">
                        <span class="form-row__label">{"Total mensual"}</span>
                        <span class="form-row__total">
                            {move || format_currency(vm.form.with(ContractForm::monthly_total))}
                        </span>
                    </div>
                </fieldset>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Guardar" } else { "Crear" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {icon("cancel")}
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
