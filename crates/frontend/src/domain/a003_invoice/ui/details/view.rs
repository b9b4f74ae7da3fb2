use super::view_model::InvoiceDetailsViewModel;
use crate::shared::components::month_input::MonthInput;
use crate::shared::components::reference_select::ReferenceSelect;
use crate::shared::icons::icon;
use crate::shared::number_format::format_currency;
use contracts::domain::a002_contract::aggregate::Contract;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn InvoiceDetails(
    id: Option<ResourceId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = InvoiceDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container invoice-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar factura" } else { "Nueva factura" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="contrato">{"Contrato"}</label>
                    <ReferenceSelect<Contract>
                        id="contrato"
                        value=Signal::derive(move || vm.form.with(|f| f.contract))
                        on_change=Callback::new(move |contract: Option<ResourceId>| {
                            vm.form.update(|f| f.contract = contract)
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
                        placeholder="FV-0001"
                    />
                </div>

                <div class="form-group">
                    <label for="periodo_inicio">{"Periodo desde"}</label>
                    <MonthInput
                        id="periodo_inicio"
                        value=Signal::derive(move || vm.form.with(|f| f.start_month.clone()))
                        on_change=move |month| vm.form.update(|f| f.set_start_month(month))
                    />
                </div>

                <div class="form-group">
                    <label for="periodo_fin">{"Periodo hasta"}</label>
                    <MonthInput
                        id="periodo_fin"
                        value=Signal::derive(move || vm.form.with(|f| f.end_month.clone()))
                        on_change=|_| {}
                        disabled=true
                    />
                </div>

                <div class="form-group">
                    <label for="valor">{"Valor"}</label>
                    <input
                        type="number"
                        id="valor"
                        min="0"
                        prop:value=move || vm.form.with(|f| f.amount.to_string())
                        on:input=move |ev| {
                            let amount = event_target_value(&ev).parse::<u64>().unwrap_or(0);
                            vm.form.update(|f| f.amount = amount);
                        }
                    />
                    <span class="form-hint">{move || format_currency(vm.form.with(|f| f.amount))}</span>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="pagada"
                        prop:checked=move || vm.form.with(|f| f.paid)
                        on:change=move |ev| vm.form.update(|f| f.paid = event_target_checked(&ev))
                    />
                    <label for="pagada">{"Pagada"}</label>
                </div>
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
