use super::form::InvoiceForm;
use crate::shared::resource_api::ResourceApi;
use contracts::domain::a003_invoice::aggregate::Invoice;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the invoice details form
#[derive(Clone, Copy)]
pub struct InvoiceDetailsViewModel {
    pub form: RwSignal<InvoiceForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl InvoiceDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(InvoiceForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(InvoiceForm::is_edit_mode)
    }

    pub fn load_if_needed(&self, id: Option<ResourceId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match ResourceApi::<Invoice>::browser().get(id).await {
                Ok(invoice) => form.set(InvoiceForm::from_invoice(&invoice)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let invoice = match self.form.with(InvoiceForm::validated) {
            Ok(invoice) => invoice,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ResourceApi::<Invoice>::browser().save(&invoice).await {
                Ok(_) => {
                    error.set(None);
                    (on_saved)(());
                }
                Err(e) => {
                    log::warn!("Failed to save invoice: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for InvoiceDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
