use super::form::ContractForm;
use crate::shared::clock::{Clock, SystemClock};
use crate::shared::resource_api::ResourceApi;
use contracts::domain::a002_contract::aggregate::Contract;
use contracts::domain::common::ResourceId;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the contract details form
#[derive(Clone, Copy)]
pub struct ContractDetailsViewModel {
    pub form: RwSignal<ContractForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ContractDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContractForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(ContractForm::is_edit_mode)
    }

    pub fn set_start_date(&self, value: String) {
        let today = SystemClock.today();
        self.form.update(|f| {
            f.set_start_date(value, today);
        });
    }

    pub fn set_duration_years(&self, years: u32) {
        let today = SystemClock.today();
        self.form.update(|f| {
            f.set_duration_years(years, today);
        });
    }

    /// Load form data from server if ID is provided
    pub fn load_if_needed(&self, id: Option<ResourceId>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match ResourceApi::<Contract>::browser().get(id).await {
                Ok(contract) => form.set(ContractForm::from_contract(&contract)),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let contract = match self.form.with(ContractForm::validated) {
            Ok(contract) => contract,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match ResourceApi::<Contract>::browser().save(&contract).await {
                Ok(_) => {
                    error.set(None);
                    (on_saved)(());
                }
                Err(e) => {
                    log::warn!("Failed to save contract: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            saving.set(false);
        });
    }
}

impl Default for ContractDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
