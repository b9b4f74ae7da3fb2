//! Contract Details UI Module
//!
//! - form.rs: form state with the derived end date and status
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod form;
mod view;
mod view_model;

pub use form::{ContractForm, UsageBlock};
pub use view::ContractDetails;
pub use view_model::ContractDetailsViewModel;
