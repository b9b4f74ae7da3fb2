//! Invoice Details UI Module
//!
//! - form.rs: form state, payment period as month inputs
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod form;
mod view;
mod view_model;

pub use form::InvoiceForm;
pub use view::InvoiceDetails;
pub use view_model::InvoiceDetailsViewModel;
