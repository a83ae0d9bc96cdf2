//! Generic CRUD building blocks shared by the catalog screens.
//!
//! An entity plugs in through `contracts::domain::common::CatalogEntity`;
//! the store, the form view model and the components here do the rest.

pub mod api;
pub mod confirm_delete;
pub mod form_field;
pub mod form_modal;
pub mod form_view_model;
pub mod list_area;
pub mod store;

pub use confirm_delete::ConfirmDeleteModal;
pub use form_modal::CatalogFormModal;
pub use form_view_model::FormViewModel;
pub use list_area::list_area;
pub use store::CrudStore;
