use super::EntityId;
use crate::shared::delete_gate::ConfirmationPolicy;
use crate::shared::validation::FieldSpec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Payload of the create/edit form (the entity without its id)
pub trait EntityForm: Clone + Default + PartialEq + Serialize + Send + Sync + 'static {
    /// Raw value of the field with the given schema key
    fn field_value(&self, key: &str) -> &str;

    /// Mutable access used by the form bindings
    fn field_mut(&mut self, key: &str) -> Option<&mut String>;

    /// Copy with every field trimmed, as sent over the wire
    fn trimmed(&self) -> Self;
}

/// User-facing texts of one catalog screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityTexts {
    /// Page title, e.g. "Materiales"
    pub list_title: &'static str,
    /// Lowercase plural used in the load failure message
    pub load_subject: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub no_match_title: &'static str,
    pub no_match_hint: &'static str,
    /// Shown when the server answers 409 on create/update
    pub conflict: &'static str,
    /// Shown when the server refuses a delete
    pub delete_failed: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
}

/// A catalog managed through a CRUD screen
///
/// One implementation per entity replaces the per-screen copies of
/// load/validate/save/delete logic: the schema, the rule table, the
/// endpoints and the texts are all configuration.
pub trait CatalogEntity:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Form: EntityForm;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    /// Pre-fill for the edit form, taken straight from the cache
    fn to_form(&self) -> Self::Form;

    /// Case-insensitive match against the search box. Defaults to the name.
    fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.name().to_lowercase().contains(&query)
    }

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Collection endpoint, e.g. "/produccion/materiales"
    const COLLECTION_PATH: &'static str;

    /// Element endpoint without id, e.g. "/produccion/material"
    const ELEMENT_PATH: &'static str;

    /// Validation rule table, in display order
    const SCHEMA: &'static [FieldSpec];

    const CONFIRMATION: ConfirmationPolicy;

    const TEXTS: EntityTexts;

    fn element_url(base: &str, id: EntityId) -> String {
        format!("{}{}/{}", base, Self::ELEMENT_PATH, id)
    }
}
