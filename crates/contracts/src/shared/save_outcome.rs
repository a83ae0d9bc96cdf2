//! What the form does once a POST/PUT has been answered.

use crate::domain::common::EntityId;
use crate::shared::api_error::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Blank the form for the next record (create mode only)
    pub reset_form: bool,
    /// Fetch the collection again
    pub reload: bool,
    /// Close the dialog the form lives in
    pub close: bool,
    /// Message shown under the form; the typed values are kept
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn from_result(editing: Option<EntityId>, result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self {
                reset_form: editing.is_none(),
                reload: true,
                close: true,
                error: None,
            },
            Err(e) => Self {
                reset_form: false,
                reload: false,
                close: false,
                error: Some(format!("Error: {}", e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_provider::aggregate::FIELD_NOMBRE;
    use crate::domain::a002_provider::{Provider, ProviderForm};
    use crate::domain::common::CatalogEntity;
    use crate::shared::api_error::{parse_list_response, parse_save_response};
    use crate::shared::cache::EntityCache;
    use crate::shared::validation::validate_form;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_created_closes_resets_and_reloads() {
        let result = parse_save_response(201, r#"{"id":3,"nombre":"Acme Corp"}"#, Provider::TEXTS.conflict);
        assert_eq!(
            SaveOutcome::from_result(None, &result),
            SaveOutcome {
                reset_form: true,
                reload: true,
                close: true,
                error: None,
            }
        );
    }

    #[test]
    fn test_updated_keeps_form() {
        let outcome = SaveOutcome::from_result(Some(EntityId(3)), &Ok(()));
        assert!(!outcome.reset_form);
        assert!(outcome.reload && outcome.close);
    }

    #[test]
    fn test_unreadable_success_body_still_reloads() {
        let result = parse_save_response(200, "<html>ok</html>", Provider::TEXTS.conflict);
        let outcome = SaveOutcome::from_result(None, &result);
        assert!(outcome.reload && outcome.close);
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn test_conflict_keeps_dialog_open() {
        let result = parse_save_response(409, "", Provider::TEXTS.conflict);
        assert_eq!(
            SaveOutcome::from_result(None, &result),
            SaveOutcome {
                reset_form: false,
                reload: false,
                close: false,
                error: Some("Error: Este proveedor ya existe.".to_string()),
            }
        );
    }

    #[test]
    fn test_created_provider_repopulates_cache_on_reload() {
        let mut cache: EntityCache<Provider> = EntityCache::new();
        let result = parse_save_response(201, "", Provider::TEXTS.conflict);
        let outcome = SaveOutcome::from_result(None, &result);
        assert!(outcome.reload);

        let body = r#"[{"id":3,"nombre":"Acme Corp","contacto":"Laura","telefono":"5512345678",
            "correo":null,"direccion":"Av. Central 10"}]"#;
        cache.replace(Some(parse_list_response(200, body).unwrap()));
        assert_eq!(cache.len(), 1);

        // a second create with the same name is now blocked client-side
        let form = ProviderForm {
            nombre: "acme corp".to_string(),
            ..ProviderForm::default()
        };
        assert_eq!(
            validate_form::<Provider>(&form, &cache, None).error(FIELD_NOMBRE),
            Some("Este proveedor ya existe.")
        );
    }
}
