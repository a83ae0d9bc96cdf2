use crate::domain::common::{nullable, CatalogEntity, EntityForm, EntityId, EntityTexts};
use crate::shared::delete_gate::ConfirmationPolicy;
use crate::shared::listing::{or_placeholder, NOT_AVAILABLE};
use crate::shared::validation::{FieldSpec, Rule};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Поставщик материалов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable::string")]
    pub nombre: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub contacto: String,

    #[serde(default, deserialize_with = "nullable::string")]
    pub telefono: String,

    #[serde(default)]
    pub correo: Option<String>,

    #[serde(default)]
    pub direccion: Option<String>,
}

impl Provider {
    pub fn email_label(&self) -> &str {
        or_placeholder(self.correo.as_deref(), NOT_AVAILABLE)
    }

    pub fn address_label(&self) -> &str {
        or_placeholder(self.direccion.as_deref(), NOT_AVAILABLE)
    }
}

pub const FIELD_NOMBRE: &str = "nombre";
pub const FIELD_CONTACTO: &str = "contacto";
pub const FIELD_TELEFONO: &str = "telefono";
pub const FIELD_CORREO: &str = "correo";
pub const FIELD_DIRECCION: &str = "direccion";

const PROVIDER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new(
        FIELD_NOMBRE,
        "Nombre de la empresa",
        &[
            Rule::Required("El nombre es obligatorio."),
            Rule::UniqueName("Este proveedor ya existe."),
        ],
    )
    .placeholder("Ej. Plásticos del Norte"),
    FieldSpec::new(
        FIELD_CONTACTO,
        "Persona de contacto",
        &[Rule::Required("El contacto es obligatorio.")],
    ),
    FieldSpec::new(
        FIELD_TELEFONO,
        "Teléfono",
        &[Rule::Digits(10, "Debe ser un número de al menos 10 dígitos.")],
    )
    .input_type("tel")
    .placeholder("10 dígitos"),
    FieldSpec::new(
        FIELD_DIRECCION,
        "Dirección",
        &[Rule::MoreThanChars(5, "Debe tener más de 5 caracteres.")],
    ),
    FieldSpec::new(
        FIELD_CORREO,
        "Correo electrónico",
        &[Rule::Email("El formato del email no es válido.")],
    )
    .input_type("email")
    .placeholder("Opcional"),
];

impl CatalogEntity for Provider {
    type Form = ProviderForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.nombre
    }

    fn to_form(&self) -> ProviderForm {
        ProviderForm {
            nombre: self.nombre.clone(),
            contacto: self.contacto.clone(),
            telefono: self.telefono.clone(),
            correo: self.correo.clone().unwrap_or_default(),
            direccion: self.direccion.clone().unwrap_or_default(),
        }
    }

    /// Name, contact, phone and email take part in the search; address does not
    fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [
            self.nombre.as_str(),
            self.contacto.as_str(),
            self.telefono.as_str(),
            self.email_label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
    }

    const COLLECTION_PATH: &'static str = "/produccion/proveedores";
    const ELEMENT_PATH: &'static str = "/produccion/proveedor";
    const SCHEMA: &'static [FieldSpec] = PROVIDER_SCHEMA;
    const CONFIRMATION: ConfirmationPolicy = ConfirmationPolicy::NameSlug("eliminar");

    const TEXTS: EntityTexts = EntityTexts {
        list_title: "Proveedores",
        load_subject: "proveedores",
        empty_title: "No hay proveedores registrados",
        empty_hint: "Añade un nuevo proveedor para empezar.",
        no_match_title: "No se encontraron proveedores",
        no_match_hint: "Intenta con un término de búsqueda diferente.",
        conflict: "Este proveedor ya existe.",
        delete_failed: "No se pudo eliminar el proveedor. Es posible que esté en uso.",
        create_title: "Registrar Nuevo Proveedor",
        edit_title: "Editar Proveedor",
    };
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело POST/PUT для поставщика
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderForm {
    pub nombre: String,
    pub contacto: String,
    pub telefono: String,
    pub correo: String,
    pub direccion: String,
}

impl EntityForm for ProviderForm {
    fn field_value(&self, key: &str) -> &str {
        match key {
            FIELD_NOMBRE => &self.nombre,
            FIELD_CONTACTO => &self.contacto,
            FIELD_TELEFONO => &self.telefono,
            FIELD_CORREO => &self.correo,
            FIELD_DIRECCION => &self.direccion,
            _ => "",
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            FIELD_NOMBRE => Some(&mut self.nombre),
            FIELD_CONTACTO => Some(&mut self.contacto),
            FIELD_TELEFONO => Some(&mut self.telefono),
            FIELD_CORREO => Some(&mut self.correo),
            FIELD_DIRECCION => Some(&mut self.direccion),
            _ => None,
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            contacto: self.contacto.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            correo: self.correo.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::EntityCache;
    use crate::shared::validation::validate_form;
    use pretty_assertions::assert_eq;

    fn provider(id: i64, nombre: &str) -> Provider {
        Provider {
            id: EntityId(id),
            nombre: nombre.to_string(),
            contacto: "Laura Méndez".to_string(),
            telefono: "5512345678".to_string(),
            correo: Some("ventas@acme.com".to_string()),
            direccion: Some("Av. Reforma 100".to_string()),
        }
    }

    fn valid_form() -> ProviderForm {
        ProviderForm {
            nombre: "Plásticos del Norte".to_string(),
            contacto: "Jorge Ruiz".to_string(),
            telefono: "8112345678".to_string(),
            correo: String::new(),
            direccion: "Calle 5 #20".to_string(),
        }
    }

    fn cache() -> EntityCache<Provider> {
        EntityCache::from_items(vec![provider(1, "Acme Corp"), provider(2, "Polímeros SA")])
    }

    #[test]
    fn test_valid_form() {
        assert!(validate_form(&valid_form(), &cache(), None).is_valid());
    }

    #[test]
    fn test_duplicate_name_except_self() {
        let mut f = valid_form();
        f.nombre = "acme corp".to_string();
        let v = validate_form(&f, &cache(), None);
        assert_eq!(v.error(FIELD_NOMBRE), Some("Este proveedor ya existe."));
        assert!(validate_form(&f, &cache(), Some(EntityId(1))).is_valid());
    }

    #[test]
    fn test_short_name_is_fine() {
        let mut f = valid_form();
        f.nombre = "AB".to_string();
        assert!(validate_form(&f, &cache(), None).is_valid());
    }

    #[test]
    fn test_contact_required() {
        let mut f = valid_form();
        f.contacto = "  ".to_string();
        let v = validate_form(&f, &cache(), None);
        assert_eq!(v.error(FIELD_CONTACTO), Some("El contacto es obligatorio."));
        assert!(!v.is_valid());
    }

    #[test]
    fn test_phone_rules() {
        let c = cache();
        for bad in ["", "551234567", "55 1234 5678", "55-1234-567", "abcdefghij", "+525512345678"] {
            let mut f = valid_form();
            f.telefono = bad.to_string();
            assert!(validate_form(&f, &c, None).error(FIELD_TELEFONO).is_some(), "accepted {bad:?}");
        }
        let mut f = valid_form();
        f.telefono = " 5512345678 ".to_string();
        assert!(validate_form(&f, &c, None).is_valid());
    }

    #[test]
    fn test_address_must_exceed_five_chars() {
        let c = cache();
        for (addr, invalid) in [("", true), ("Calle", true), ("  Calle  ", true), ("Calle 1", false)] {
            let mut f = valid_form();
            f.direccion = addr.to_string();
            assert_eq!(validate_form(&f, &c, None).error(FIELD_DIRECCION).is_some(), invalid, "{addr:?}");
        }
    }

    #[test]
    fn test_email_optional_but_checked() {
        let c = cache();
        let mut f = valid_form();
        f.correo = "ventas@norte".to_string();
        assert_eq!(
            validate_form(&f, &c, None).error(FIELD_CORREO),
            Some("El formato del email no es válido.")
        );
        f.correo = "ventas@norte.mx".to_string();
        assert!(validate_form(&f, &c, None).is_valid());
        f.correo = "   ".to_string();
        assert!(validate_form(&f, &c, None).is_valid());
    }

    #[test]
    fn test_every_field_reported() {
        let v = validate_form(&ProviderForm::default(), &cache(), None);
        let keys: Vec<&str> = v.fields.iter().filter(|f| f.error.is_some()).map(|f| f.key).collect();
        assert_eq!(keys, vec![FIELD_NOMBRE, FIELD_CONTACTO, FIELD_TELEFONO, FIELD_DIRECCION]);
    }

    #[test]
    fn test_search_fields() {
        let p = provider(1, "Acme Corp");
        assert!(p.matches_search("ACME"));
        assert!(p.matches_search("méndez"));
        assert!(p.matches_search("551234"));
        assert!(p.matches_search("ventas@"));
        assert!(!p.matches_search("reforma"));
        assert!(p.matches_search(""));
    }

    #[test]
    fn test_deserializes_nulls_and_placeholders() {
        let p: Provider = serde_json::from_str(
            r#"{"id":3,"nombre":"Vidrios MX","contacto":null,"telefono":"5500000000","correo":null}"#,
        )
        .unwrap();
        assert_eq!(p.contacto, "");
        assert_eq!(p.email_label(), "N/A");
        assert_eq!(p.address_label(), "N/A");
    }

    #[test]
    fn test_delete_confirmation_is_name_slug() {
        assert_eq!(
            Provider::CONFIRMATION.required_text("Acme Corp"),
            "eliminar-acme-corp"
        );
    }
}
