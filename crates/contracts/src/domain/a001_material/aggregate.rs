use crate::domain::common::{nullable, CatalogEntity, EntityForm, EntityId, EntityTexts};
use crate::shared::delete_gate::ConfirmationPolicy;
use crate::shared::listing::{or_placeholder, NO_DESCRIPTION};
use crate::shared::validation::{FieldSpec, Rule};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Материал (сырьё для производства)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable::string")]
    pub nombre: String,

    #[serde(default)]
    pub descripcion: Option<String>,
}

impl Material {
    #[cfg(test)]
    pub(crate) fn new(id: i64, nombre: &str, descripcion: Option<&str>) -> Self {
        Self {
            id: EntityId(id),
            nombre: nombre.to_string(),
            descripcion: descripcion.map(str::to_string),
        }
    }

    /// Card body text
    pub fn description_label(&self) -> &str {
        or_placeholder(self.descripcion.as_deref(), NO_DESCRIPTION)
    }
}

pub const FIELD_NOMBRE: &str = "nombre";
pub const FIELD_DESCRIPCION: &str = "descripcion";

const MATERIAL_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new(
        FIELD_NOMBRE,
        "Nombre del material",
        &[
            Rule::Required("El nombre es obligatorio."),
            Rule::MinChars(3, "Debe tener al menos 3 caracteres."),
            Rule::UniqueName("Este material ya existe."),
        ],
    )
    .placeholder("Ej. PET reciclado"),
    FieldSpec::new(FIELD_DESCRIPCION, "Descripción", &[]).placeholder("Opcional"),
];

impl CatalogEntity for Material {
    type Form = MaterialForm;

    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.nombre
    }

    fn to_form(&self) -> MaterialForm {
        MaterialForm {
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone().unwrap_or_default(),
        }
    }

    fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.nombre.to_lowercase().contains(&query)
            || self
                .descripcion
                .as_deref()
                .map(|d| d.to_lowercase().contains(&query))
                .unwrap_or(false)
    }

    const COLLECTION_PATH: &'static str = "/produccion/materiales";
    const ELEMENT_PATH: &'static str = "/produccion/material";
    const SCHEMA: &'static [FieldSpec] = MATERIAL_SCHEMA;
    const CONFIRMATION: ConfirmationPolicy = ConfirmationPolicy::FixedWord("eliminar");

    const TEXTS: EntityTexts = EntityTexts {
        list_title: "Materiales",
        load_subject: "materiales",
        empty_title: "No hay materiales registrados",
        empty_hint: "Añade un nuevo material usando el formulario de arriba.",
        no_match_title: "No se encontraron materiales",
        no_match_hint: "Intenta con un término de búsqueda diferente.",
        conflict: "El nombre de este material ya existe.",
        delete_failed: "No se pudo eliminar el material. Es posible que esté en uso.",
        create_title: "Registrar Nuevo Material",
        edit_title: "Editar Material",
    };
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело POST/PUT для материала
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialForm {
    pub nombre: String,
    pub descripcion: String,
}

impl EntityForm for MaterialForm {
    fn field_value(&self, key: &str) -> &str {
        match key {
            FIELD_NOMBRE => &self.nombre,
            FIELD_DESCRIPCION => &self.descripcion,
            _ => "",
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            FIELD_NOMBRE => Some(&mut self.nombre),
            FIELD_DESCRIPCION => Some(&mut self.descripcion),
            _ => None,
        }
    }

    fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cache::EntityCache;
    use crate::shared::validation::validate_form;
    use pretty_assertions::assert_eq;

    fn form(nombre: &str) -> MaterialForm {
        MaterialForm {
            nombre: nombre.to_string(),
            descripcion: String::new(),
        }
    }

    fn cache() -> EntityCache<Material> {
        EntityCache::from_items(vec![
            Material::new(1, "steel", None),
            Material::new(2, "PET reciclado", Some("Botellas molidas")),
        ])
    }

    #[test]
    fn test_duplicate_name_blocks_create() {
        let v = validate_form(&form("Steel"), &cache(), None);
        assert!(!v.is_valid());
        assert_eq!(v.error(FIELD_NOMBRE), Some("Este material ya existe."));
    }

    #[test]
    fn test_own_name_allowed_when_editing() {
        let v = validate_form(&form("STEEL"), &cache(), Some(EntityId(1)));
        assert!(v.is_valid());

        let v = validate_form(&form("steel"), &cache(), Some(EntityId(2)));
        assert_eq!(v.error(FIELD_NOMBRE), Some("Este material ya existe."));
    }

    #[test]
    fn test_name_rules_in_order() {
        let c = cache();
        assert_eq!(
            validate_form(&form("   "), &c, None).error(FIELD_NOMBRE),
            Some("El nombre es obligatorio.")
        );
        assert_eq!(
            validate_form(&form(" ab "), &c, None).error(FIELD_NOMBRE),
            Some("Debe tener al menos 3 caracteres.")
        );
        assert!(validate_form(&form("Cobre"), &c, None).is_valid());
    }

    #[test]
    fn test_description_is_free() {
        let mut f = form("Cobre");
        f.descripcion = "x".to_string();
        assert!(validate_form(&f, &cache(), None).is_valid());
    }

    #[test]
    fn test_payload_is_trimmed_and_has_no_id() {
        let f = MaterialForm {
            nombre: "  Cobre ".to_string(),
            descripcion: " Lámina ".to_string(),
        };
        let json = serde_json::to_value(f.trimmed()).unwrap();
        assert_eq!(json, serde_json::json!({"nombre": "Cobre", "descripcion": "Lámina"}));
    }

    #[test]
    fn test_deserializes_nulls() {
        let m: Material =
            serde_json::from_str(r#"{"id":4,"nombre":"Vidrio","descripcion":null}"#).unwrap();
        assert_eq!(m, Material::new(4, "Vidrio", None));
        assert_eq!(m.description_label(), "Sin descripción");
    }

    #[test]
    fn test_to_form_prefills_from_cache() {
        let c = cache();
        let f = c.find(EntityId(2)).unwrap().to_form();
        assert_eq!(f.nombre, "PET reciclado");
        assert_eq!(f.descripcion, "Botellas molidas");
    }

    #[test]
    fn test_element_url() {
        assert_eq!(
            Material::element_url("http://localhost:8080", EntityId(9)),
            "http://localhost:8080/produccion/material/9"
        );
    }
}
