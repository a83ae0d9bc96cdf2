//! Field-level validation driven by a per-entity rule table.
//!
//! Every field is checked on its trimmed value; rules run in order and the
//! first failing rule supplies the field's message. The aggregate result
//! gates the submit control.

use crate::domain::common::{CatalogEntity, EntityForm, EntityId};
use crate::shared::cache::EntityCache;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A single check applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty
    Required(&'static str),
    /// At least `n` characters
    MinChars(usize, &'static str),
    /// Strictly more than `n` characters
    MoreThanChars(usize, &'static str),
    /// At least `n` characters, all ASCII digits
    Digits(usize, &'static str),
    /// Optional; when present must look like `local@domain.tld`
    Email(&'static str),
    /// No other cached entity may carry the same name (case-insensitive)
    UniqueName(&'static str),
}

/// One row of the rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            key,
            label,
            placeholder: "",
            input_type: "text",
            rules,
        }
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub const fn input_type(mut self, input_type: &'static str) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|r| matches!(r, Rule::Required(_) | Rule::Digits(..) | Rule::MoreThanChars(..)))
    }
}

/// Validation outcome for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub key: &'static str,
    pub error: Option<&'static str>,
}

/// Validation outcome for the whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub fields: Vec<FieldState>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error.is_none())
    }

    pub fn error(&self, key: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.error)
    }
}

/// Check a single trimmed value against one rule.
///
/// `name_taken` is consulted only by `UniqueName`.
pub fn check_rule(rule: &Rule, value: &str, name_taken: impl Fn(&str) -> bool) -> Option<&'static str> {
    let len = value.chars().count();
    match *rule {
        Rule::Required(msg) => value.is_empty().then_some(msg),
        Rule::MinChars(n, msg) => (len < n).then_some(msg),
        Rule::MoreThanChars(n, msg) => (len <= n).then_some(msg),
        Rule::Digits(n, msg) => {
            (len < n || !value.chars().all(|c| c.is_ascii_digit())).then_some(msg)
        }
        Rule::Email(msg) => (!value.is_empty() && !EMAIL_RE.is_match(value)).then_some(msg),
        Rule::UniqueName(msg) => name_taken(value).then_some(msg),
    }
}

/// Run the entity's rule table over a form.
///
/// `editing` is the id of the record being edited; it is excluded from the
/// duplicate-name check so a record never collides with itself.
pub fn validate_form<E: CatalogEntity>(
    form: &E::Form,
    cache: &EntityCache<E>,
    editing: Option<EntityId>,
) -> FormValidation {
    let fields = E::SCHEMA
        .iter()
        .map(|spec| {
            let value = form.field_value(spec.key).trim();
            let error = spec
                .rules
                .iter()
                .find_map(|rule| check_rule(rule, value, |name| cache.name_taken(name, editing)));
            FieldState {
                key: spec.key,
                error,
            }
        })
        .collect();

    FormValidation { fields }
}
