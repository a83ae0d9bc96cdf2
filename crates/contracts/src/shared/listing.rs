use crate::domain::common::EntityTexts;

/// Placeholder for a material without description
pub const NO_DESCRIPTION: &str = "Sin descripción";
/// Placeholder for absent optional provider fields
pub const NOT_AVAILABLE: &str = "N/A";

/// State of the collection fetch driving the list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// Message rendered in place of the list
    Failed(String),
}

impl LoadState {
    pub fn failed(texts: &EntityTexts, error: impl std::fmt::Display) -> Self {
        LoadState::Failed(format!(
            "Error al cargar {}: {}. Asegúrate que el backend esté encendido.",
            texts.load_subject, error
        ))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Texts of the placeholder panel shown instead of an empty list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl EmptyState {
    /// `None` when there is something to show.
    ///
    /// `total` is the cache size, `shown` the count after the search filter;
    /// an empty cache reads "no records", a non-empty one "no matches".
    pub fn for_listing(texts: &EntityTexts, total: usize, shown: usize) -> Option<Self> {
        if shown > 0 {
            None
        } else if total == 0 {
            Some(Self {
                title: texts.empty_title,
                hint: texts.empty_hint,
            })
        } else {
            Some(Self {
                title: texts.no_match_title,
                hint: texts.no_match_hint,
            })
        }
    }
}

/// Display value for an optional card field
pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}
