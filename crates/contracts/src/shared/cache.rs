use crate::domain::common::{CatalogEntity, EntityId};

/// In-memory mirror of the last successfully fetched collection.
///
/// Replaced wholesale on every load, never patched. Used for duplicate-name
/// checks and to pre-fill edit forms without another round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCache<E> {
    items: Vec<E>,
}

impl<E> Default for EntityCache<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E: CatalogEntity> EntityCache<E> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_items(items: Vec<E>) -> Self {
        Self { items }
    }

    /// Replace the contents with a freshly loaded body; `None` (a JSON `null`) empties it
    pub fn replace(&mut self, items: Option<Vec<E>>) {
        self.items = items.unwrap_or_default();
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|e| e.id() == id)
    }

    /// Whether another record already uses `name`, ignoring case.
    ///
    /// The record with id `exclude` (the one being edited) never counts.
    pub fn name_taken(&self, name: &str, exclude: Option<EntityId>) -> bool {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.items
            .iter()
            .filter(|e| Some(e.id()) != exclude)
            .any(|e| e.name().trim().to_lowercase() == needle)
    }

    /// Records matching the search query; an empty query matches everything
    pub fn search(&self, query: &str) -> Vec<E> {
        self.items
            .iter()
            .filter(|e| e.matches_search(query))
            .cloned()
            .collect()
    }
}
