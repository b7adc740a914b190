//! Favorites set.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Product ids marked as favorite, serialized as a JSON array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns the new membership state.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.remove(&id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.ids.len();
        self.ids.retain(|f| f != id);
        self.ids.len() < len_before
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove repeated ids, keeping first occurrences.
    pub(crate) fn normalized(self) -> Self {
        let mut ids: Vec<ProductId> = Vec::with_capacity(self.ids.len());
        for id in self.ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        let mut favs = Favorites::new();
        let id = ProductId::new("cmp-3");

        assert!(favs.toggle(id.clone()));
        assert!(favs.contains(&id));
        assert!(!favs.toggle(id.clone()));
        assert!(!favs.contains(&id));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut favs = Favorites::new();
        favs.toggle(ProductId::new("a"));
        favs.toggle(ProductId::new("b"));
        assert_eq!(serde_json::to_string(&favs).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_normalized_dedupes() {
        let favs: Favorites = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        let favs = favs.normalized();
        assert_eq!(favs.len(), 2);
        assert_eq!(
            favs.iter().map(ProductId::as_str).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }
}
