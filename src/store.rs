/// The snippet collection and its pure update operations
///
/// The popup owns one in-memory `SnippetStore`; every mutation builds a new
/// store, the old one is never touched. Persistence happens at the backend
/// seam (`crate::backend`), after the in-memory update.
use crate::snippet::Snippet;
use serde::{Deserialize, Serialize};

/// Ordered snippet collection, insertion order = display order.
///
/// Serializes as a bare JSON array so the stored value matches the
/// `{id, quote, source}[]` shape earlier builds of the popup wrote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SnippetStore {
    pub snippets: Vec<Snippet>,
}

impl SnippetStore {
    pub fn new() -> Self {
        SnippetStore {
            snippets: Vec::new(),
        }
    }

    /// Append a new snippet with `id = now_ms` and return the grown store.
    ///
    /// The clock is passed in by the caller (the popup uses `Date.now()`);
    /// two calls in the same millisecond would collide on `id`.
    pub fn add(&self, now_ms: f64, quote: String, source: String) -> Self {
        let mut snippets = self.snippets.clone();
        snippets.push(Snippet::new(now_ms, quote, source));
        SnippetStore { snippets }
    }

    /// Return a store without any snippet matching `id`.
    /// Removing an unknown id yields an equal copy.
    pub fn remove(&self, id: f64) -> Self {
        let snippets = self
            .snippets
            .iter()
            .filter(|snip| snip.id != id)
            .cloned()
            .collect();
        SnippetStore { snippets }
    }

    pub fn find(&self, id: f64) -> Option<&Snippet> {
        self.snippets.iter().find(|snip| snip.id == id)
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

impl Default for SnippetStore {
    fn default() -> Self {
        Self::new()
    }
}
