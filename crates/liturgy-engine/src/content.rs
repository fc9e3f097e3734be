//! The liturgical-text lookup the collect slug feeds into.
//!
//! The engine only produces slugs. Texts live in an external store; the
//! [`CollectStore`] trait is the seam it is reached through, and
//! [`MemoryCollectStore`] is an in-process implementation loaded from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::collect::Collect;
use crate::error::{LiturgyError, Result};
use crate::season::LiturgicalColor;

/// Who speaks a line of a liturgical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRole {
    Leader,
    People,
    All,
    /// An instruction, not spoken.
    Rubric,
    /// Unattributed text.
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalLine {
    pub role: LineRole,
    pub text: String,
}

/// A liturgical text record as held in the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiturgicalText {
    pub slug: String,
    pub title: String,
    pub color: LiturgicalColor,
    #[serde(default)]
    pub lines: Vec<LiturgicalLine>,
}

/// Lookup of liturgical texts by collect slug. `None` means "not found".
pub trait CollectStore {
    fn collect(&self, slug: &str) -> Option<LiturgicalText>;
}

/// An in-memory [`CollectStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCollectStore {
    texts: BTreeMap<String, LiturgicalText>,
}

impl MemoryCollectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON array of [`LiturgicalText`] records.
    ///
    /// When two records share a slug the later one wins.
    ///
    /// # Errors
    ///
    /// Returns [`LiturgyError::ContentStore`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let texts: Vec<LiturgicalText> = serde_json::from_str(json)
            .map_err(|e| LiturgyError::ContentStore(format!("invalid texts JSON: {e}")))?;
        let mut store = Self::new();
        for text in texts {
            store.insert(text);
        }
        Ok(store)
    }

    pub fn insert(&mut self, text: LiturgicalText) {
        self.texts.insert(text.slug.clone(), text);
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Collects the resolver can produce that have no text in this store.
    pub fn missing(&self) -> Vec<Collect> {
        Collect::all()
            .into_iter()
            .filter(|c| !self.texts.contains_key(&c.slug()))
            .collect()
    }
}

impl CollectStore for MemoryCollectStore {
    fn collect(&self, slug: &str) -> Option<LiturgicalText> {
        self.texts.get(slug).cloned()
    }
}
