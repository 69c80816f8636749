use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name of the synthetic bucket for tokens no category claims.
pub const MISCELLANEOUS: &str = "Miscellaneous";

const BUILTIN_JSON: &str = include_str!("../data/categories.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered list of categories. Declaration order is match precedence and row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryDictionary {
    categories: Vec<Category>,
}

impl CategoryDictionary {
    /// Validate and wrap a list of categories.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        let dict = Self { categories };
        dict.validate()?;
        Ok(dict)
    }

    /// The dictionary compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_JSON).context("built-in category dictionary")
    }

    /// Parse a JSON array of `{ "name": ..., "keywords": [...] }` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] { &self.categories }

    pub fn len(&self) -> usize { self.categories.len() }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }

    fn validate(&self) -> Result<()> {
        ensure!(!self.categories.is_empty(), "category dictionary is empty");
        let mut seen: HashSet<String> = HashSet::new();
        for (i, cat) in self.categories.iter().enumerate() {
            let name = cat.name.trim();
            if name.is_empty() {
                bail!("category #{} has an empty name", i + 1);
            }
            if name.eq_ignore_ascii_case(MISCELLANEOUS) {
                bail!("category name {:?} is reserved", cat.name);
            }
            if !seen.insert(name.to_lowercase()) {
                bail!("duplicate category {:?}", cat.name);
            }
            ensure!(!cat.keywords.is_empty(), "category {:?} has no keywords", cat.name);
            if cat.keywords.iter().any(|k| k.trim().is_empty()) {
                bail!("category {:?} contains a blank keyword", cat.name);
            }
        }
        Ok(())
    }
}
