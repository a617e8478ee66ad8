//! Static plan catalog.
//!
//! The catalog is read-only configuration: a list of [`PlanCatalogEntry`]
//! values loaded from the embedded default or from a JSON file. Loading
//! validates the structure of each entry. Exclusivity symmetry is left to
//! catalog authors; [`Catalog::asymmetric_exclusions`] reports gaps without
//! rejecting them.

use std::{collections::HashSet, fs, path::Path};

use crate::{
    error::{Result, ShopError},
    models::{PlanCatalogEntry, Pricing},
};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Ordered collection of catalog entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<PlanCatalogEntry>,
}

impl Catalog {
    /// Creates a catalog from entries after validating them.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::InvalidInput` describing the first structural
    /// problem found.
    pub fn new(entries: Vec<PlanCatalogEntry>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses a catalog from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<PlanCatalogEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Reads and parses a catalog file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ShopError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Looks up an entry by ID.
    pub fn get(&self, id: &str) -> Option<&PlanCatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Resolves an ID or fails with `PlanNotFound`.
    pub fn require(&self, id: &str) -> Result<&PlanCatalogEntry> {
        self.get(id).ok_or_else(|| ShopError::PlanNotFound { id: id.to_string() })
    }

    pub fn entries(&self) -> &[PlanCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs `(a, b)` where `a` excludes `b` but `b` does not exclude `a`.
    ///
    /// Such a pair lets `a` be added while `b` is in the cart.
    pub fn asymmetric_exclusions(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.exclusive_with.iter().filter_map(move |other_id| {
                    let other = self.get(other_id)?;
                    (!other.exclusive_with.contains(&entry.id))
                        .then_some((entry.id.as_str(), other.id.as_str()))
                })
            })
            .collect()
    }

    /// Pairs `(a, id)` where `a` excludes an ID that is not in the catalog.
    pub fn unknown_exclusions(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry
                    .exclusive_with
                    .iter()
                    .filter(|id| self.get(id).is_none())
                    .map(move |id| (entry.id.as_str(), id.as_str()))
            })
            .collect()
    }
}

fn validate(entries: &[PlanCatalogEntry]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut titles = HashSet::new();

    for entry in entries {
        if entry.id.trim().is_empty() {
            return Err(ShopError::invalid_input("id").with_reason("Catalog entry ID is empty"));
        }
        if entry.title.trim().is_empty() {
            return Err(ShopError::invalid_input("title")
                .with_reason(format!("Entry '{}' has an empty title", entry.id)));
        }
        if !ids.insert(entry.id.as_str()) {
            return Err(ShopError::invalid_input("id")
                .with_reason(format!("Duplicate catalog entry ID '{}'", entry.id)));
        }
        // Cart lines reference entries by title, so titles must be unique too
        if !titles.insert(entry.title.as_str()) {
            return Err(ShopError::invalid_input("title")
                .with_reason(format!("Duplicate catalog entry title '{}'", entry.title)));
        }
        if entry.exclusive_with.contains(&entry.id) {
            return Err(ShopError::invalid_input("exclusive_with")
                .with_reason(format!("Entry '{}' excludes itself", entry.id)));
        }
        validate_pricing(&entry.id, &entry.pricing)?;
    }

    Ok(())
}

fn validate_pricing(id: &str, pricing: &Pricing) -> Result<()> {
    let valid_price = |price: f64| price.is_finite() && price >= 0.0;

    match pricing {
        Pricing::Flat { price } if !valid_price(*price) => Err(ShopError::invalid_input("price")
            .with_reason(format!("Entry '{id}' has an invalid price {price}"))),
        Pricing::Flat { .. } => Ok(()),
        Pricing::Tiered { brackets } if brackets.is_empty() => {
            Err(ShopError::invalid_input("brackets")
                .with_reason(format!("Entry '{id}' has no price brackets")))
        }
        Pricing::Tiered { brackets } => {
            let mut previous_max: Option<u32> = None;
            for bracket in brackets {
                if bracket.min > bracket.max {
                    return Err(ShopError::invalid_input("brackets").with_reason(format!(
                        "Entry '{id}' has bracket {}-{} with min above max",
                        bracket.min, bracket.max
                    )));
                }
                if !valid_price(bracket.price) {
                    return Err(ShopError::invalid_input("brackets").with_reason(format!(
                        "Entry '{id}' has an invalid price {} in bracket {}-{}",
                        bracket.price, bracket.min, bracket.max
                    )));
                }
                // Brackets ascend without overlap
                if let Some(max) = previous_max.filter(|max| bracket.min <= *max) {
                    return Err(ShopError::invalid_input("brackets").with_reason(format!(
                        "Entry '{id}' has bracket {}-{} starting at or below the previous bracket's maximum {max}",
                        bracket.min, bracket.max
                    )));
                }
                previous_max = Some(bracket.max);
            }
            Ok(())
        }
    }
}
