//! Mutual-exclusion rules between catalog entries.
//!
//! An entry is disabled while any entry named in its `exclusive_with` list is
//! in the cart. Presence is matched by title, the same way
//! [`CartStore::is_plan_selected`](crate::cart::CartStore::is_plan_selected)
//! does. Evaluation is a pure function of the catalog and the cart contents.

use crate::{
    catalog::Catalog,
    models::{PlanCatalogEntry, PlanSelection},
};

/// Anything that can answer "is a plan with this title selected?".
pub trait SelectedPlans {
    fn is_plan_selected(&self, title: &str) -> bool;
}

impl SelectedPlans for [PlanSelection] {
    fn is_plan_selected(&self, title: &str) -> bool {
        self.iter().any(|item| item.plan_title == title)
    }
}

impl SelectedPlans for Vec<PlanSelection> {
    fn is_plan_selected(&self, title: &str) -> bool {
        self.as_slice().is_plan_selected(title)
    }
}

/// Whether an entry can currently be added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Availability<'a> {
    Selectable,
    /// A conflicting entry is in the cart
    Disabled { blocked_by: &'a PlanCatalogEntry },
}

impl<'a> Availability<'a> {
    pub fn is_selectable(&self) -> bool {
        matches!(self, Availability::Selectable)
    }

    /// The entry preventing selection, if any.
    pub fn blocked_by(&self) -> Option<&'a PlanCatalogEntry> {
        match self {
            Availability::Selectable => None,
            Availability::Disabled { blocked_by } => Some(blocked_by),
        }
    }
}

/// Evaluates `entry` against the current cart.
///
/// Exclusions are checked in declaration order and the first one found in
/// the cart is reported. IDs that do not resolve to a catalog entry are
/// skipped.
pub fn evaluate<'a, C>(catalog: &'a Catalog, entry: &PlanCatalogEntry, cart: &C) -> Availability<'a>
where
    C: SelectedPlans + ?Sized,
{
    entry
        .exclusive_with
        .iter()
        .filter_map(|id| catalog.get(id))
        .find(|other| cart.is_plan_selected(&other.title))
        .map_or(Availability::Selectable, |blocked_by| Availability::Disabled {
            blocked_by,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pricing;

    fn entry(id: &str, title: &str, exclusive_with: &[&str]) -> PlanCatalogEntry {
        PlanCatalogEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            pricing: Pricing::Flat { price: 1000.0 },
            exclusive_with: exclusive_with.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            entry("a", "Plan A", &["b"]),
            entry("b", "Plan B", &["a"]),
            entry("c", "Plan C", &[]),
            entry("d", "Plan D", &["missing", "c", "a"]),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn test_no_exclusions_never_disabled() {
        let catalog = catalog();
        let c = catalog.get("c").unwrap();
        let cart = vec![
            PlanSelection::new("Plan A", 10, 1.0),
            PlanSelection::new("Plan B", 10, 1.0),
        ];
        assert!(evaluate(&catalog, c, &cart).is_selectable());
    }

    #[test]
    fn test_exclusion_blocks_in_both_directions() {
        let catalog = catalog();
        let a = catalog.get("a").unwrap();
        let b = catalog.get("b").unwrap();

        let with_a = vec![PlanSelection::new("Plan A", 10, 1.0)];
        assert_eq!(evaluate(&catalog, b, &with_a).blocked_by().map(|e| e.id.as_str()), Some("a"));

        let with_b = vec![PlanSelection::new("Plan B", 10, 1.0)];
        assert_eq!(evaluate(&catalog, a, &with_b).blocked_by().map(|e| e.id.as_str()), Some("b"));
    }

    #[test]
    fn test_first_blocker_in_declaration_order() {
        let catalog = catalog();
        let d = catalog.get("d").unwrap();
        let cart = vec![
            PlanSelection::new("Plan A", 10, 1.0),
            PlanSelection::new("Plan C", 10, 1.0),
        ];
        let availability = evaluate(&catalog, d, &cart);
        assert_eq!(availability.blocked_by().map(|e| e.id.as_str()), Some("c"));
    }

    #[test]
    fn test_empty_cart_is_always_selectable() {
        let catalog = catalog();
        let empty: Vec<PlanSelection> = Vec::new();
        for entry in catalog.entries() {
            assert!(evaluate(&catalog, entry, &empty).is_selectable());
        }
    }

    #[test]
    fn test_title_match_is_case_sensitive() {
        let catalog = catalog();
        let b = catalog.get("b").unwrap();
        let cart = vec![PlanSelection::new("plan a", 10, 1.0)];
        assert!(evaluate(&catalog, b, &cart).is_selectable());
    }
}
