//! Tests for the cart store.

use std::sync::{Arc, Mutex};

use super::*;
use crate::{error::ShopError, persistence::MemoryPersistence};

/// Backend whose writes always fail.
struct FailingPersistence;

impl CartPersistence for FailingPersistence {
    fn load(&self) -> Result<Vec<PlanSelection>> {
        Ok(Vec::new())
    }

    fn save(&mut self, _items: &[PlanSelection]) -> Result<()> {
        Err(read_only())
    }

    fn discard(&mut self) -> Result<()> {
        Err(read_only())
    }
}

fn read_only() -> ShopError {
    ShopError::Configuration {
        message: "storage is read-only".to_string(),
    }
}

fn recording_diagnostics() -> (Diagnostics, Arc<Mutex<Vec<CartDiagnostic>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let diagnostics = Diagnostics::new(move |d| sink.lock().unwrap().push(d.clone()));
    (diagnostics, seen)
}

fn assert_totals<P: CartPersistence>(cart: &CartStore<P>) {
    let expected: f64 = cart.items().iter().map(|item| item.price).sum();
    assert_eq!(cart.total_price(), expected);
    assert_eq!(cart.total_items(), cart.items().len());
}

#[test]
fn test_new_cart_is_empty() {
    let cart = CartStore::open(MemoryPersistence::new());
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_price(), 0.0);
}

#[test]
fn test_add_keeps_insertion_order_and_duplicates() {
    let mut cart = CartStore::open(MemoryPersistence::new());
    cart.add_to_cart(PlanSelection::new("Plan A", 10, 100.0)).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan B", 20, 200.0)).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan A", 30, 300.0)).unwrap();

    let titles: Vec<&str> = cart.items().iter().map(|i| i.plan_title.as_str()).collect();
    assert_eq!(titles, vec!["Plan A", "Plan B", "Plan A"]);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 600.0);
}

#[test]
fn test_totals_hold_after_every_mutation() {
    let mut cart = CartStore::open(MemoryPersistence::new());
    assert_totals(&cart);

    for (i, price) in [1700.0, 2200.5, 99.25, 4500.0].into_iter().enumerate() {
        cart.add_to_cart(PlanSelection::new(format!("Plan {i}"), 10, price))
            .unwrap();
        assert_totals(&cart);
    }

    cart.remove_from_cart(1).unwrap();
    assert_totals(&cart);
    cart.remove_from_cart(10).unwrap();
    assert_totals(&cart);
    cart.clear_cart().unwrap();
    assert_totals(&cart);
}

#[test]
fn test_every_mutation_persists() {
    let persistence = MemoryPersistence::new();
    let mut cart = CartStore::open(persistence.clone());

    cart.add_to_cart(PlanSelection::new("Plan A", 10, 100.0)).unwrap();
    assert_eq!(persistence.writes(), 1);
    cart.add_to_cart(PlanSelection::new("Plan B", 10, 100.0)).unwrap();
    assert_eq!(persistence.writes(), 2);
    cart.remove_from_cart(0).unwrap();
    assert_eq!(persistence.writes(), 3);
    cart.clear_cart().unwrap();
    assert_eq!(persistence.writes(), 4);
    assert_eq!(persistence.raw().as_deref(), Some("[]"));
}

#[test]
fn test_remove_out_of_range_is_noop() {
    let persistence = MemoryPersistence::new();
    let mut cart = CartStore::open(persistence.clone());
    cart.add_to_cart(PlanSelection::new("Plan A", 10, 100.0)).unwrap();
    let before = persistence.raw();

    assert_eq!(cart.remove_from_cart(1).unwrap(), None);
    assert_eq!(cart.remove_from_cart(usize::MAX).unwrap(), None);

    assert_eq!(cart.total_items(), 1);
    assert_eq!(persistence.writes(), 1);
    assert_eq!(persistence.raw(), before);
}

#[test]
fn test_remove_returns_removed_line() {
    let mut cart = CartStore::open(MemoryPersistence::new());
    let first = PlanSelection::new("Plan A", 10, 100.0);
    cart.add_to_cart(first.clone()).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan B", 10, 200.0)).unwrap();

    assert_eq!(cart.remove_from_cart(0).unwrap(), Some(first));
    assert_eq!(cart.items()[0].plan_title, "Plan B");
}

#[test]
fn test_clear_is_idempotent() {
    let mut cart = CartStore::open(MemoryPersistence::new());
    cart.add_to_cart(PlanSelection::new("Plan A", 10, 100.0)).unwrap();

    cart.clear_cart().unwrap();
    let once = cart.items().to_vec();
    cart.clear_cart().unwrap();

    assert_eq!(cart.items(), once.as_slice());
    assert!(cart.is_empty());
    assert_eq!(cart.total_price(), 0.0);
}

#[test]
fn test_reload_reproduces_items() {
    let persistence = MemoryPersistence::new();
    let mut cart = CartStore::open(persistence.clone());
    cart.add_to_cart(PlanSelection::new("Plan A", 5, 1700.0)).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan B", 26, 2200.0)).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan C", 300, 3500.0)).unwrap();
    cart.remove_from_cart(1).unwrap();
    let expected = cart.items().to_vec();

    let reopened = CartStore::open(persistence);
    assert_eq!(reopened.items(), expected.as_slice());
}

#[test]
fn test_corrupt_saved_cart_opens_empty_and_reports() {
    let (diagnostics, seen) = recording_diagnostics();
    let persistence = MemoryPersistence::with_raw("not json");
    let cart = CartStore::open_with_diagnostics(persistence.clone(), &diagnostics);

    assert!(cart.is_empty());
    assert_eq!(persistence.raw(), None);
    assert_eq!(persistence.writes(), 0);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(matches!(&seen[0], CartDiagnostic::DiscardedSavedCart { .. }));
}

#[test]
fn test_valid_saved_cart_reports_nothing() {
    let (diagnostics, seen) = recording_diagnostics();
    let cart = CartStore::open_with_diagnostics(MemoryPersistence::with_raw("[]"), &diagnostics);

    assert!(cart.is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_is_plan_selected_exact_match() {
    let mut cart = CartStore::open(MemoryPersistence::new());
    cart.add_to_cart(PlanSelection::new("vCISO Lite", 10, 1500.0)).unwrap();

    assert!(cart.is_plan_selected("vCISO Lite"));
    assert!(!cart.is_plan_selected("vciso lite"));
    assert!(!cart.is_plan_selected("vCISO"));
}

#[test]
fn test_failed_write_keeps_memory_change() {
    let mut cart = CartStore::open(FailingPersistence);
    let result = cart.add_to_cart(PlanSelection::new("Plan A", 10, 100.0));

    assert!(result.is_err());
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn test_checkout_snapshots_then_clears() {
    let persistence = MemoryPersistence::new();
    let mut cart = CartStore::open(persistence.clone());
    cart.add_to_cart(PlanSelection::new("Plan A", 10, 1700.0)).unwrap();
    cart.add_to_cart(PlanSelection::new("Plan B", 10, 4500.0)).unwrap();

    let request = cart.checkout().unwrap();

    assert_eq!(request.total_items, 2);
    assert_eq!(request.total_price, 6200.0);
    assert_eq!(request.line_items[1].plan_title, "Plan B");
    assert!(cart.is_empty());
    assert_eq!(persistence.raw().as_deref(), Some("[]"));
}
