//! Tests for markdown output.

use jiff::Timestamp;

use super::*;
use crate::models::{CheckoutRequest, PlanCatalogEntry, PlanOption, PlanSelection, PriceBracket, Pricing};

fn create_test_selection(title: &str, price: f64) -> PlanSelection {
    PlanSelection {
        plan_title: title.to_string(),
        number_of_employees: 25,
        price,
        timestamp: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
    }
}

fn create_test_option() -> PlanOption {
    PlanOption {
        id: "vciso-lite".to_string(),
        title: "vCISO Lite".to_string(),
        description: Some("Monthly security leadership".to_string()),
        employees: Some(30),
        price: Some(1900.0),
        starting_price: Some(1500.0),
        in_cart: false,
        blocked_by: None,
    }
}

#[test]
fn test_empty_cart_view() {
    assert_eq!(CartView(&[]).to_string(), "Your cart is empty.\n");
}

#[test]
fn test_cart_view_numbers_lines_and_totals() {
    let items = vec![
        create_test_selection("SOC 2 Pre-Audit Blueprint", 1700.0),
        create_test_selection("External Penetration Test", 4500.0),
    ];
    let output = CartView(&items).to_string();

    assert!(output.starts_with("# Cart\n"));
    assert!(output.contains("## 1. SOC 2 Pre-Audit Blueprint"));
    assert!(output.contains("## 2. External Penetration Test"));
    assert!(output.contains("- **Employees**: 25"));
    assert!(output.contains("- **Price**: $4,500"));
    assert!(output.contains("**Total**: $6,200 (2 items)"));
}

#[test]
fn test_cart_view_singular_item() {
    let items = vec![create_test_selection("vCISO Lite", 1500.0)];
    assert!(CartView(&items).to_string().contains("(1 item)"));
}

#[test]
fn test_catalog_entry_display() {
    let entry = PlanCatalogEntry {
        id: "cloud-starter".to_string(),
        title: "Cloud Security Starter Pack".to_string(),
        description: Some("Baseline hardening review".to_string()),
        pricing: Pricing::Tiered {
            brackets: vec![
                PriceBracket { min: 5, max: 25, price: 1200.0 },
                PriceBracket { min: 26, max: 50, price: 1600.0 },
            ],
        },
        exclusive_with: vec!["vciso-lite".to_string()],
    };
    let output = entry.to_string();

    assert!(output.starts_with("# Cloud Security Starter Pack (cloud-starter)"));
    assert!(output.contains("Baseline hardening review"));
    assert!(output.contains("- 5-25 employees: $1,200"));
    assert!(output.contains("- 26-50 employees: $1,600"));
    assert!(output.contains("## Cannot be combined with"));
    assert!(output.contains("- vciso-lite"));
}

#[test]
fn test_flat_pricing_display() {
    let pricing = Pricing::Flat { price: 4500.0 };
    assert_eq!(pricing.to_string(), "- Flat price: $4,500\n");
}

#[test]
fn test_plan_option_statuses() {
    let mut option = create_test_option();
    let available = option.to_string();
    assert!(available.contains("## vCISO Lite (ID: vciso-lite)"));
    assert!(available.contains("Price for 30 employees**: $1,900"));
    assert!(available.contains("○ Available"));

    option.blocked_by = Some("Cloud Security Starter Pack".to_string());
    assert!(option
        .to_string()
        .contains("Unavailable while 'Cloud Security Starter Pack' is in the cart"));

    option.blocked_by = None;
    option.in_cart = true;
    assert!(option.to_string().contains("✓ In cart"));
}

#[test]
fn test_plan_option_without_employee_count_shows_starting_price() {
    let mut option = create_test_option();
    option.employees = None;
    option.price = None;
    assert!(option.to_string().contains("- **Price**: from $1,500"));
}

#[test]
fn test_plan_options_empty() {
    assert_eq!(PlanOptions(vec![]).to_string(), "No plans found.\n");
}

#[test]
fn test_add_and_remove_results() {
    let added = AddResult {
        selection: create_test_selection("vCISO Lite", 1500.0),
        total_items: 2,
        total_price: 3200.0,
    };
    let output = added.to_string();
    assert!(output.starts_with("Added 'vCISO Lite' to cart"));
    assert!(output.contains("Cart now holds 2 item(s) totalling $3,200"));

    let removed = RemoveResult {
        position: 1,
        removed: Some(create_test_selection("vCISO Lite", 1500.0)),
    };
    assert_eq!(removed.to_string(), "Removed 'vCISO Lite' (line 1) from cart\n");

    let missing = RemoveResult {
        position: 7,
        removed: None,
    };
    assert!(missing.to_string().contains("No cart line at position 7"));
}

#[test]
fn test_checkout_summary_display() {
    let request = CheckoutRequest::from_items(vec![
        create_test_selection("SOC 2 Pre-Audit Blueprint", 1700.0),
        create_test_selection("External Penetration Test", 4500.0),
    ]);
    let output = request.to_string();
    assert!(output.contains("- SOC 2 Pre-Audit Blueprint (25 employees): $1,700"));
    assert!(output.contains("**Total**: $6,200 (2 item(s))"));
}
