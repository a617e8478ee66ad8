//! Checkout hand-off payload.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PlanSelection;

/// Snapshot of the cart passed to the external checkout service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub line_items: Vec<PlanSelection>,
    pub total_price: f64,
    pub total_items: usize,
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub created_at: Timestamp,
}

impl CheckoutRequest {
    /// Builds a request from the given line items, computing the totals.
    pub fn from_items(line_items: Vec<PlanSelection>) -> Self {
        let total_price = line_items.iter().map(|item| item.price).sum();
        let total_items = line_items.len();
        Self {
            line_items,
            total_price,
            total_items,
            created_at: super::selection::now_millis(),
        }
    }
}
