//! Cart line item model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A plan the user put in the cart, priced at the moment it was added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSelection {
    /// Title of the catalog entry this line refers to
    pub plan_title: String,

    /// Employee count used to pick the price bracket
    pub number_of_employees: u32,

    /// Price resolved at selection time; never re-derived
    pub price: f64,

    /// When the line was created (UTC, millisecond precision)
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub timestamp: Timestamp,
}

impl PlanSelection {
    /// Creates a line item stamped with the current time.
    pub fn new(plan_title: impl Into<String>, number_of_employees: u32, price: f64) -> Self {
        Self {
            plan_title: plan_title.into(),
            number_of_employees,
            price,
            timestamp: now_millis(),
        }
    }
}

/// Current time truncated to what the persisted form can hold.
pub(crate) fn now_millis() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_millisecond(now.as_millisecond()).unwrap_or(now)
}
