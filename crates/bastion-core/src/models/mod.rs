//! Data models for the plan catalog and the cart.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from
//! presentation.
//!
//! # Wire format
//!
//! [`PlanSelection`] is what the cart persists. It serializes with camelCase
//! keys and an epoch-millisecond timestamp:
//!
//! ```rust
//! use bastion_core::models::PlanSelection;
//!
//! let selection = PlanSelection::new("SOC 2 Pre-Audit Blueprint", 25, 1700.0);
//! let json = serde_json::to_value(&selection).unwrap();
//! assert_eq!(json["planTitle"], "SOC 2 Pre-Audit Blueprint");
//! assert_eq!(json["numberOfEmployees"], 25);
//! assert_eq!(json["price"], 1700.0);
//! assert!(json["timestamp"].is_i64());
//! ```
//!
//! Catalog entries are static configuration and are never mutated by the
//! cart. A selection's price is a snapshot taken when the plan was added.

pub mod catalog;
pub mod checkout;
pub mod option;
pub mod selection;


pub use catalog::{PlanCatalogEntry, PriceBracket, Pricing};
pub use checkout::CheckoutRequest;
pub use option::PlanOption;
pub use selection::PlanSelection;
