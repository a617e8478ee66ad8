//! Core library for the Bastion plan-selection cart.
//!
//! This crate holds the business logic behind the pricing calculator and
//! checkout flow for security consulting packages: a static plan catalog,
//! employee-count bracket pricing, mutual-exclusion rules between plans, and
//! a persisted cart.
//!
//! # Layers
//!
//! - **Catalog** ([`catalog`], [`models`]): read-only plan definitions
//! - **Pricing** ([`pricing`]): bracket lookup with a configurable fallback
//! - **Exclusivity** ([`exclusivity`]): pure availability evaluation
//! - **Cart** ([`cart`], [`persistence`], [`db`]): ordered line items written
//!   through a storage port after every change
//! - **Shop** ([`shop`]): the gated front door used by interfaces
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use bastion_core::{
//!     params::{ListPlanOptions, SelectPlan},
//!     MemoryPersistence, ShopBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shop = ShopBuilder::new().build_with(MemoryPersistence::new())?;
//!
//! let line = shop.select_plan(&SelectPlan {
//!     plan_id: "soc2-blueprint".to_string(),
//!     employees: 25,
//! })?;
//! assert_eq!(line.price, 1700.0);
//!
//! for option in &shop.plan_options(&ListPlanOptions { employees: Some(25) }) {
//!     println!("{}: selectable = {}", option.title, option.is_selectable());
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cart;
pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod exclusivity;
pub mod models;
pub mod params;
pub mod persistence;
pub mod pricing;
pub mod shop;

// Re-export commonly used types
pub use cart::{CartDiagnostic, CartStore, Diagnostics};
pub use catalog::Catalog;
pub use db::Database;
pub use display::{AddResult, CartView, OperationStatus, PlanOptions, RemoveResult};
pub use error::{Result, ShopError};
pub use exclusivity::{evaluate, Availability, SelectedPlans};
pub use models::{
    CheckoutRequest, PlanCatalogEntry, PlanOption, PlanSelection, PriceBracket, Pricing,
};
pub use params::{Id, ListPlanOptions, Quote, RemoveLine, SelectPlan};
pub use persistence::{CartPersistence, MemoryPersistence, CART_STORAGE_KEY};
pub use pricing::{bracket_price, BracketFallback};
pub use shop::{Shop, ShopBuilder};
