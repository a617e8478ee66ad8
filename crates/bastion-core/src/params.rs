//! Parameter structures for shop operations.
//!
//! These structures are shared by every front-end without carrying any
//! framework-specific derives. Interface layers (the CLI's clap arguments,
//! for instance) define their own wrapper types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │      Shop       │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│ (business logic)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Parameters for operations addressing a single catalog entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// Catalog entry ID
    pub id: String,
}

/// Parameters for pricing a plan without touching the cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    /// Catalog entry ID
    pub plan_id: String,
    /// Company size used to pick the bracket
    pub employees: u32,
}

/// Parameters for adding a plan to the cart through the exclusivity gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectPlan {
    /// Catalog entry ID
    pub plan_id: String,
    /// Company size used to pick the bracket
    pub employees: u32,
}

/// Parameters for removing a cart line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveLine {
    /// Zero-based position of the line in the cart
    pub index: usize,
}

/// Parameters for listing catalog entries with their cart availability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlanOptions {
    /// Company size to price each entry for; unpriced listing when absent
    pub employees: Option<u32>,
}
