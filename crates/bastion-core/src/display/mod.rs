//! Display formatting for catalog, cart and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes get newtype wrappers so the same data
//! can be formatted differently per context. Everything renders as markdown
//! for the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: [`CartView`] and [`PlanOptions`]
//! - [`results`]: [`AddResult`], [`RemoveResult`], checkout summary
//! - [`status`]: [`OperationStatus`]
//! - [`format`]: [`LocalDateTime`] and [`Money`]
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod format;
pub mod models;
pub mod results;
pub mod status;

#[cfg(test)]
mod tests;

pub use collections::{CartView, PlanOptions};
pub use format::{LocalDateTime, Money};
pub use results::{AddResult, RemoveResult};
pub use status::OperationStatus;
