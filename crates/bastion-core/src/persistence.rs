//! Persistence port for the cart.
//!
//! The cart is stored as a JSON array of [`PlanSelection`] objects under a
//! single fixed key, the same layout a browser keeps in local storage. The
//! [`CartPersistence`] trait hides where that string lives:
//!
//! - [`MemoryPersistence`]: in-process, shareable between stores, for tests
//! - [`Database`](crate::db::Database): SQLite key-value table on disk

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{error::Result, models::PlanSelection};

/// Storage key the cart is written under.
pub const CART_STORAGE_KEY: &str = "bastion.cart";

/// Durable home for the cart's line items.
pub trait CartPersistence {
    /// Reads the saved cart. A missing entry yields an empty list; an
    /// unreadable one yields an error.
    fn load(&self) -> Result<Vec<PlanSelection>>;

    /// Replaces the saved cart with `items`.
    fn save(&mut self, items: &[PlanSelection]) -> Result<()>;

    /// Deletes the saved cart so the next load starts empty.
    fn discard(&mut self) -> Result<()>;
}

/// Serializes line items to the persisted JSON form.
pub fn encode_cart(items: &[PlanSelection]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Parses the persisted JSON form back into line items.
pub fn decode_cart(raw: &str) -> Result<Vec<PlanSelection>> {
    Ok(serde_json::from_str(raw)?)
}

#[derive(Debug, Default)]
struct MemoryState {
    raw: Option<String>,
    writes: usize,
}

/// In-memory [`CartPersistence`]. Clones share the same backing value.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-seeded with a raw stored value, which need not be
    /// valid JSON.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let persistence = Self::new();
        persistence.lock().raw = Some(raw.into());
        persistence
    }

    /// The raw stored value, if anything was written.
    pub fn raw(&self) -> Option<String> {
        self.lock().raw.clone()
    }

    /// Number of completed saves.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartPersistence for MemoryPersistence {
    fn load(&self) -> Result<Vec<PlanSelection>> {
        match self.lock().raw.as_deref() {
            Some(raw) => decode_cart(raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, items: &[PlanSelection]) -> Result<()> {
        let raw = encode_cart(items)?;
        let mut state = self.lock();
        state.raw = Some(raw);
        state.writes += 1;
        Ok(())
    }

    fn discard(&mut self) -> Result<()> {
        self.lock().raw = None;
        Ok(())
    }
}
