//! Key-value queries and the cart persistence implementation.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::PlanSelection,
    persistence::{decode_cart, encode_cart, CartPersistence, CART_STORAGE_KEY},
};

const SELECT_ITEM_SQL: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_ITEM_SQL: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_ITEM_SQL: &str = "DELETE FROM storage WHERE key = ?1";

impl super::Database {
    /// Reads the value stored under `key`.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_ITEM_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read storage item")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_ITEM_SQL, params![key, value, now])
            .db_context("Failed to write storage item")?;
        Ok(())
    }

    /// Deletes the value stored under `key`. Returns true if one existed.
    pub fn remove_item(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_ITEM_SQL, params![key])
            .db_context("Failed to delete storage item")?;
        Ok(removed > 0)
    }
}

impl CartPersistence for super::Database {
    fn load(&self) -> Result<Vec<PlanSelection>> {
        match self.get_item(CART_STORAGE_KEY)? {
            Some(raw) => decode_cart(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, items: &[PlanSelection]) -> Result<()> {
        let raw = encode_cart(items)?;
        self.set_item(CART_STORAGE_KEY, &raw)?;
        debug!("Saved cart with {} item(s)", items.len());
        Ok(())
    }

    fn discard(&mut self) -> Result<()> {
        if self.remove_item(CART_STORAGE_KEY)? {
            debug!("Removed saved cart");
        }
        Ok(())
    }
}
