//! Builder for creating and configuring Shop instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Shop;
use crate::{
    cart::{CartStore, Diagnostics},
    catalog::Catalog,
    db::Database,
    error::{Result, ShopError},
    persistence::CartPersistence,
    pricing::BracketFallback,
};

/// Builder for creating and configuring Shop instances.
#[derive(Debug, Clone, Default)]
pub struct ShopBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    fallback: BracketFallback,
    diagnostics: Diagnostics,
}

impl ShopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bastion/bastion.db` or `~/.local/share/bastion/bastion.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the catalog from a JSON file instead of the built-in one.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the policy for employee counts outside every bracket.
    pub fn with_bracket_fallback(mut self, fallback: BracketFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the receiver for recoverable cart problems.
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Builds a shop whose cart is stored in SQLite.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::FileSystem` if the database directory cannot be
    /// created, `ShopError::Database` if the database cannot be opened, and
    /// any catalog loading error.
    pub fn build(self) -> Result<Shop<Database>> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ShopError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening cart database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        self.build_with(db)
    }

    /// Builds a shop over any persistence backend.
    ///
    /// # Errors
    ///
    /// Returns `ShopError::Configuration` if the catalog path is a directory,
    /// and any error from reading or validating the catalog.
    pub fn build_with<P: CartPersistence>(self, persistence: P) -> Result<Shop<P>> {
        let catalog = match &self.catalog_path {
            Some(path) if path.is_dir() => {
                return Err(ShopError::Configuration {
                    message: format!(
                        "Catalog path '{}' is a directory, expected a JSON file",
                        path.display()
                    ),
                });
            }
            Some(path) => {
                debug!("Loading catalog from {}", path.display());
                Catalog::from_path(path)?
            }
            None => Catalog::builtin()?,
        };

        let cart = CartStore::open_with_diagnostics(persistence, &self.diagnostics);
        Ok(Shop::new(catalog, cart, self.fallback))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bastion")
            .place_data_file("bastion.db")
            .map_err(|e| ShopError::XdgDirectory(e.to_string()))
    }
}
