//! Diagnostic reporting for recoverable cart problems.

use std::{fmt, sync::Arc};

use log::warn;

/// A problem the cart recovered from without surfacing an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartDiagnostic {
    /// The saved cart could not be read or parsed and was replaced by an
    /// empty one.
    DiscardedSavedCart { reason: String },
}

impl fmt::Display for CartDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartDiagnostic::DiscardedSavedCart { reason } => {
                write!(f, "Discarded unreadable saved cart: {reason}")
            }
        }
    }
}

type Sink = dyn Fn(&CartDiagnostic) + Send + Sync;

/// Injected receiver for [`CartDiagnostic`]s.
///
/// The default sink logs each diagnostic at warn level.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<Sink>,
}

impl Diagnostics {
    /// Wraps a custom callback.
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(&CartDiagnostic) + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Discards every diagnostic.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn report(&self, diagnostic: &CartDiagnostic) {
        (self.sink)(diagnostic);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(|diagnostic| warn!("{diagnostic}"))
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
