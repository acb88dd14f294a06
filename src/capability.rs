//! Two-variant wiring for optional external dependencies.
//!
//! The store and the push provider may each be absent at startup. Instead
//! of threading `Option`s and null checks through every call site, the
//! decision is made once in `main` and captured as a [`Capability`]: either
//! a constructed client or an explicit `NotConfigured` marker.

use std::sync::Arc;

use crate::error::AppError;

/// An external dependency that may not have been configured at startup.
pub enum Capability<T: ?Sized> {
    /// The dependency was configured and a client was constructed.
    Configured(Arc<T>),
    /// The dependency is absent; operations against it degrade or fail
    /// with [`AppError::NotConfigured`].
    NotConfigured,
}

impl<T: ?Sized> Capability<T> {
    /// Borrow the client, or fail with `NotConfigured`.
    pub fn get(&self) -> Result<&T, AppError> {
        match self {
            Capability::Configured(client) => Ok(client.as_ref()),
            Capability::NotConfigured => Err(AppError::NotConfigured),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Capability::Configured(_))
    }
}

// Manual impl: `#[derive(Clone)]` would require `T: Clone`, but only the
// Arc is cloned.
impl<T: ?Sized> Clone for Capability<T> {
    fn clone(&self) -> Self {
        match self {
            Capability::Configured(client) => Capability::Configured(Arc::clone(client)),
            Capability::NotConfigured => Capability::NotConfigured,
        }
    }
}
