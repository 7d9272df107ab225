//! Ergonomic error context helpers.
//!
//! Provides an extension trait for attaching the looked-up name to resolver
//! failures, converting them into `LookupError` variants.

use crate::base::lookuperror::LookupError;
use hickory_resolver::ResolveError;
use std::io;

/// Extension trait for adding lookup context to resolver Results.
pub trait LookupResultExt<T> {
    /// Attach the name that was being resolved.
    ///
    /// # Example
    /// ```ignore
    /// use dnslookup::base::context::LookupResultExt;
    ///
    /// let mx = resolver.mx_lookup("example.com").await
    ///     .lookup_context("example.com")?;
    /// // Error: "lookup example.com: no record found for ..."
    /// ```
    fn lookup_context(self, name: &str) -> Result<T, LookupError>;
}

impl<T> LookupResultExt<T> for Result<T, io::Error> {
    fn lookup_context(self, name: &str) -> Result<T, LookupError> {
        self.map_err(|source| LookupError::Io {
            name: name.to_string(),
            source,
        })
    }
}

impl<T> LookupResultExt<T> for Result<T, ResolveError> {
    fn lookup_context(self, name: &str) -> Result<T, LookupError> {
        self.map_err(|source| LookupError::Resolve {
            name: name.to_string(),
            source,
        })
    }
}
