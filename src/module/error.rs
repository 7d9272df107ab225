use thiserror::Error;

/// Failure crossing the host boundary.
///
/// Lookup failures never show up here; they are reported inside the
/// returned value's `err` field.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("{module}: no method named {method:?}")]
    UnknownMethod { module: &'static str, method: String },

    /// The lookup task stopped before producing a result, e.g. it panicked
    /// or the runtime shut down.
    #[error("{module}: lookup interrupted")]
    Interrupted { module: &'static str },

    #[error("{module}: failed to marshal result: {source}")]
    Marshal {
        module: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure registering a module.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("module {0} is already registered")]
    Duplicate(&'static str),
}
