use hickory_resolver::ResolveError;
use std::io;
use thiserror::Error;

/// Failure reported by a platform resolver.
///
/// The `Display` form of each variant is the exact text a caller sees in a
/// result's `err` field, so messages are kept short and lower-case in the
/// style of system resolver libraries.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The DNS query itself failed (NXDOMAIN, no records, server failure,
    /// timeout inside the resolver).
    #[error("lookup {name}: {source}")]
    Resolve {
        name: String,
        #[source]
        source: ResolveError,
    },

    /// The operating system resolver (`getaddrinfo`) failed.
    #[error("lookup {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The lookup succeeded but yielded nothing usable for the request.
    #[error("lookup {name}: no such host")]
    NoSuchHost { name: String },

    /// Addresses were found, none of them of the requested family.
    #[error("lookup {name}: no suitable address found")]
    NoSuitableAddress { name: String },

    #[error("unknown network {0}")]
    UnknownNetwork(String),

    #[error("lookup {0}: unrecognized address")]
    InvalidAddress(String),

    /// Network address errors raised before any query is made.
    #[error("address {addr}: {reason}")]
    Address { addr: String, reason: &'static str },

    #[error("lookup {network}/{service}: unknown port")]
    UnknownPort { network: String, service: String },

    /// The blocking resolver task panicked or was cancelled.
    #[error("lookup {name}: resolver task failed: {source}")]
    Runtime {
        name: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl LookupError {
    pub(crate) fn no_such_host(name: impl Into<String>) -> Self {
        Self::NoSuchHost { name: name.into() }
    }

    pub(crate) fn address(addr: impl Into<String>, reason: &'static str) -> Self {
        Self::Address {
            addr: addr.into(),
            reason,
        }
    }
}
