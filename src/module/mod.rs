//! Host scripting boundary.
//!
//! Exposes the lookup catalog to a script host:
//! - [`Module`]: a blocking handler taking and returning host values
//! - [`DnsModule`]: the lookup catalog as a [`Module`], namespace
//!   [`DNS_MODULE`]
//! - [`registry`]: the process-wide namespace registry, built once
//!
//! Host values are `serde_json::Value`s; marshaling them into the script
//! engine's own representation is the host's business.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnslookup::module::{registry, DNS_MODULE};
//! use serde_json::json;
//!
//! let dns = registry().get(DNS_MODULE).expect("dns module");
//! let result = dns.call("lookupMX", &[json!("example.com")])?;
//! println!("{} after {}ns", result["records"], result["duration"]);
//! ```

mod args;
mod dnsmodule;
mod error;
mod registry;

pub use args::string_arg;
pub use dnsmodule::{DnsModule, DNS_METHODS, DNS_MODULE};
pub use error::{CallError, RegistryError};
pub use registry::{registry, Module, ModuleInfo, Registry};
