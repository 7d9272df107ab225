//! # dnslookup
//!
//! Measured DNS lookups for script hosts.
//!
//! Forward and reverse lookups, canonical names, MX, NS, SRV and TXT
//! records, IP addresses by family and service ports are all supported.
//! Each lookup is delegated to the platform resolver exactly once. It comes
//! back as a single self-describing result: the payload plus an envelope
//! holding the elapsed duration and, on failure, the resolver's error text.
//! Lookups never fail outright.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dnslookup::lookup::Dns;
//!
//! #[tokio::main]
//! async fn main() {
//!     let dns = Dns::system();
//!     let response = dns.lookup_mx("example.com").await;
//!     println!(
//!         "{} records in {:?} (err: {:?})",
//!         response.records.len(),
//!         response.common.duration,
//!         response.common.err,
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types
//! - [`dns`] - The `Resolve` seam and the system resolver behind it
//! - [`measure`] - The timing/error envelope and its dispatcher
//! - [`lookup`] - One measured operation per lookup kind
//! - [`module`] - Host boundary: registry and the blocking `k6/x/dns` handler
//!
//! ## Timeouts
//!
//! No deadline is applied on top of the platform resolver. A lookup takes as
//! long as the system resolver configuration allows; callers that need
//! bounded latency must enforce it themselves.

pub mod base;
pub mod dns;
pub mod lookup;
pub mod measure;
pub mod module;
