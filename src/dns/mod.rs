//! Platform DNS resolution.
//!
//! Provides the resolver seam every lookup goes through:
//! - [`Resolve`]: one method per lookup kind, implemented by any platform
//!   resolver (or a test double)
//! - [`SystemResolver`]: the default, delegating to the operating system
//!   and the system resolver configuration
//! - [`GaiResolver`] / [`HickoryResolver`]: its address and record halves
//! - [`Services`]: service name to port database
//!
//! # Example
//!
//! ```rust,ignore
//! use dnslookup::dns::{Resolve, SystemResolver};
//!
//! let resolver = SystemResolver::new();
//! let records = resolver.lookup_mx("example.com").await?;
//! for mx in records {
//!     println!("{} {}", mx.pref, mx.host);
//! }
//! ```

mod gai;
mod hickory;
mod resolve;
mod services;
mod system;

pub use gai::{Family, GaiResolver};
pub use hickory::HickoryResolver;
pub use resolve::{IpAddrZone, Lookup, Mx, Ns, Resolve, Srv};
pub use services::{Services, SERVICES_PATH};
pub use system::SystemResolver;
