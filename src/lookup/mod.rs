//! Measured lookup operations.
//!
//! [`Dns`] exposes one async operation per lookup kind. Each operation makes
//! exactly one call to the platform resolver through [`measure`], so every
//! result carries its duration and error text and never fails outright.
//!
//! # Example
//!
//! ```rust,ignore
//! use dnslookup::lookup::Dns;
//!
//! let dns = Dns::system();
//! let response = dns.lookup_host("example.com").await;
//! if response.common.err.is_empty() {
//!     println!("{:?} in {:?}", response.addrs, response.common.duration);
//! }
//! ```

mod response;

pub use response::{
    LookupAddrResponse, LookupCnameResponse, LookupHostResponse, LookupIpAddrResponse,
    LookupIpResponse, LookupMxResponse, LookupNetIpResponse, LookupNsResponse, LookupPortResponse,
    LookupSrvResponse, LookupTxtResponse, MxRecord, NsRecord, SrvRecord,
};

use crate::base::LookupError;
use crate::dns::{Resolve, SystemResolver};
use crate::measure::{lift, measure, to_strings};
use std::{fmt, sync::Arc};

/// Lookup facade over a platform resolver.
///
/// Holds no state of its own; cloning shares the resolver.
#[derive(Clone)]
pub struct Dns<R = Arc<dyn Resolve>> {
    resolver: R,
}

impl<R> fmt::Debug for Dns<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dns").finish_non_exhaustive()
    }
}

impl Dns {
    /// A facade over the [`SystemResolver`].
    pub fn system() -> Self {
        Self::new(Arc::new(SystemResolver::new()))
    }
}

impl<R: Resolve> Dns<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub async fn lookup_addr(&self, addr: &str) -> LookupAddrResponse {
        measure(|| async {
            let names = self.resolver.lookup_addr(addr).await?;
            Ok::<_, LookupError>(LookupAddrResponse {
                names,
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_cname(&self, host: &str) -> LookupCnameResponse {
        measure(|| async {
            let cname = self.resolver.lookup_cname(host).await?;
            Ok::<_, LookupError>(LookupCnameResponse {
                cname,
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_host(&self, host: &str) -> LookupHostResponse {
        measure(|| async {
            let addrs = self.resolver.lookup_host(host).await?;
            Ok::<_, LookupError>(LookupHostResponse {
                addrs,
                ..Default::default()
            })
        })
        .await
    }

    /// `network` is `ip`, `ip4` or `ip6`.
    pub async fn lookup_ip(&self, network: &str, host: &str) -> LookupIpResponse {
        measure(|| async {
            let ips = self.resolver.lookup_ip(network, host).await?;
            Ok::<_, LookupError>(LookupIpResponse {
                ips: to_strings(ips),
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_ip_addr(&self, host: &str) -> LookupIpAddrResponse {
        measure(|| async {
            let ips = self.resolver.lookup_ip_addr(host).await?;
            Ok::<_, LookupError>(LookupIpAddrResponse {
                ips: to_strings(ips),
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_mx(&self, name: &str) -> LookupMxResponse {
        measure(|| async {
            let records = self.resolver.lookup_mx(name).await?;
            Ok::<_, LookupError>(LookupMxResponse {
                records: lift(records),
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_ns(&self, name: &str) -> LookupNsResponse {
        measure(|| async {
            let records = self.resolver.lookup_ns(name).await?;
            Ok::<_, LookupError>(LookupNsResponse {
                records: lift(records),
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_net_ip(&self, network: &str, host: &str) -> LookupNetIpResponse {
        measure(|| async {
            let ips = self.resolver.lookup_net_ip(network, host).await?;
            Ok::<_, LookupError>(LookupNetIpResponse {
                ips: to_strings(ips),
                ..Default::default()
            })
        })
        .await
    }

    /// `network` is empty or one of `ip`, `tcp`, `tcp4`, `tcp6`, `udp`,
    /// `udp4`, `udp6`.
    pub async fn lookup_port(&self, network: &str, service: &str) -> LookupPortResponse {
        measure(|| async {
            let port = self.resolver.lookup_port(network, service).await?;
            Ok::<_, LookupError>(LookupPortResponse {
                port,
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_srv(&self, service: &str, proto: &str, name: &str) -> LookupSrvResponse {
        measure(|| async {
            let (cname, records) = self.resolver.lookup_srv(service, proto, name).await?;
            Ok::<_, LookupError>(LookupSrvResponse {
                cname,
                records: lift(records),
                ..Default::default()
            })
        })
        .await
    }

    pub async fn lookup_txt(&self, name: &str) -> LookupTxtResponse {
        measure(|| async {
            let records = self.resolver.lookup_txt(name).await?;
            Ok::<_, LookupError>(LookupTxtResponse {
                records,
                ..Default::default()
            })
        })
        .await
    }
}
