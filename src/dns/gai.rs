//! System address lookups using getaddrinfo.
//!
//! This resolver uses the operating system's native resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async
//! runtime. It answers the address-shaped lookups (host, IP, IP with zone)
//! and therefore honors `/etc/hosts`, NSS and the rest of the local system
//! configuration.

use super::resolve::IpAddrZone;
use crate::base::context::LookupResultExt;
use crate::base::lookuperror::LookupError;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};

/// Address family selected by a `network` argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// `ip`: both families.
    Any,
    /// `ip4`
    V4,
    /// `ip6`
    V6,
}

impl Family {
    /// Parses an IP lookup network name.
    pub fn from_network(network: &str) -> Result<Self, LookupError> {
        match network {
            "ip" => Ok(Self::Any),
            "ip4" => Ok(Self::V4),
            "ip6" => Ok(Self::V6),
            other => Err(LookupError::UnknownNetwork(other.to_string())),
        }
    }

    pub fn matches(self, ip: &IpAddr) -> bool {
        match self {
            Self::Any => true,
            Self::V4 => ip.is_ipv4(),
            Self::V6 => ip.is_ipv6(),
        }
    }
}

/// System address resolver using `getaddrinfo` in a thread pool.
///
/// # Performance
///
/// Each resolution spawns a blocking task.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }

    /// Resolves `host`, returning socket addresses in the order the OS
    /// produced them.
    pub async fn resolve(&self, host: &str) -> Result<Vec<SocketAddr>, LookupError> {
        let owned = host.to_string();

        let result = tokio::task::spawn_blocking(move || {
            tracing::trace!(host = %owned, "resolving via getaddrinfo");
            (owned.as_str(), 0u16)
                .to_socket_addrs()
                .map(|iter| iter.collect::<Vec<_>>())
        })
        .await;

        // Handle task join error (cancellation, panic)
        let addrs = result
            .map_err(|e| {
                tracing::error!(error = %e, "getaddrinfo task failed");
                LookupError::Runtime {
                    name: host.to_string(),
                    source: e,
                }
            })?
            .lookup_context(host)
            .inspect_err(|e| tracing::debug!(domain = %host, error = %e, "getaddrinfo failed"))?;

        if addrs.is_empty() {
            return Err(LookupError::no_such_host(host));
        }

        tracing::debug!(domain = %host, count = addrs.len(), "getaddrinfo complete");
        Ok(addrs)
    }

    /// Addresses of `host` as text.
    pub async fn lookup_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        let addrs = self.resolve(host).await?;
        Ok(addrs.iter().map(|addr| addr.ip().to_string()).collect())
    }

    /// Addresses of `host` with IPv6 scope ids kept as zones.
    pub async fn lookup_ip_addr(&self, host: &str) -> Result<Vec<IpAddrZone>, LookupError> {
        let addrs = self.resolve(host).await?;
        Ok(addrs.into_iter().map(zoned).collect())
    }

    /// Addresses of `host` for `network`, with IPv4-mapped IPv6 addresses
    /// reported in their IPv4 form.
    pub async fn lookup_ip(&self, network: &str, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        let family = Family::from_network(network)?;
        let addrs = self.resolve(host).await?;
        let ips = addrs.iter().map(|addr| addr.ip().to_canonical());
        filter_family(host, family, ips)
    }

    /// Addresses of `host` for `network`, exactly as the OS returned them.
    pub async fn lookup_net_ip(
        &self,
        network: &str,
        host: &str,
    ) -> Result<Vec<IpAddr>, LookupError> {
        let family = Family::from_network(network)?;
        let addrs = self.resolve(host).await?;
        filter_family(host, family, addrs.iter().map(SocketAddr::ip))
    }
}

/// Keeps an IPv6 scope id as the address zone, by interface name when the
/// index maps to one and numerically otherwise.
fn zoned(addr: SocketAddr) -> IpAddrZone {
    match addr {
        SocketAddr::V6(v6) if v6.scope_id() != 0 => {
            let scope = v6.scope_id();
            let zone = interface_name(scope).unwrap_or_else(|| scope.to_string());
            IpAddrZone::with_zone(IpAddr::V6(*v6.ip()), zone)
        }
        other => IpAddrZone::new(other.ip()),
    }
}

#[cfg(unix)]
fn interface_name(index: u32) -> Option<String> {
    use std::ffi::CStr;

    let mut buf = [0 as libc::c_char; libc::IF_NAMESIZE];
    // SAFETY: `buf` is IF_NAMESIZE bytes, the size if_indextoname writes into.
    let name = unsafe { libc::if_indextoname(index, buf.as_mut_ptr()) };
    if name.is_null() {
        return None;
    }
    // SAFETY: on success `name` points into `buf`, NUL-terminated.
    let name = unsafe { CStr::from_ptr(name) };
    Some(name.to_string_lossy().into_owned())
}

#[cfg(not(unix))]
fn interface_name(_index: u32) -> Option<String> {
    None
}

/// Keeps the addresses matching `family`, preserving order.
pub(crate) fn filter_family(
    host: &str,
    family: Family,
    ips: impl IntoIterator<Item = IpAddr>,
) -> Result<Vec<IpAddr>, LookupError> {
    let ips: Vec<IpAddr> = ips.into_iter().filter(|ip| family.matches(ip)).collect();
    if ips.is_empty() {
        return Err(LookupError::NoSuitableAddress {
            name: host.to_string(),
        });
    }
    Ok(ips)
}
