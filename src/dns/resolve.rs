//! Core DNS resolution types and traits.
//!
//! This module defines the `Resolve` trait and the resolver-native record
//! types that form the seam between lookups and the platform resolver.

use crate::base::lookuperror::LookupError;
use std::{fmt, future::Future, net::IpAddr, pin::Pin, sync::Arc};

/// Alias for the `Future` type returned by a platform resolver.
pub type Lookup<'a, T> = Pin<Box<dyn Future<Output = Result<T, LookupError>> + Send + 'a>>;

/// A mail exchanger as returned by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mx {
    pub host: String,
    pub pref: u16,
}

/// A name server as returned by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ns {
    pub host: String,
}

/// A service location as returned by the resolver.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Srv {
    pub target: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

/// An IP address with an optional IPv6 zone (scope).
///
/// Displays as `addr` or `addr%zone`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IpAddrZone {
    pub ip: IpAddr,
    pub zone: String,
}

impl IpAddrZone {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            zone: String::new(),
        }
    }

    pub fn with_zone(ip: IpAddr, zone: impl Into<String>) -> Self {
        Self {
            ip,
            zone: zone.into(),
        }
    }
}

impl From<IpAddr> for IpAddrZone {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}

impl fmt::Display for IpAddrZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.zone.is_empty() {
            fmt::Display::fmt(&self.ip, f)
        } else {
            write!(f, "{}%{}", self.ip, self.zone)
        }
    }
}

/// The platform name-resolution service.
///
/// One method per lookup kind. Implementations perform exactly one
/// resolution attempt per call and must tolerate concurrent calls through
/// `&self`.
///
/// # Design Notes
///
/// - Arguments are passed through unvalidated; rejecting malformed input is
///   the implementation's job and surfaces as a `LookupError`.
/// - Returns boxed futures for trait object compatibility.
/// - No method takes a deadline; timeout policy belongs to the implementation.
pub trait Resolve: Send + Sync {
    /// Reverse lookup: names mapping to the given address.
    fn lookup_addr<'a>(&'a self, addr: &'a str) -> Lookup<'a, Vec<String>>;

    /// Canonical name of a host after following CNAME records.
    fn lookup_cname<'a>(&'a self, host: &'a str) -> Lookup<'a, String>;

    /// Forward lookup: the host's addresses, as text.
    fn lookup_host<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<String>>;

    /// Addresses of `host` restricted to `network` (`ip`, `ip4` or `ip6`).
    fn lookup_ip<'a>(&'a self, network: &'a str, host: &'a str) -> Lookup<'a, Vec<IpAddr>>;

    /// All addresses of `host`, with zones.
    fn lookup_ip_addr<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<IpAddrZone>>;

    fn lookup_mx<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Mx>>;

    fn lookup_ns<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Ns>>;

    /// Like [`Resolve::lookup_ip`], without unmapping IPv4-mapped IPv6 addresses.
    fn lookup_net_ip<'a>(&'a self, network: &'a str, host: &'a str)
        -> Lookup<'a, Vec<IpAddr>>;

    /// Port for a named (or numeric) service on `network`.
    fn lookup_port<'a>(&'a self, network: &'a str, service: &'a str) -> Lookup<'a, u16>;

    /// SRV records for `_service._proto.name`, with the canonical owner name.
    fn lookup_srv<'a>(
        &'a self,
        service: &'a str,
        proto: &'a str,
        name: &'a str,
    ) -> Lookup<'a, (String, Vec<Srv>)>;

    fn lookup_txt<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<String>>;
}

/// Blanket implementation for Arc-wrapped resolvers.
impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn lookup_addr<'a>(&'a self, addr: &'a str) -> Lookup<'a, Vec<String>> {
        (**self).lookup_addr(addr)
    }

    fn lookup_cname<'a>(&'a self, host: &'a str) -> Lookup<'a, String> {
        (**self).lookup_cname(host)
    }

    fn lookup_host<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<String>> {
        (**self).lookup_host(host)
    }

    fn lookup_ip<'a>(&'a self, network: &'a str, host: &'a str) -> Lookup<'a, Vec<IpAddr>> {
        (**self).lookup_ip(network, host)
    }

    fn lookup_ip_addr<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<IpAddrZone>> {
        (**self).lookup_ip_addr(host)
    }

    fn lookup_mx<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Mx>> {
        (**self).lookup_mx(name)
    }

    fn lookup_ns<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Ns>> {
        (**self).lookup_ns(name)
    }

    fn lookup_net_ip<'a>(
        &'a self,
        network: &'a str,
        host: &'a str,
    ) -> Lookup<'a, Vec<IpAddr>> {
        (**self).lookup_net_ip(network, host)
    }

    fn lookup_port<'a>(&'a self, network: &'a str, service: &'a str) -> Lookup<'a, u16> {
        (**self).lookup_port(network, service)
    }

    fn lookup_srv<'a>(
        &'a self,
        service: &'a str,
        proto: &'a str,
        name: &'a str,
    ) -> Lookup<'a, (String, Vec<Srv>)> {
        (**self).lookup_srv(service, proto, name)
    }

    fn lookup_txt<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<String>> {
        (**self).lookup_txt(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_ip_addr_zone_display() {
        let plain = IpAddrZone::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));
        assert_eq!(plain.to_string(), "192.0.2.1");

        let zoned = IpAddrZone::with_zone("fe80::1".parse().unwrap(), "eth0");
        assert_eq!(zoned.to_string(), "fe80::1%eth0");
    }

    #[test]
    fn test_ip_addr_zone_from_ip() {
        let zone: IpAddrZone = IpAddr::V6(Ipv6Addr::LOCALHOST).into();
        assert!(zone.zone.is_empty());
        assert_eq!(zone.to_string(), "::1");
    }

    struct StaticResolver;

    impl Resolve for StaticResolver {
        fn lookup_addr<'a>(&'a self, _addr: &'a str) -> Lookup<'a, Vec<String>> {
            Box::pin(async { Ok(vec!["localhost.".to_string()]) })
        }

        fn lookup_cname<'a>(&'a self, host: &'a str) -> Lookup<'a, String> {
            Box::pin(async move { Ok(format!("{host}.")) })
        }

        fn lookup_host<'a>(&'a self, _host: &'a str) -> Lookup<'a, Vec<String>> {
            Box::pin(async { Ok(vec!["127.0.0.1".to_string()]) })
        }

        fn lookup_ip<'a>(&'a self, _network: &'a str, _host: &'a str) -> Lookup<'a, Vec<IpAddr>> {
            Box::pin(async { Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]) })
        }

        fn lookup_ip_addr<'a>(&'a self, _host: &'a str) -> Lookup<'a, Vec<IpAddrZone>> {
            Box::pin(async { Ok(vec![IpAddr::V4(Ipv4Addr::LOCALHOST).into()]) })
        }

        fn lookup_mx<'a>(&'a self, _name: &'a str) -> Lookup<'a, Vec<Mx>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn lookup_ns<'a>(&'a self, _name: &'a str) -> Lookup<'a, Vec<Ns>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn lookup_net_ip<'a>(
            &'a self,
            _network: &'a str,
            _host: &'a str,
        ) -> Lookup<'a, Vec<IpAddr>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn lookup_port<'a>(&'a self, _network: &'a str, _service: &'a str) -> Lookup<'a, u16> {
            Box::pin(async { Ok(80) })
        }

        fn lookup_srv<'a>(
            &'a self,
            _service: &'a str,
            _proto: &'a str,
            name: &'a str,
        ) -> Lookup<'a, (String, Vec<Srv>)> {
            Box::pin(async move { Ok((format!("{name}."), Vec::new())) })
        }

        fn lookup_txt<'a>(&'a self, _name: &'a str) -> Lookup<'a, Vec<String>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    #[tokio::test]
    async fn test_arc_resolver_delegates() {
        let resolver: Arc<dyn Resolve> = Arc::new(StaticResolver);

        assert_eq!(resolver.lookup_port("tcp", "http").await.unwrap(), 80);
        assert_eq!(
            resolver.lookup_cname("example.com").await.unwrap(),
            "example.com."
        );
        let (cname, records) = resolver
            .lookup_srv("xmpp", "tcp", "example.com")
            .await
            .unwrap();
        assert_eq!(cname, "example.com.");
        assert!(records.is_empty());
    }
}
