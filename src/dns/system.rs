//! The default platform resolver.
//!
//! Routes each lookup kind to the system facility that answers it:
//! `getaddrinfo` for addresses, hickory-dns for DNS records and the services
//! database for ports.

use super::gai::GaiResolver;
use super::hickory::HickoryResolver;
use super::resolve::{IpAddrZone, Lookup, Mx, Ns, Resolve, Srv};
use super::services::Services;
use std::net::IpAddr;

/// Platform resolver combining [`GaiResolver`], [`HickoryResolver`] and the
/// system [`Services`] database.
///
/// Stateless apart from the process-wide hickory resolver and services
/// table, both built lazily on first use.
#[derive(Clone, Debug, Default)]
pub struct SystemResolver {
    gai: GaiResolver,
    hickory: HickoryResolver,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolve for SystemResolver {
    fn lookup_addr<'a>(&'a self, addr: &'a str) -> Lookup<'a, Vec<String>> {
        Box::pin(self.hickory.lookup_addr(addr))
    }

    fn lookup_cname<'a>(&'a self, host: &'a str) -> Lookup<'a, String> {
        Box::pin(self.hickory.lookup_cname(host))
    }

    fn lookup_host<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<String>> {
        Box::pin(self.gai.lookup_host(host))
    }

    fn lookup_ip<'a>(&'a self, network: &'a str, host: &'a str) -> Lookup<'a, Vec<IpAddr>> {
        Box::pin(self.gai.lookup_ip(network, host))
    }

    fn lookup_ip_addr<'a>(&'a self, host: &'a str) -> Lookup<'a, Vec<IpAddrZone>> {
        Box::pin(self.gai.lookup_ip_addr(host))
    }

    fn lookup_mx<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Mx>> {
        Box::pin(self.hickory.lookup_mx(name))
    }

    fn lookup_ns<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<Ns>> {
        Box::pin(self.hickory.lookup_ns(name))
    }

    fn lookup_net_ip<'a>(
        &'a self,
        network: &'a str,
        host: &'a str,
    ) -> Lookup<'a, Vec<IpAddr>> {
        Box::pin(self.gai.lookup_net_ip(network, host))
    }

    fn lookup_port<'a>(&'a self, network: &'a str, service: &'a str) -> Lookup<'a, u16> {
        Box::pin(async move { Services::system().lookup_port(network, service) })
    }

    fn lookup_srv<'a>(
        &'a self,
        service: &'a str,
        proto: &'a str,
        name: &'a str,
    ) -> Lookup<'a, (String, Vec<Srv>)> {
        Box::pin(self.hickory.lookup_srv(service, proto, name))
    }

    fn lookup_txt<'a>(&'a self, name: &'a str) -> Lookup<'a, Vec<String>> {
        Box::pin(self.hickory.lookup_txt(name))
    }
}
