//! Async DNS record lookups using hickory-dns.
//!
//! Answers the record-shaped lookups: reverse (PTR), canonical name, MX,
//! NS, SRV and TXT. Names are returned fully qualified, with the trailing
//! dot. MX and SRV answers are put in preference order; everything else
//! keeps the order of the DNS answer.

use super::resolve::{Mx, Ns, Srv};
use crate::base::context::LookupResultExt;
use crate::base::lookuperror::LookupError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    lookup::Lookup,
    name_server::TokioConnectionProvider,
    proto::rr::{RData, RecordType},
    TokioResolver,
};
use std::{cmp::Reverse, net::IpAddr, sync::LazyLock};

/// Async DNS resolver backed by hickory-dns.
///
/// This resolver is lazily initialized on first use and shared across
/// all instances via a static `LazyLock`. It configures itself from the
/// system's resolver settings, so timeouts, attempts and upstream servers
/// are whatever the host is configured with.
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryResolver {
    /// Creates a new `HickoryResolver`.
    ///
    /// The underlying resolver is lazily initialized on first DNS query.
    /// It will attempt to read system DNS configuration; if that fails,
    /// it falls back to hickory's defaults.
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Failed to read system DNS config, using defaults"
                    );
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };

            // Canonical-name lookups need both families to find AAAA-only hosts
            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }

    /// Names pointing at `addr` (PTR).
    pub async fn lookup_addr(&self, addr: &str) -> Result<Vec<String>, LookupError> {
        let ip: IpAddr = addr
            .parse()
            .map_err(|_| LookupError::InvalidAddress(addr.to_string()))?;

        tracing::trace!(addr = %ip, "reverse lookup via hickory-dns");
        let lookup = self
            .resolver
            .reverse_lookup(ip)
            .await
            .lookup_context(addr)
            .inspect_err(|e| tracing::debug!(addr = %addr, error = %e, "reverse lookup failed"))?;

        Ok(lookup.iter().map(|name| name.to_utf8()).collect())
    }

    /// Canonical name of `host`: the owner of its address records once the
    /// CNAME chain has been followed.
    pub async fn lookup_cname(&self, host: &str) -> Result<String, LookupError> {
        tracing::trace!(domain = %host, "canonical name lookup via hickory-dns");
        let lookup = self
            .resolver
            .lookup_ip(host)
            .await
            .lookup_context(host)
            .inspect_err(|e| tracing::debug!(domain = %host, error = %e, "cname lookup failed"))?;

        Ok(canonical_name(lookup.as_lookup()))
    }

    /// MX records, most preferred (lowest preference) first.
    pub async fn lookup_mx(&self, name: &str) -> Result<Vec<Mx>, LookupError> {
        let lookup = self.lookup(name, RecordType::MX).await?;
        Ok(mx_records(&lookup))
    }

    pub async fn lookup_ns(&self, name: &str) -> Result<Vec<Ns>, LookupError> {
        let lookup = self.lookup(name, RecordType::NS).await?;
        Ok(ns_records(&lookup))
    }

    /// SRV records for `_service._proto.name`, or for `name` itself when
    /// both service and proto are empty. Records come back ordered by
    /// priority, heavier weights first within a priority.
    pub async fn lookup_srv(
        &self,
        service: &str,
        proto: &str,
        name: &str,
    ) -> Result<(String, Vec<Srv>), LookupError> {
        let target = srv_target(service, proto, name);
        let lookup = self.lookup(&target, RecordType::SRV).await?;
        Ok(srv_records(&lookup))
    }

    /// TXT records, each record's character-strings joined into one string.
    pub async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.lookup(name, RecordType::TXT).await?;
        Ok(txt_records(&lookup))
    }

    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<Lookup, LookupError> {
        tracing::trace!(domain = %name, record_type = %record_type, "resolving via hickory-dns");
        self.resolver
            .lookup(name, record_type)
            .await
            .lookup_context(name)
            .inspect_err(|e| {
                tracing::debug!(
                    domain = %name,
                    record_type = %record_type,
                    error = %e,
                    "hickory-dns lookup failed"
                )
            })
    }
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn srv_target(service: &str, proto: &str, name: &str) -> String {
    if service.is_empty() && proto.is_empty() {
        name.to_string()
    } else {
        format!("_{service}._{proto}.{name}")
    }
}

/// Owner of the first address record, i.e. the end of the CNAME chain.
/// Falls back to the query name when the answer holds no addresses.
fn canonical_name(lookup: &Lookup) -> String {
    lookup
        .records()
        .iter()
        .find(|record| record.record_type().is_ip_addr())
        .map(|record| record.name().to_utf8())
        .unwrap_or_else(|| lookup.query().name().to_utf8())
}

fn mx_records(lookup: &Lookup) -> Vec<Mx> {
    let mut records: Vec<Mx> = lookup
        .iter()
        .filter_map(|rdata| match rdata {
            RData::MX(mx) => Some(Mx {
                host: mx.exchange().to_utf8(),
                pref: mx.preference(),
            }),
            _ => None,
        })
        .collect();
    // Stable: equal preferences keep answer order
    records.sort_by_key(|mx| mx.pref);
    records
}

fn ns_records(lookup: &Lookup) -> Vec<Ns> {
    lookup
        .iter()
        .filter_map(|rdata| match rdata {
            RData::NS(ns) => Some(Ns {
                host: ns.to_utf8(),
            }),
            _ => None,
        })
        .collect()
}

/// The SRV owner name and its records, sorted by priority then descending
/// weight.
fn srv_records(lookup: &Lookup) -> (String, Vec<Srv>) {
    let cname = lookup
        .records()
        .iter()
        .find(|record| record.record_type() == RecordType::SRV)
        .map(|record| record.name().to_utf8())
        .unwrap_or_else(|| lookup.query().name().to_utf8());

    let mut records: Vec<Srv> = lookup
        .iter()
        .filter_map(|rdata| match rdata {
            RData::SRV(srv) => Some(Srv {
                target: srv.target().to_utf8(),
                port: srv.port(),
                priority: srv.priority(),
                weight: srv.weight(),
            }),
            _ => None,
        })
        .collect();
    records.sort_by_key(|srv| (srv.priority, Reverse(srv.weight)));

    (cname, records)
}

fn txt_records(lookup: &Lookup) -> Vec<String> {
    lookup
        .iter()
        .filter_map(|rdata| match rdata {
            RData::TXT(txt) => Some(
                txt.iter()
                    .map(|bytes| String::from_utf8_lossy(bytes))
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}
