//! Result types, one per lookup kind.
//!
//! Every result flattens its [`CommonFields`] envelope next to the payload,
//! so a serialized result reads `{err, duration, <payload>}`. Payloads
//! default to their zero value, which is what a failed lookup returns.

use crate::dns::{Mx, Ns, Srv};
use crate::measure::{CommonFields, SetCommonFields};
use serde::Serialize;

/// A mail exchanger as exposed to scripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    pub host: String,
    pub pref: u16,
}

impl From<Mx> for MxRecord {
    fn from(mx: Mx) -> Self {
        Self {
            host: mx.host,
            pref: mx.pref,
        }
    }
}

/// A name server as exposed to scripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NsRecord {
    pub host: String,
}

impl From<Ns> for NsRecord {
    fn from(ns: Ns) -> Self {
        Self { host: ns.host }
    }
}

/// A service location as exposed to scripts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SrvRecord {
    pub target: String,
    pub port: u16,
    pub priority: u16,
    pub weight: u16,
}

impl From<Srv> for SrvRecord {
    fn from(srv: Srv) -> Self {
        Self {
            target: srv.target,
            port: srv.port,
            priority: srv.priority,
            weight: srv.weight,
        }
    }
}

macro_rules! response {
    ($(#[$meta:meta])* $name:ident { $($field:ident: $ty:ty),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
        pub struct $name {
            #[serde(flatten)]
            pub common: CommonFields,
            $(pub $field: $ty,)+
        }

        impl SetCommonFields for $name {
            fn common_fields_mut(&mut self) -> &mut CommonFields {
                &mut self.common
            }
        }
    };
}

response! {
    /// Reverse lookup: names for an address.
    LookupAddrResponse { names: Vec<String> }
}

response! {
    LookupCnameResponse { cname: String }
}

response! {
    /// Forward lookup: addresses for a host.
    LookupHostResponse { addrs: Vec<String> }
}

response! {
    LookupIpResponse { ips: Vec<String> }
}

response! {
    /// Addresses including IPv6 zones (`addr%zone`).
    LookupIpAddrResponse { ips: Vec<String> }
}

response! {
    LookupMxResponse { records: Vec<MxRecord> }
}

response! {
    LookupNsResponse { records: Vec<NsRecord> }
}

response! {
    LookupNetIpResponse { ips: Vec<String> }
}

response! {
    LookupPortResponse { port: u16 }
}

response! {
    LookupSrvResponse { cname: String, records: Vec<SrvRecord> }
}

response! {
    /// Raw TXT strings, one per record.
    LookupTxtResponse { records: Vec<String> }
}
