//! The `k6/x/dns` host module.
//!
//! Maps script method names onto [`Dns`] operations, coerces arguments,
//! blocks the calling thread until the lookup finishes and hands back the
//! result as a host value.

use super::args::string_arg;
use super::error::CallError;
use super::registry::{Module, ModuleInfo};
use crate::lookup::Dns;
use serde::Serialize;
use serde_json::Value;
use std::{
    fmt,
    future::Future,
    io,
    sync::{mpsc, Arc},
};
use tokio::runtime::{Builder, Runtime};

/// Namespace the DNS module is registered under.
pub const DNS_MODULE: &str = "k6/x/dns";

/// Script-facing method names, in lower camel case.
pub const DNS_METHODS: &[&str] = &[
    "lookupAddr",
    "lookupCNAME",
    "lookupHost",
    "lookupIP",
    "lookupIPAddr",
    "lookupMX",
    "lookupNS",
    "lookupNetIP",
    "lookupPort",
    "lookupSRV",
    "lookupTXT",
];

/// Blocking host handler for [`Dns`].
///
/// Owns a small multi-threaded runtime so several host threads can block
/// on lookups at once without serializing on each other. Lookups are
/// spawned onto that runtime and the caller waits on a channel, so calling
/// from any thread is safe, including `spawn_blocking` threads and threads
/// that have entered another runtime.
pub struct DnsModule {
    dns: Dns,
    runtime: Option<Runtime>,
}

impl DnsModule {
    /// A module backed by the system resolver.
    pub fn new() -> io::Result<Self> {
        Self::with_dns(Dns::system())
    }

    pub fn with_dns(dns: Dns) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("dns-lookup")
            .enable_all()
            .build()?;
        Ok(Self {
            dns,
            runtime: Some(runtime),
        })
    }

    pub fn dns(&self) -> &Dns {
        &self.dns
    }

    fn run<F, Fut>(&self, lookup: F) -> Result<Value, CallError>
    where
        F: FnOnce(Dns) -> Fut,
        Fut: Future + Send + 'static,
        Fut::Output: Serialize + Send + 'static,
    {
        let runtime = self
            .runtime
            .as_ref()
            .ok_or(CallError::Interrupted { module: DNS_MODULE })?;

        let (tx, rx) = mpsc::sync_channel(1);
        let task = lookup(self.dns.clone());
        runtime.spawn(async move {
            // Receiver only goes away if the caller is gone
            let _ = tx.send(task.await);
        });

        let response = rx.recv().map_err(|_| {
            tracing::error!(module = DNS_MODULE, "lookup task ended without a result");
            CallError::Interrupted { module: DNS_MODULE }
        })?;
        serde_json::to_value(response).map_err(|source| CallError::Marshal {
            module: DNS_MODULE,
            source,
        })
    }
}

impl Drop for DnsModule {
    fn drop(&mut self) {
        // Runtime's own drop panics when it happens inside an async context
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl Module for DnsModule {
    fn methods(&self) -> &'static [&'static str] {
        DNS_METHODS
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value, CallError> {
        tracing::trace!(method, argc = args.len(), "dns module call");
        let (a0, a1, a2) = (string_arg(args, 0), string_arg(args, 1), string_arg(args, 2));

        match method {
            "lookupAddr" => self.run(|dns| async move { dns.lookup_addr(&a0).await }),
            "lookupCNAME" => self.run(|dns| async move { dns.lookup_cname(&a0).await }),
            "lookupHost" => self.run(|dns| async move { dns.lookup_host(&a0).await }),
            "lookupIP" => self.run(|dns| async move { dns.lookup_ip(&a0, &a1).await }),
            "lookupIPAddr" => self.run(|dns| async move { dns.lookup_ip_addr(&a0).await }),
            "lookupMX" => self.run(|dns| async move { dns.lookup_mx(&a0).await }),
            "lookupNS" => self.run(|dns| async move { dns.lookup_ns(&a0).await }),
            "lookupNetIP" => self.run(|dns| async move { dns.lookup_net_ip(&a0, &a1).await }),
            "lookupPort" => self.run(|dns| async move { dns.lookup_port(&a0, &a1).await }),
            "lookupSRV" => self.run(|dns| async move { dns.lookup_srv(&a0, &a1, &a2).await }),
            "lookupTXT" => self.run(|dns| async move { dns.lookup_txt(&a0).await }),
            other => Err(CallError::UnknownMethod {
                module: DNS_MODULE,
                method: other.to_string(),
            }),
        }
    }
}

impl From<DnsModule> for ModuleInfo {
    fn from(module: DnsModule) -> Self {
        ModuleInfo {
            name: DNS_MODULE,
            module: Arc::new(module),
        }
    }
}

impl fmt::Debug for DnsModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsModule")
            .field("name", &DNS_MODULE)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_methods_cover_every_lookup_kind() {
        let module = DnsModule::new().unwrap();
        assert_eq!(module.methods().len(), 11);
        assert!(module.methods().contains(&"lookupSRV"));
    }

    #[test]
    fn test_unknown_method() {
        let module = DnsModule::new().unwrap();
        let err = module.call("lookupA", &[]).unwrap_err();
        assert_eq!(err.to_string(), r#"k6/x/dns: no method named "lookupA""#);
    }

    #[test]
    fn test_port_call_returns_envelope() {
        let module = DnsModule::new().unwrap();
        let value = module
            .call("lookupPort", &[json!("tcp"), json!("http")])
            .unwrap();

        assert_eq!(value["err"], "");
        assert_eq!(value["port"], 80);
        assert!(value["duration"].is_u64());
    }

    #[test]
    fn test_numeric_argument_is_coerced() {
        let module = DnsModule::new().unwrap();
        let value = module
            .call("lookupPort", &[json!("udp"), json!(5353)])
            .unwrap();
        assert_eq!(value["port"], 5353);
    }

    #[test]
    fn test_failed_lookup_is_not_a_call_error() {
        let module = DnsModule::new().unwrap();
        let value = module
            .call("lookupIP", &[json!("ip5"), json!("localhost")])
            .unwrap();

        assert_eq!(value["err"], "unknown network ip5");
        assert_eq!(value["ips"], json!([]));
    }

    #[tokio::test]
    async fn test_call_from_blocking_thread_inside_runtime() {
        let value = tokio::task::spawn_blocking(|| {
            let module = DnsModule::new().unwrap();
            module
                .call("lookupPort", &[json!("tcp"), json!("http")])
                .unwrap()
        })
        .await
        .unwrap();

        assert_eq!(value["err"], "");
        assert_eq!(value["port"], 80);
    }

    #[test]
    fn test_call_after_entering_runtime() {
        let outer = tokio::runtime::Runtime::new().unwrap();
        let _guard = outer.enter();

        let module = DnsModule::new().unwrap();
        let value = module
            .call("lookupPort", &[json!("udp"), json!("domain")])
            .unwrap();
        assert_eq!(value["port"], 53);
    }

    #[tokio::test]
    async fn test_call_and_drop_on_runtime_thread() {
        let module = DnsModule::new().unwrap();
        let value = module
            .call("lookupPort", &[json!("tcp"), json!("443")])
            .unwrap();
        assert_eq!(value["port"], 443);

        drop(module);
    }
}
