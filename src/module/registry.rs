//! Process-wide module registry.
//!
//! Hosts discover modules by namespace. The registry is built once, on
//! first access, and registers the DNS module under [`DNS_MODULE`]; there is
//! nothing to configure and nothing to change afterwards.

use super::dnsmodule::{DnsModule, DNS_MODULE};
use super::error::{CallError, RegistryError};
use serde_json::Value;
use std::{collections::BTreeMap, fmt, sync::Arc, sync::LazyLock};

/// A handler callable from a host scripting environment.
///
/// Implementations are stateless from the host's point of view and must
/// accept concurrent calls.
pub trait Module: Send + Sync {
    /// Script-facing method names.
    fn methods(&self) -> &'static [&'static str];

    /// Invokes `method` with host values, blocking until it completes.
    fn call(&self, method: &str, args: &[Value]) -> Result<Value, CallError>;
}

/// A module and the namespace it is registered under.
#[derive(Clone)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub module: Arc<dyn Module>,
}

impl fmt::Debug for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleInfo")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Namespace to module mapping.
#[derive(Clone, Default)]
pub struct Registry {
    modules: BTreeMap<&'static str, Arc<dyn Module>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module. Each namespace can be registered once.
    pub fn register(&mut self, info: impl Into<ModuleInfo>) -> Result<(), RegistryError> {
        let info = info.into();
        if self.modules.contains_key(info.name) {
            return Err(RegistryError::Duplicate(info.name));
        }
        tracing::debug!(module = info.name, "registered module");
        self.modules.insert(info.name, info.module);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Module>> {
        self.modules.get(name).cloned()
    }

    /// Registered namespaces in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.keys().copied()
    }

    /// One line per registered module, e.g. `k6/x/dns [js]`.
    pub fn extensions(&self) -> Vec<String> {
        self.names().map(|name| format!("{name} [js]")).collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.modules.keys()).finish()
    }
}

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
        let mut registry = Registry::new();
        match DnsModule::new() {
            Ok(module) => {
                if let Err(e) = registry.register(module) {
                    tracing::error!(error = %e, "Failed to register module");
                }
            }
            Err(e) => {
                tracing::error!(module = DNS_MODULE, error = %e, "Failed to start lookup runtime");
            }
        }
        registry
    });
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Module for Echo {
        fn methods(&self) -> &'static [&'static str] {
            &["echo"]
        }

        fn call(&self, _method: &str, args: &[Value]) -> Result<Value, CallError> {
            Ok(Value::Array(args.to_vec()))
        }
    }

    fn echo(name: &'static str) -> ModuleInfo {
        ModuleInfo {
            name,
            module: Arc::new(Echo),
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        registry.register(echo("k6/x/echo")).unwrap();

        let module = registry.get("k6/x/echo").expect("registered");
        assert_eq!(module.methods(), &["echo"]);
        assert!(registry.get("k6/x/other").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = Registry::new();
        registry.register(echo("k6/x/echo")).unwrap();

        assert_eq!(
            registry.register(echo("k6/x/echo")),
            Err(RegistryError::Duplicate("k6/x/echo"))
        );
    }

    #[test]
    fn test_extensions_sorted() {
        let mut registry = Registry::new();
        registry.register(echo("k6/x/zeta")).unwrap();
        registry.register(echo("k6/x/alpha")).unwrap();

        assert_eq!(
            registry.extensions(),
            vec!["k6/x/alpha [js]".to_string(), "k6/x/zeta [js]".to_string()]
        );
    }

    #[test]
    fn test_process_registry_has_dns() {
        let registry = registry();
        assert_eq!(registry.extensions(), vec!["k6/x/dns [js]".to_string()]);
        // Same instance every time
        assert!(std::ptr::eq(registry, super::registry()));
    }
}
