//! Service name to port mapping.
//!
//! Backs port lookups with the system services database (`/etc/services`)
//! layered over a small built-in table, so common names resolve even on
//! hosts without the file.

use crate::base::lookuperror::LookupError;
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::LazyLock,
};

/// Location of the system services database.
pub const SERVICES_PATH: &str = "/etc/services";

/// Entries available even when the services file is missing.
const BUILTIN: &[(&str, &str, u16)] = &[
    ("tcp", "ftp", 21),
    ("tcp", "ftps", 990),
    ("tcp", "gopher", 70),
    ("tcp", "http", 80),
    ("tcp", "https", 443),
    ("tcp", "imap2", 143),
    ("tcp", "imap3", 220),
    ("tcp", "imaps", 993),
    ("tcp", "pop3", 110),
    ("tcp", "pop3s", 995),
    ("tcp", "smtp", 25),
    ("tcp", "submissions", 465),
    ("tcp", "ssh", 22),
    ("tcp", "telnet", 23),
    ("udp", "domain", 53),
];

/// In-memory services database: protocol -> service name -> port.
#[derive(Clone, Debug, Default)]
pub struct Services {
    by_proto: HashMap<String, HashMap<String, u16>>,
}

impl Services {
    /// Creates a database holding only the built-in entries.
    pub fn builtin() -> Self {
        let mut services = Self::default();
        for (proto, name, port) in BUILTIN {
            services.insert(proto, name, *port);
        }
        services
    }

    /// Built-in entries overlaid with the contents of `path`.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        let mut services = Self::builtin();
        services.merge(BufReader::new(file))?;
        Ok(services)
    }

    /// The process-wide database, read from [`SERVICES_PATH`] on first use.
    pub fn system() -> &'static Services {
        static SYSTEM: LazyLock<Services> = LazyLock::new(|| match Services::load(SERVICES_PATH) {
            Ok(services) => {
                tracing::debug!(path = SERVICES_PATH, "Loaded services database");
                services
            }
            Err(e) => {
                tracing::warn!(
                    path = SERVICES_PATH,
                    error = %e,
                    "Failed to read services database, using built-in table"
                );
                Services::builtin()
            }
        });
        &SYSTEM
    }

    /// Adds entries in services(5) format: `name port/proto [aliases...]`,
    /// `#` starting a comment. Malformed lines are skipped.
    pub fn merge(&mut self, reader: impl BufRead) -> io::Result<()> {
        for line in reader.lines() {
            let line = line?;
            let line = line.split('#').next().unwrap_or_default();
            let mut fields = line.split_whitespace();

            let (Some(name), Some(port_proto)) = (fields.next(), fields.next()) else {
                continue;
            };
            let Some((port, proto)) = port_proto.split_once('/') else {
                continue;
            };
            let Ok(port) = port.parse::<u16>() else {
                continue;
            };

            self.insert(proto, name, port);
            for alias in fields {
                self.insert(proto, alias, port);
            }
        }
        Ok(())
    }

    fn insert(&mut self, proto: &str, name: &str, port: u16) {
        self.by_proto
            .entry(proto.to_ascii_lowercase())
            .or_default()
            .insert(name.to_ascii_lowercase(), port);
    }

    /// Port registered for `name` under `proto`, matched case-insensitively.
    pub fn port(&self, proto: &str, name: &str) -> Option<u16> {
        self.by_proto
            .get(proto)?
            .get(&name.to_ascii_lowercase())
            .copied()
    }

    /// Resolves `service` on `network` to a port.
    ///
    /// Numeric services are parsed directly and an empty service is port 0.
    /// `network` may be empty or one of `ip`, `tcp`, `tcp4`, `tcp6`, `udp`,
    /// `udp4`, `udp6`; `ip` (and empty) try tcp first, then udp.
    pub fn lookup_port(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        let port = match parse_port(service) {
            Some(port) => port,
            None => {
                let network = match network {
                    "" => "ip",
                    "ip" | "tcp" | "tcp4" | "tcp6" | "udp" | "udp4" | "udp6" => network,
                    other => return Err(LookupError::address(other, "unknown network")),
                };
                return self.lookup_named(network, service);
            }
        };

        u16::try_from(port).map_err(|_| LookupError::address(service, "invalid port"))
    }

    fn lookup_named(&self, network: &str, service: &str) -> Result<u16, LookupError> {
        let (protos, reported): (&[&str], &str) = match network {
            "ip" => (&["tcp", "udp"], "ip"),
            "tcp" | "tcp4" | "tcp6" => (&["tcp"], "tcp"),
            _ => (&["udp"], "udp"),
        };

        protos
            .iter()
            .find_map(|proto| self.port(proto, service))
            .ok_or_else(|| LookupError::UnknownPort {
                network: reported.to_string(),
                service: service.to_string(),
            })
    }
}

/// Parses a numeric service with an optional sign.
///
/// Returns `None` when the service is a name that needs a database lookup.
/// Magnitudes saturate so oversized numbers still report as out of range.
fn parse_port(service: &str) -> Option<i64> {
    if service.is_empty() {
        return Some(0);
    }

    let (negative, digits) = match service.as_bytes()[0] {
        b'+' => (false, &service[1..]),
        b'-' => (true, &service[1..]),
        _ => (false, service),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |n, b| {
        n.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
