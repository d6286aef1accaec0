//! Tier classification.
//!
//! Decides whether a host identifier names the local development machine
//! or anything else. Anything else is production.

use std::fmt;
use std::str::FromStr;

/// Host identifiers that classify as [`Tier::Local`].
///
/// Matching is exact and case-sensitive. Ports, subdomains and other
/// loopback spellings (`::1`, `127.0.0.2`) are not recognized.
pub const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1"];

/// A deployment tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    /// Local development machine.
    Local,
    /// Every other host.
    Production,
}

impl Tier {
    /// Both tiers, in configuration order.
    pub const ALL: [Tier; 2] = [Tier::Local, Tier::Production];

    /// Classify a host identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use endpoint_resolver::environment::Tier;
    ///
    /// assert_eq!(Tier::classify("localhost"), Tier::Local);
    /// assert_eq!(Tier::classify("127.0.0.1"), Tier::Local);
    /// assert_eq!(Tier::classify("app.example.com"), Tier::Production);
    /// assert_eq!(Tier::classify(""), Tier::Production);
    /// ```
    pub fn classify(host: &str) -> Self {
        if LOCAL_HOSTS.contains(&host) {
            Tier::Local
        } else {
            Tier::Production
        }
    }

    /// The lowercase name used in config keys and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Local => "local",
            Tier::Production => "production",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Tier::Local),
            "production" => Ok(Tier::Production),
            _ => Err(format!("unknown tier: {}", s)),
        }
    }
}

/// Extract the host portion of a full address.
///
/// This is what a browser reports as `location.hostname`: no scheme, no
/// port, no path. IPv6 hosts keep their brackets. The `url` crate
/// lowercases domain names the same way browsers do.
///
/// Returns `None` when the address does not parse or has no host.
///
/// # Example
///
/// ```
/// use endpoint_resolver::environment::host_from_address;
///
/// assert_eq!(
///     host_from_address("http://localhost:3000/index.html"),
///     Some("localhost".to_string())
/// );
/// assert_eq!(host_from_address("not a url"), None);
/// ```
pub fn host_from_address(address: &str) -> Option<String> {
    let parsed = url::Url::parse(address).ok()?;
    parsed.host_str().map(str::to_string)
}
