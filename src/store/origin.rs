//! Origins: the `scheme://host[:port]` boundary that isolates stores

use crate::error::{LocalcartError, LocalcartResult};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// A normalized origin.
///
/// Scheme and host are lowercased and a port equal to the scheme's default
/// is dropped, so `HTTP://Example.com:80` and `http://example.com` name the
/// same store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// File name stem for this origin's store file.
    ///
    /// A readable slug followed by the first 12 hex characters of the
    /// SHA-256 of the origin, so distinct origins never share a file even
    /// when their slugs collide.
    pub fn file_stem(&self) -> String {
        let display = self.to_string();
        let slug: String = display
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(display.as_bytes());
        let digest = hasher.finalize();

        format!("{}-{}", slug, hex::encode(&digest[..6]))
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

impl FromStr for Origin {
    type Err = LocalcartError;

    fn from_str(s: &str) -> LocalcartResult<Self> {
        let (scheme, rest) = s
            .trim()
            .split_once("://")
            .ok_or_else(|| LocalcartError::invalid_origin(s, "missing scheme"))?;

        let valid_scheme = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(LocalcartError::invalid_origin(s, "invalid scheme"));
        }

        let authority = rest.strip_suffix('/').unwrap_or(rest);
        if authority.contains(['/', '?', '#']) {
            return Err(LocalcartError::invalid_origin(
                s,
                "origin must not contain a path, query or fragment",
            ));
        }
        if authority.contains('@') {
            return Err(LocalcartError::invalid_origin(
                s,
                "origin must not contain credentials",
            ));
        }

        let (host, port) = match authority.rsplit_once(':') {
            // Bracketed IPv6 literals contain colons of their own
            Some((host, port)) if !port.contains(']') => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| LocalcartError::invalid_origin(s, format!("invalid port: {port}")))?;
                (host, Some(port))
            }
            _ => (authority, None),
        };

        if host.is_empty() {
            return Err(LocalcartError::invalid_origin(s, "missing host"));
        }

        let scheme = scheme.to_ascii_lowercase();
        let port = port.filter(|p| Some(*p) != default_port(&scheme));

        Ok(Self {
            host: host.to_ascii_lowercase(),
            scheme,
            port,
        })
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}
