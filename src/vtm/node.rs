//! Pool node address parsing

use std::fmt;
use std::str::FromStr;

use crate::error::VtmError;

/// Backend node address from a pool's node table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddress {
    pub host: String,
    pub port: u16,
}

impl FromStr for NodeAddress {
    type Err = VtmError;

    /// Accepts `host:port` and `[v6-addr]:port`. Without brackets the split
    /// is on the last colon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| VtmError::Parse(format!("invalid node '{}': {}", s, why));

        let (host, port) = if let Some(rest) = s.strip_prefix('[') {
            let (host, after) = rest
                .split_once(']')
                .ok_or_else(|| invalid("unterminated '['"))?;
            let port = after
                .strip_prefix(':')
                .ok_or_else(|| invalid("missing port"))?;
            (host, port)
        } else {
            s.rsplit_once(':').ok_or_else(|| invalid("missing port"))?
        };

        if host.is_empty() {
            return Err(invalid("empty host"));
        }
        let port = port
            .parse::<u16>()
            .map_err(|_| invalid("port is not a number"))?;

        Ok(Self {
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
