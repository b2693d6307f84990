//! Connection settings resolution
//!
//! Settings come from CLI flags, which clap already backs with the
//! `vtm_url`, `vtm_user` and `vtm_pswd` environment variables.

use log::{debug, warn};

use crate::config::env;
use crate::error::{Result, VtmError};

/// Resolved connection settings for one invocation
#[derive(Clone)]
pub struct Settings {
    /// Appliance URL without trailing slash
    pub url: String,
    pub user: String,
    pub password: String,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("insecure", &self.insecure)
            .finish()
    }
}

impl Settings {
    /// Build settings, failing fast on any missing value
    pub fn resolve(
        url: Option<&str>,
        user: Option<&str>,
        password: Option<&str>,
        insecure: bool,
    ) -> Result<Self> {
        let url = required(url, "--url", env::URL)?;
        let user = required(user, "--user", env::USER)?;
        let password = required(password, "--password", env::PASSWORD)?;

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(VtmError::Config(format!(
                "appliance URL '{}' must start with http:// or https://",
                url
            )));
        }

        if insecure {
            warn!("TLS certificate verification is disabled");
        }

        let settings = Self {
            url: url.trim_end_matches('/').to_string(),
            user: user.to_string(),
            password: password.to_string(),
            insecure,
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}

fn required<'a>(value: Option<&'a str>, flag: &str, env_var: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(VtmError::Config(format!(
            "missing {} (set {} or the {} environment variable)",
            flag.trim_start_matches('-'),
            flag,
            env_var
        ))),
    }
}
