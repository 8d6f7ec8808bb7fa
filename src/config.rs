//! Signing secret and token lifetime, resolved once at startup.
//! Used by: state, token::sign, token::verify.

use chrono::Duration;

use crate::error::{Error, Result};

const DEFAULT_TTL: &str = "15m";

/// Passed explicitly into the issuer and verifier call sites; never read
/// from the environment after construction.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    secret: String,
    ttl: Duration,
    ttl_str: String,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, ttl_str: &str) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::ConfigMissing("JWT_SECRET"));
        }
        let ttl = parse_ttl(ttl_str)
            .ok_or_else(|| Error::ConfigInvalid(format!("bad duration {ttl_str:?}")))?;
        Ok(Self {
            secret,
            ttl,
            ttl_str: ttl_str.to_owned(),
        })
    }

    pub fn from_env() -> Result<Self> {
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| Error::ConfigMissing("JWT_SECRET"))?;
        let ttl_str =
            std::env::var("ACCESS_TOKEN_EXPIRES_IN").unwrap_or_else(|_| DEFAULT_TTL.into());
        Self::new(secret, &ttl_str)
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Configured lifetime as given, echoed in login responses (e.g. "15m").
    pub fn ttl_str(&self) -> &str {
        &self.ttl_str
    }
}

/// Parses "30s" / "15m" / "2h" / "1d". Bare digits are seconds.
fn parse_ttl(s: &str) -> Option<Duration> {
    let s = s.trim();
    let (value, unit) = match s.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => s.split_at(idx),
        None => (s, "s"),
    };
    let n: i64 = value.parse().ok()?;
    match unit {
        "s" => Some(Duration::seconds(n)),
        "m" => Some(Duration::minutes(n)),
        "h" => Some(Duration::hours(n)),
        "d" => Some(Duration::days(n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffixed_durations() {
        assert_eq!(parse_ttl("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_ttl("15m"), Some(Duration::minutes(15)));
        assert_eq!(parse_ttl("2h"), Some(Duration::hours(2)));
        assert_eq!(parse_ttl("1d"), Some(Duration::days(1)));
    }

    #[test]
    fn bare_digits_are_seconds() {
        assert_eq!(parse_ttl("120"), Some(Duration::seconds(120)));
    }

    #[test]
    fn garbage_durations_rejected() {
        assert_eq!(parse_ttl(""), None);
        assert_eq!(parse_ttl("fifteen minutes"), None);
        assert_eq!(parse_ttl("15x"), None);
        assert_eq!(parse_ttl("m15"), None);
    }

    #[test]
    fn empty_secret_is_fatal() {
        let result = AuthConfig::new("", "15m");
        assert!(matches!(result, Err(Error::ConfigMissing("JWT_SECRET"))));
    }

    #[test]
    fn bad_ttl_is_fatal() {
        let result = AuthConfig::new("secret", "soon");
        assert!(matches!(result, Err(Error::ConfigInvalid(_))));
    }

    #[test]
    fn ttl_str_is_echoed_verbatim() {
        let config = AuthConfig::new("secret", "15m").unwrap();
        assert_eq!(config.ttl_str(), "15m");
        assert_eq!(config.ttl(), Duration::minutes(15));
    }

    #[test]
    fn from_env_without_secret_is_fatal() {
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("ACCESS_TOKEN_EXPIRES_IN");
        assert!(matches!(
            AuthConfig::from_env(),
            Err(Error::ConfigMissing("JWT_SECRET"))
        ));
    }
}
