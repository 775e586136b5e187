use serde::Deserialize;
use tracing::warn;

/// Insecure fallback: the server still boots without JWT_SECRET, but
/// from_env warns loudly when this is used.
const DEFAULT_JWT_SECRET: &str = "default_secret";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                warn!("JWT_SECRET not set; falling back to insecure default");
                DEFAULT_JWT_SECRET.into()
            }
        };
        let jwt = JwtConfig {
            secret,
            ttl_minutes: parse_ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok()),
        };
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(Self {
            database_url,
            jwt,
            allowed_origins,
        })
    }
}

/// Token TTL in minutes; must be positive. Anything unparseable or
/// non-positive falls back to one hour rather than wrapping into a
/// near-infinite lifetime downstream.
fn parse_ttl_minutes(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_to_one_hour() {
        assert_eq!(parse_ttl_minutes(None), 60);
        assert_eq!(parse_ttl_minutes(Some("not-a-number".into())), 60);
    }

    #[test]
    fn ttl_rejects_non_positive_values() {
        assert_eq!(parse_ttl_minutes(Some("-5".into())), 60);
        assert_eq!(parse_ttl_minutes(Some("0".into())), 60);
    }

    #[test]
    fn ttl_accepts_positive_values() {
        assert_eq!(parse_ttl_minutes(Some("15".into())), 15);
    }
}
