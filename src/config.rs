use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_MONGO_DB: &str = "trendify";
pub const DEFAULT_TRENDS_COLLECTION: &str = "processed_trends";
pub const DEFAULT_TTL_MINUTES: i64 = 15;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

/// Where the offline job writes precomputed trends.
#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Falls back to the database named in `uri`, then to [`DEFAULT_MONGO_DB`].
    pub database: Option<String>,
    pub trends_collection: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub mongo: MongoConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = required("DATABASE_URL")?;
        let mongo = MongoConfig {
            uri: required("MONGO_URI")?,
            database: std::env::var("MONGO_DB").ok().filter(|v| !v.is_empty()),
            trends_collection: std::env::var("TRENDS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_TRENDS_COLLECTION.into()),
        };
        let jwt = JwtConfig {
            secret: required("JWT_SECRET_KEY")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "trendify".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "trendify-users".into()),
            ttl_minutes: parse_ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok())?,
        };
        Ok(Self {
            database_url,
            mongo,
            jwt,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("{key} must be set"))
}

/// Unset means the 15 minute default; anything else must be a positive integer.
fn parse_ttl_minutes(raw: Option<String>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TTL_MINUTES);
    };
    let minutes = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("JWT_TTL_MINUTES must be an integer, got {raw:?}"))?;
    if minutes <= 0 {
        anyhow::bail!("JWT_TTL_MINUTES must be positive, got {minutes}");
    }
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_defaults_when_unset() {
        assert_eq!(parse_ttl_minutes(None).unwrap(), DEFAULT_TTL_MINUTES);
    }

    #[test]
    fn ttl_accepts_positive_minutes() {
        assert_eq!(parse_ttl_minutes(Some("60".into())).unwrap(), 60);
    }

    #[test]
    fn ttl_rejects_garbage_and_non_positive() {
        for raw in ["abc", "", "0", "-5", "1.5"] {
            let err = parse_ttl_minutes(Some(raw.into())).unwrap_err();
            assert!(err.to_string().contains("JWT_TTL_MINUTES"), "{raw}");
        }
    }
}
