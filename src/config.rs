use std::{num::NonZeroU32, str::FromStr};

use crate::errors::AppError;

const DEFAULT_RATE_LIMIT_PER_MINUTE: NonZeroU32 = NonZeroU32::new(1000).unwrap();

/// How the rating workflow protects the shared post counter and the per-user
/// record against concurrent toggles of the same post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingConsistency {
    /// No locking, two independent writes.
    #[default]
    Unguarded,
    /// Serialize the read-modify-write per post inside this process.
    PostLock,
    /// Post lock plus a single transactional write of counter and rating.
    Atomic,
}

impl FromStr for RatingConsistency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unguarded" => Ok(RatingConsistency::Unguarded),
            "post_lock" => Ok(RatingConsistency::PostLock),
            "atomic" => Ok(RatingConsistency::Atomic),
            other => Err(AppError::EnvError(format!(
                "Unknown RATING_CONSISTENCY value: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Redis { url: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub store: StoreBackend,
    pub jwt_secret: String,
    pub allowed_origins: Vec<String>,
    pub ai: Option<AiConfig>,
    pub rating_consistency: RatingConsistency,
    pub rate_limit_per_minute: NonZeroU32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| AppError::EnvError(format!("Invalid PORT '{p}': {e}")))?,
            None => 3001,
        };

        let store = match lookup("STORE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("redis") => StoreBackend::Redis {
                url: lookup("REDIS_URL")
                    .ok_or_else(|| AppError::EnvError("REDIS_URL must be set".into()))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(AppError::EnvError(format!(
                    "Unknown STORE_BACKEND value: {other}"
                )));
            }
        };

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::EnvError("JWT_SECRET must be set".into()))?;

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let ai = lookup("AI_API_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|url| AiConfig {
                url,
                api_key: lookup("AI_API_KEY").filter(|k| !k.is_empty()),
            });

        let rating_consistency = lookup("RATING_CONSISTENCY")
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or_default();

        let rate_limit_per_minute = match lookup("RATE_LIMIT_PER_MINUTE") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| {
                    AppError::EnvError(format!("Invalid RATE_LIMIT_PER_MINUTE '{v}'"))
                })?,
            None => DEFAULT_RATE_LIMIT_PER_MINUTE,
        };

        Ok(Self {
            port,
            store,
            jwt_secret,
            allowed_origins,
            ai,
            rating_consistency,
            rate_limit_per_minute,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_for_memory_backend() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3001);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.rating_consistency, RatingConsistency::Unguarded);
        assert_eq!(config.rate_limit_per_minute.get(), 1000);
        assert!(config.ai.is_none());
    }

    #[test]
    fn redis_backend_requires_url() {
        let err = AppConfig::from_lookup(lookup_from(&[("JWT_SECRET", "secret")])).unwrap_err();
        assert!(matches!(err, AppError::EnvError(_)));
    }

    #[test]
    fn missing_secret_is_rejected() {
        let err =
            AppConfig::from_lookup(lookup_from(&[("STORE_BACKEND", "memory")])).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn parses_consistency_modes() {
        assert_eq!(
            "post_lock".parse::<RatingConsistency>().unwrap(),
            RatingConsistency::PostLock
        );
        assert_eq!(
            "ATOMIC".parse::<RatingConsistency>().unwrap(),
            RatingConsistency::Atomic
        );
        assert!("optimistic".parse::<RatingConsistency>().is_err());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("STORE_BACKEND", "redis"),
            ("REDIS_URL", "redis://127.0.0.1/"),
            ("JWT_SECRET", "secret"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example"),
            ("AI_API_URL", "https://ai.example/rewrite"),
            ("RATING_CONSISTENCY", "atomic"),
            ("RATE_LIMIT_PER_MINUTE", "60"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.store,
            StoreBackend::Redis {
                url: "redis://127.0.0.1/".into()
            }
        );
        assert_eq!(config.allowed_origins.len(), 2);
        assert_eq!(config.ai.unwrap().url, "https://ai.example/rewrite");
        assert_eq!(config.rating_consistency, RatingConsistency::Atomic);
        assert_eq!(config.rate_limit_per_minute.get(), 60);
    }
}
