use chrono::{SecondsFormat, Utc};
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthStatus {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// Server time, RFC 3339 in UTC
    pub timestamp: String,
    /// Crate version of the running binary
    pub version: String,
}

impl HealthStatus {
    fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe. Does not touch the database.
pub struct HealthApi;

#[OpenApi]
impl HealthApi {
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthStatus> {
        Json(HealthStatus::healthy())
    }
}
