//! Response body of `GET /health`.

use serde::Serialize;

/// Overall service state: degraded as soon as the database check fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single dependency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckOutcome {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

/// Result of the `SELECT 1` round trip against the users database.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: CheckOutcome,

    /// Round-trip time of a successful ping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn reachable(latency_ms: u64) -> Self {
        Self {
            status: CheckOutcome::Ok,
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            status: CheckOutcome::Error,
            latency_ms: None,
            message: Some("Database unreachable".to_string()),
        }
    }
}

impl HealthResponse {
    /// Builds the response for this crate's version from the database check.
    pub fn from_database(database: DatabaseCheck) -> Self {
        let status = match database.status {
            CheckOutcome::Ok => ServiceStatus::Healthy,
            CheckOutcome::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}
