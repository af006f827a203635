use serde::{Deserialize, Serialize};

// -------------------------
// Response DTOs
// -------------------------

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// RFC3339 time the error was produced.
    pub timestamp: String,
    pub error: String,
    pub message: String,
    /// Request path that produced the error.
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub storage: String,
}
