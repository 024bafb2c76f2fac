use serde::{Deserialize, Serialize};

use crate::models::domain::{Animal, FortuneSlip, ScoredCandidate};

/// Response for the match quiz endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredCandidate>,
    #[serde(rename = "topMatch")]
    pub top_match: Option<ScoredCandidate>,
    #[serde(rename = "totalConsidered")]
    pub total_considered: usize,
}

/// Response for the paginated animal listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalListResponse {
    pub data: Vec<Animal>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Response for the feed statistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub dogs: usize,
    pub cats: usize,
    pub shelters: usize,
}

/// Response for the daily fortune endpoint
#[derive(Debug, Clone, Serialize)]
pub struct FortuneResponse {
    pub animal: Animal,
    pub fortune: FortuneSlip,
    pub poem: String,
    pub date: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
