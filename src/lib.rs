//! Pawmatch - match-scoring service for the 浪浪找家 pet adoption app
//!
//! This library provides the quiz-to-recommendation pipeline behind the app:
//! deterministic scoring of shelter animals against lifestyle answers,
//! stable ranking, and best-effort AI-generated match rationales.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_match_score, MatchOutcome, Matcher};
pub use crate::models::{Animal, MatchAnswers, MatchResponse, ScoredCandidate};
