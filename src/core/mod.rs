// Core algorithm exports
pub mod explain;
pub mod filters;
pub mod fortune;
pub mod matcher;
pub mod scoring;

pub use explain::annotate_top_matches;
pub use filters::{is_candidate, matches_preference};
pub use matcher::{MatchOutcome, Matcher};
pub use scoring::calculate_match_score;
