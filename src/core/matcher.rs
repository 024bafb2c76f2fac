use crate::core::{filters::is_candidate, scoring::calculate_match_score};
use crate::models::{Animal, MatchAnswers, ScoredCandidate};

/// Result of the ranking pipeline
#[derive(Debug)]
pub struct MatchOutcome {
    /// Ranked candidates, best first, at most `result_cap` entries
    pub matches: Vec<ScoredCandidate>,
    /// Pool size after filtering, before truncation
    pub total_considered: usize,
}

impl MatchOutcome {
    pub fn top_match(&self) -> Option<&ScoredCandidate> {
        self.matches.first()
    }
}

/// Quiz-to-recommendation ranking orchestrator
///
/// # Pipeline stages
/// 1. Photo eligibility filter
/// 2. Kind-preference filter
/// 3. Scoring
/// 4. Stable descending sort and truncation
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    result_cap: usize,
}

impl Matcher {
    pub fn new(result_cap: usize) -> Self {
        Self { result_cap }
    }

    /// Rank a candidate pool against a completed answer set
    ///
    /// The sort is stable, so candidates with equal scores keep their
    /// relative order from the filtered pool; identical input always
    /// produces identical output ordering. An empty pool after filtering
    /// is a normal, empty outcome.
    pub fn rank(&self, pool: &[Animal], answers: &MatchAnswers) -> MatchOutcome {
        let mut matches: Vec<ScoredCandidate> = pool
            .iter()
            .filter(|animal| is_candidate(animal, answers.preference))
            .map(|animal| ScoredCandidate {
                match_score: calculate_match_score(animal, answers),
                ai_reason: None,
                animal: animal.clone(),
            })
            .collect();

        let total_considered = matches.len();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        matches.truncate(self.result_cap);

        MatchOutcome {
            matches,
            total_considered,
        }
    }
}
