// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityAnswer, Animal, ExperienceAnswer, FortuneSlip, KindPreference, MatchAnswers,
    ScoredCandidate, SpaceAnswer, TimeAnswer, AGE_ADULT, AGE_CHILD, BODY_BIG, BODY_MEDIUM,
    BODY_SMALL, KIND_CAT, KIND_DOG,
};
pub use requests::{AnimalListQuery, ShelterListQuery};
pub use responses::{
    AnimalListResponse, ErrorResponse, FortuneResponse, HealthResponse, MatchResponse,
    StatsResponse,
};
