use serde::{Deserialize, Serialize};

/// Feed vocabulary for `animal_kind`
pub const KIND_DOG: &str = "狗";
pub const KIND_CAT: &str = "貓";

/// Feed vocabulary for `animal_bodytype`
pub const BODY_SMALL: &str = "SMALL";
pub const BODY_MEDIUM: &str = "MEDIUM";
pub const BODY_BIG: &str = "BIG";

/// Feed vocabulary for `animal_age`
pub const AGE_CHILD: &str = "CHILD";
pub const AGE_ADULT: &str = "ADULT";

/// Shelter animal record from the government open-data feed
///
/// Attribute fields keep the feed's raw string vocabulary; values outside
/// the known sets are carried through untouched and simply earn no scoring
/// bonus. Every field defaults so a sparse feed record still decodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    #[serde(default)]
    pub animal_id: i64,
    #[serde(default)]
    pub animal_kind: String,
    #[serde(default)]
    pub animal_sex: String,
    #[serde(default)]
    pub animal_bodytype: String,
    #[serde(default)]
    pub animal_colour: String,
    #[serde(default)]
    pub animal_age: String,
    #[serde(default)]
    pub animal_sterilization: String,
    #[serde(default)]
    pub shelter_name: String,
    #[serde(default)]
    pub shelter_address: String,
    #[serde(default)]
    pub shelter_tel: String,
    #[serde(default)]
    pub album_file: String,
}

impl Animal {
    /// Records without a photo reference never reach users.
    pub fn has_photo(&self) -> bool {
        !self.album_file.trim().is_empty()
    }

    pub fn is_dog(&self) -> bool {
        self.animal_kind == KIND_DOG
    }

    pub fn is_cat(&self) -> bool {
        self.animal_kind == KIND_CAT
    }
}

/// Living-space answer from the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceAnswer {
    Large,
    Medium,
    Small,
}

/// Activity-level answer from the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAnswer {
    High,
    Moderate,
    Low,
}

/// Pet-experience answer from the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceAnswer {
    Experienced,
    Some,
    None,
}

/// Care-time answer from the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeAnswer {
    Plenty,
    Moderate,
    Limited,
}

/// Requested animal kind
///
/// The wire values follow the feed vocabulary; ASCII aliases are accepted
/// for clients that prefer them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KindPreference {
    #[serde(rename = "狗", alias = "dog")]
    Dog,
    #[serde(rename = "貓", alias = "cat")]
    Cat,
    #[serde(rename = "any")]
    Any,
}

/// Completed quiz answer set
///
/// All five fields are mandatory; a partial payload is rejected at the
/// JSON boundary before any scoring happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAnswers {
    pub space: SpaceAnswer,
    pub activity: ActivityAnswer,
    pub experience: ExperienceAnswer,
    pub time: TimeAnswer,
    pub preference: KindPreference,
}

/// Animal with its per-request match score and optional AI rationale
///
/// Built fresh for every match request and discarded with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub animal: Animal,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "aiReason", default, skip_serializing_if = "Option::is_none")]
    pub ai_reason: Option<String>,
}

/// One entry of the daily fortune table
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FortuneSlip {
    #[serde(rename = "type")]
    pub label: &'static str,
    pub message: &'static str,
    pub color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_decodes_sparse_record() {
        let animal: Animal = serde_json::from_str(
            r#"{"animal_id": 42, "album_file": "https://img.example/42.jpg"}"#,
        )
        .unwrap();

        assert_eq!(animal.animal_id, 42);
        assert!(animal.has_photo());
        assert!(animal.animal_kind.is_empty());
        assert!(!animal.is_dog());
    }

    #[test]
    fn test_photo_requires_non_blank_reference() {
        let mut animal: Animal = serde_json::from_str(r#"{"animal_id": 1}"#).unwrap();
        assert!(!animal.has_photo());

        animal.album_file = "   ".to_string();
        assert!(!animal.has_photo());
    }

    #[test]
    fn test_answers_accept_feed_and_ascii_preference() {
        let json = r#"{"space":"large","activity":"high","experience":"none","time":"plenty","preference":"狗"}"#;
        let answers: MatchAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.preference, KindPreference::Dog);

        let json = r#"{"space":"small","activity":"low","experience":"some","time":"limited","preference":"cat"}"#;
        let answers: MatchAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.preference, KindPreference::Cat);
    }

    #[test]
    fn test_partial_answers_rejected() {
        let json = r#"{"space":"large","activity":"high","experience":"none","time":"plenty"}"#;
        assert!(serde_json::from_str::<MatchAnswers>(json).is_err());

        let json = r#"{"space":"huge","activity":"high","experience":"none","time":"plenty","preference":"any"}"#;
        assert!(serde_json::from_str::<MatchAnswers>(json).is_err());
    }

    #[test]
    fn test_scored_candidate_serializes_flat() {
        let animal: Animal =
            serde_json::from_str(r#"{"animal_id": 7, "animal_kind": "貓"}"#).unwrap();
        let candidate = ScoredCandidate {
            animal,
            match_score: 85,
            ai_reason: None,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["animal_id"], 7);
        assert_eq!(json["matchScore"], 85);
        assert!(json.get("aiReason").is_none());
    }
}
