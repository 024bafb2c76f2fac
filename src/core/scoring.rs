use crate::models::{
    ActivityAnswer, Animal, ExperienceAnswer, MatchAnswers, SpaceAnswer, TimeAnswer, AGE_ADULT,
    AGE_CHILD, BODY_BIG, BODY_MEDIUM, BODY_SMALL,
};

/// Every candidate starts here; bonuses only ever add.
pub const BASE_SCORE: u32 = 50;

/// Scores are capped at the top, never floored.
pub const MAX_SCORE: u32 = 100;

/// Animal attribute a scoring term tests for.
///
/// Comparisons run against the raw feed vocabulary; a record with an
/// unrecognized value matches nothing and earns no bonus.
#[derive(Debug, Clone, Copy)]
enum Attr {
    Dog,
    Cat,
    SmallBody,
    MediumBody,
    BigBody,
    Juvenile,
    Adult,
    Always,
}

impl Attr {
    fn matches(self, animal: &Animal) -> bool {
        match self {
            Attr::Dog => animal.is_dog(),
            Attr::Cat => animal.is_cat(),
            Attr::SmallBody => animal.animal_bodytype == BODY_SMALL,
            Attr::MediumBody => animal.animal_bodytype == BODY_MEDIUM,
            Attr::BigBody => animal.animal_bodytype == BODY_BIG,
            Attr::Juvenile => animal.animal_age == AGE_CHILD,
            Attr::Adult => animal.animal_age == AGE_ADULT,
            Attr::Always => true,
        }
    }
}

/// Point delta granted when the attribute matches.
type Term = (Attr, u32);

/// Space terms are exclusive: only the first matching entry applies.
fn space_terms(space: SpaceAnswer) -> &'static [Term] {
    match space {
        SpaceAnswer::Large => &[(Attr::BigBody, 20), (Attr::MediumBody, 10)],
        SpaceAnswer::Medium => &[
            (Attr::MediumBody, 20),
            (Attr::SmallBody, 15),
            (Attr::BigBody, 5),
        ],
        SpaceAnswer::Small => &[(Attr::SmallBody, 20), (Attr::MediumBody, 10)],
    }
}

/// Activity terms stack: every matching entry applies.
fn activity_terms(activity: ActivityAnswer) -> &'static [Term] {
    match activity {
        ActivityAnswer::High => &[(Attr::Dog, 15), (Attr::Juvenile, 5)],
        ActivityAnswer::Moderate => &[(Attr::Always, 10)],
        ActivityAnswer::Low => &[(Attr::Cat, 15), (Attr::Adult, 5)],
    }
}

fn experience_terms(experience: ExperienceAnswer) -> &'static [Term] {
    match experience {
        ExperienceAnswer::Experienced => &[(Attr::Always, 10)],
        ExperienceAnswer::Some => &[(Attr::Always, 5), (Attr::Adult, 5)],
        ExperienceAnswer::None => &[(Attr::Adult, 10), (Attr::SmallBody, 5), (Attr::Cat, 5)],
    }
}

fn time_terms(time: TimeAnswer) -> &'static [Term] {
    match time {
        TimeAnswer::Plenty => &[(Attr::Always, 10), (Attr::Dog, 5), (Attr::Juvenile, 5)],
        TimeAnswer::Moderate => &[(Attr::Always, 5)],
        TimeAnswer::Limited => &[(Attr::Cat, 10), (Attr::Adult, 5)],
    }
}

/// Calculate a match score (50-100) for an animal against quiz answers
///
/// Deterministic, pure and total: every animal/answer combination has a
/// score and nothing here can fail. The space dimension awards at most one
/// bonus; activity, experience and time stack all of theirs.
pub fn calculate_match_score(animal: &Animal, answers: &MatchAnswers) -> u8 {
    let mut score = BASE_SCORE;

    if let Some(&(_, points)) = space_terms(answers.space)
        .iter()
        .find(|(attr, _)| attr.matches(animal))
    {
        score += points;
    }

    for terms in [
        activity_terms(answers.activity),
        experience_terms(answers.experience),
        time_terms(answers.time),
    ] {
        for &(attr, points) in terms {
            if attr.matches(animal) {
                score += points;
            }
        }
    }

    score.min(MAX_SCORE) as u8
}
