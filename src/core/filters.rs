use crate::models::{Animal, KindPreference};

/// Check if an animal matches the requested kind preference
#[inline]
pub fn matches_preference(animal: &Animal, preference: KindPreference) -> bool {
    match preference {
        KindPreference::Any => true,
        KindPreference::Dog => animal.is_dog(),
        KindPreference::Cat => animal.is_cat(),
    }
}

/// Check if an animal can enter the scoring pool
///
/// Candidates need a photo reference and must match the kind preference.
#[inline]
pub fn is_candidate(animal: &Animal, preference: KindPreference) -> bool {
    animal.has_photo() && matches_preference(animal, preference)
}
