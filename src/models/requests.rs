use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the animal listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnimalListQuery {
    /// Animal kind filter, in feed vocabulary (狗 / 貓)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: usize,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

/// Query parameters for the shelter directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShelterListQuery {
    #[serde(default)]
    pub city: Option<String>,
}
