use serde::{Deserialize, Serialize};

/// AI-generated description of one catalog object.
///
/// The field names follow the structured-output schema requested from the
/// generative service, so the same JSON shape is used on the wire in both
/// directions. `interesting_facts` is expected to hold three entries but the
/// count is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailResponse {
    /// Mythology or historical background.
    pub story: String,
    pub best_viewing_time: String,
    /// How to locate the object in the night sky.
    pub finding_tip: String,
    pub difficulty: Difficulty,
    pub interesting_facts: Vec<String>,
}

/// How hard the object is to observe.
///
/// Serialized exactly as the schema enum values (`"Easy"`, `"Medium"`, `"Hard"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Badge text for the detail view.
    pub fn badge(&self) -> String {
        format!("난이도: {}", self.as_str())
    }
}
