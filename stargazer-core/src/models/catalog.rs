use serde::{Deserialize, Serialize};

/// A single observable object in the calendar.
///
/// Entries are identified by a stable ASCII `id` (e.g. `"orion"`) while `name`
/// carries the localized display name shown on cards and sent to the
/// generative service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: ObjectCategory,
    /// One-line summary shown on the card.
    pub description: String,
    /// Image shown until (or instead of) a generated illustration.
    pub image_placeholder: String,
}

/// The kind of object an entry describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    Constellation,
    Nebula,
    Cluster,
}

impl ObjectCategory {
    /// Badge text shown on cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Constellation => "Constellation",
            Self::Nebula => "Nebula",
            Self::Cluster => "Cluster",
        }
    }
}

/// One month of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthEntry {
    /// Month number, 1 through 12. Unique across the catalog.
    pub month: u32,
    /// Display label, e.g. `"1월"`. Participates in search.
    pub label: String,
    pub season: Season,
    pub objects: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Tag text rendered next to the month label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}
