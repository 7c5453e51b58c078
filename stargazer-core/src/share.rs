//! Text handed to the platform share sheet.

use crate::models::{CatalogEntry, DetailResponse};

pub const APP_NAME: &str = "StarGazer";
pub const APP_SHARE_TEXT: &str = "별자리 관측 달력 앱을 확인해보세요!";

/// Number of story characters quoted in a share message.
const STORY_EXCERPT_CHARS: usize = 50;

/// Share message for one object's detail view.
pub fn object_share_text(entry: &CatalogEntry, detail: &DetailResponse) -> String {
    let excerpt: String = detail.story.chars().take(STORY_EXCERPT_CHARS).collect();
    format!(
        "[{}] {} 관측 정보\n\n{}...\n\n지금 앱에서 확인해보세요!",
        APP_NAME, entry.name, excerpt
    )
}
