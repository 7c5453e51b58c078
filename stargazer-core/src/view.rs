//! Top-level view state.
//!
//! The browser's UI state is a plain value. Every user interaction is an
//! [`ViewAction`] applied through [`ViewState::apply`], which returns the next
//! state without touching anything else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::browse::{browse, CatalogView};
use crate::catalog;
use crate::models::CatalogEntry;

pub const INSTALL_HINT_TITLE: &str = "앱 설치하기";
pub const INSTALL_HINT_TEXT: &str = "브라우저 메뉴에서 '홈 화면에 추가'를 선택하여 앱처럼 사용하세요.";

/// Instructions for adding the app to the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallHint {
    pub title: String,
    pub text: String,
}

impl Default for InstallHint {
    fn default() -> Self {
        Self {
            title: INSTALL_HINT_TITLE.to_string(),
            text: INSTALL_HINT_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    /// Id of the entry whose detail view is open.
    pub selected: Option<String>,
    pub install_hint_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewAction {
    Search { term: String },
    ClearSearch,
    Select { id: String },
    CloseDetail,
    ShowInstallHint,
    HideInstallHint,
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::Search { term } => Self {
                search_term: term,
                ..self
            },
            ViewAction::ClearSearch => Self {
                search_term: String::new(),
                ..self
            },
            // Unknown ids leave the current selection untouched.
            ViewAction::Select { id } => match catalog::entry(&id) {
                Some(_) => Self {
                    selected: Some(id),
                    ..self
                },
                None => self,
            },
            ViewAction::CloseDetail => Self {
                selected: None,
                ..self
            },
            ViewAction::ShowInstallHint => Self {
                install_hint_visible: true,
                ..self
            },
            ViewAction::HideInstallHint => Self {
                install_hint_visible: false,
                ..self
            },
        }
    }

    /// The install hint, while it is shown.
    pub fn install_hint(&self) -> Option<InstallHint> {
        self.install_hint_visible.then(InstallHint::default)
    }

    pub fn selected_entry(&self) -> Option<&'static CatalogEntry> {
        self.selected.as_deref().and_then(catalog::entry)
    }

    /// Render the month grid for this state on the given date.
    pub fn catalog_view(&self, today: NaiveDate) -> CatalogView {
        browse(catalog::calendar(), &self.search_term, today)
    }
}
