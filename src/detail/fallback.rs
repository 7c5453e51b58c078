//! Placeholder details shown instead of generated content.

use stargazer_core::models::{DetailResponse, Difficulty};

/// Shown when no credential is configured.
pub fn unconfigured() -> DetailResponse {
    DetailResponse {
        story: "API 키가 설정되지 않아 상세 정보를 불러올 수 없습니다. 환경 변수를 확인해주세요."
            .to_string(),
        best_viewing_time: "맑은 날 밤 9시~12시 사이".to_string(),
        finding_tip: "남쪽 하늘을 바라보세요.".to_string(),
        difficulty: Difficulty::Medium,
        interesting_facts: vec![
            "API Key missing".to_string(),
            "Please configure GEMINI_API_KEY".to_string(),
        ],
    }
}

/// Shown when the service rejected the credential.
pub fn authorization_error() -> DetailResponse {
    DetailResponse {
        story: "API 키가 유효하지 않거나 권한이 없어 상세 정보를 불러올 수 없습니다. API 키 설정을 확인해주세요."
            .to_string(),
        best_viewing_time: "정보 없음".to_string(),
        finding_tip: "정보 없음".to_string(),
        difficulty: Difficulty::Medium,
        interesting_facts: vec!["API 키 인증 실패".to_string()],
    }
}

/// Shown on any other transport, service or parse failure.
pub fn service_error() -> DetailResponse {
    DetailResponse {
        story: "상세 정보를 불러오는 중 오류가 발생했습니다. 잠시 후 다시 시도해주세요.".to_string(),
        best_viewing_time: "정보 없음".to_string(),
        finding_tip: "정보 없음".to_string(),
        difficulty: Difficulty::Medium,
        interesting_facts: vec!["네트워크 오류 또는 API 제한".to_string()],
    }
}
