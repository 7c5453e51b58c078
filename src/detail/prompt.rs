//! Prompts and response schema sent to the generative service.

use serde_json::{json, Value};

use crate::gemini::{GenerateContentRequest, GenerationConfig};

/// Prompt asking for the five detail fields about `name`, aimed at beginners.
pub fn detail_prompt(name: &str) -> String {
    format!(
        r#"별자리 또는 천체 관측 대상인 "{name}"에 대한 흥미로운 정보를 천문학 초보자를 위해 한국어로 설명해주세요.
다음 항목들을 포함해야 합니다:
1. 신화나 역사적 배경 (story)
2. 가장 관측하기 좋은 구체적인 시기와 조건 (bestViewingTime)
3. 밤하늘에서 찾는 꿀팁 (findingTip)
4. 관측 난이도 (difficulty: Easy, Medium, 또는 Hard)
5. 짧고 흥미로운 사실 3가지 (interestingFacts)"#
    )
}

/// Structured-output schema matching [`stargazer_core::models::DetailResponse`].
pub fn detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "story": { "type": "STRING" },
            "bestViewingTime": { "type": "STRING" },
            "findingTip": { "type": "STRING" },
            "difficulty": { "type": "STRING", "enum": ["Easy", "Medium", "Hard"] },
            "interestingFacts": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["story", "bestViewingTime", "findingTip", "difficulty", "interestingFacts"]
    })
}

pub fn image_prompt(name: &str) -> String {
    format!(
        "A cinematic, high-resolution astrophotography image of {name} in the night sky. \
         Deep space background, glowing stars, subtle nebula colors, \
         realistic telescope photography style, no text or labels."
    )
}

pub fn detail_request(name: &str) -> GenerateContentRequest {
    GenerateContentRequest::prompt(detail_prompt(name))
        .with_config(GenerationConfig::json(detail_schema()))
}

pub fn image_request(name: &str) -> GenerateContentRequest {
    GenerateContentRequest::prompt(image_prompt(name)).with_config(GenerationConfig::image())
}
