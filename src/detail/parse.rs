//! Strict validation of the model's structured output.
//!
//! The service is asked for JSON matching a schema, but nothing guarantees
//! it complies. The text is parsed into an exact shape (unknown fields are
//! rejected) and every field is checked before it becomes a
//! [`DetailResponse`].

use serde::Deserialize;
use stargazer_core::models::{DetailResponse, Difficulty};
use thiserror::Error;

use crate::gemini::ClientError;

#[derive(Debug, Error)]
pub enum DetailError {
    #[error(transparent)]
    Service(#[from] ClientError),

    #[error("Empty response from generative service")]
    EmptyResponse,

    #[error("Malformed detail JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid detail field `{0}`")]
    InvalidField(&'static str),
}

impl DetailError {
    pub fn is_authorization_failure(&self) -> bool {
        match self {
            Self::Service(e) => e.is_authorization_failure(),
            _ => false,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawDetail {
    story: String,
    best_viewing_time: String,
    finding_tip: String,
    difficulty: Difficulty,
    interesting_facts: Vec<String>,
}

/// Rejects blank text; accepted values are kept exactly as sent.
fn required(field: &'static str, value: String) -> Result<String, DetailError> {
    if value.trim().is_empty() {
        Err(DetailError::InvalidField(field))
    } else {
        Ok(value)
    }
}

/// Parse and validate the structured text returned by the service.
pub fn parse_detail(text: Option<&str>) -> Result<DetailResponse, DetailError> {
    let text = text
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(DetailError::EmptyResponse)?;
    let raw: RawDetail = serde_json::from_str(text)?;

    let interesting_facts = raw
        .interesting_facts
        .into_iter()
        .map(|fact| required("interestingFacts", fact))
        .collect::<Result<Vec<_>, _>>()?;
    if interesting_facts.is_empty() {
        return Err(DetailError::InvalidField("interestingFacts"));
    }

    Ok(DetailResponse {
        story: required("story", raw.story)?,
        best_viewing_time: required("bestViewingTime", raw.best_viewing_time)?,
        finding_tip: required("findingTip", raw.finding_tip)?,
        difficulty: raw.difficulty,
        interesting_facts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "story": "사냥꾼 오리온의 이야기",
        "bestViewingTime": "1월 밤 9시",
        "findingTip": "삼태성을 찾으세요",
        "difficulty": "Easy",
        "interestingFacts": ["베텔게우스는 적색 초거성", "리겔은 청색 초거성", "오리온 대성운 M42"]
    }"#;

    #[test]
    fn parses_valid_detail() {
        let detail = parse_detail(Some(VALID)).expect("valid detail");
        assert_eq!(detail.story, "사냥꾼 오리온의 이야기");
        assert_eq!(detail.difficulty, Difficulty::Easy);
        assert_eq!(detail.interesting_facts.len(), 3);
    }

    #[test]
    fn keeps_field_text_exactly_as_sent() {
        let padded = r#"{"story":"  오리온 \n","bestViewingTime":" 1월 ","findingTip":"남쪽\t","difficulty":"Medium","interestingFacts":[" 첫째 "]}"#;
        let detail = parse_detail(Some(padded)).expect("valid detail");
        assert_eq!(detail.story, "  오리온 \n");
        assert_eq!(detail.best_viewing_time, " 1월 ");
        assert_eq!(detail.finding_tip, "남쪽\t");
        assert_eq!(detail.interesting_facts, vec![" 첫째 ".to_string()]);
    }

    #[test]
    fn rejects_missing_or_blank_text() {
        assert!(matches!(parse_detail(None), Err(DetailError::EmptyResponse)));
        assert!(matches!(parse_detail(Some("  \n")), Err(DetailError::EmptyResponse)));
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            parse_detail(Some("Sorry, I can't help with that.")),
            Err(DetailError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_missing_field_and_unknown_difficulty() {
        let missing = r#"{"story":"s","bestViewingTime":"t","difficulty":"Easy","interestingFacts":["f"]}"#;
        assert!(matches!(parse_detail(Some(missing)), Err(DetailError::Malformed(_))));

        let bad_enum = VALID.replace("\"Easy\"", "\"Trivial\"");
        assert!(matches!(parse_detail(Some(&bad_enum)), Err(DetailError::Malformed(_))));
    }

    #[test]
    fn rejects_unexpected_fields() {
        let extra = VALID.replacen('{', r#"{"rating": 5,"#, 1);
        assert!(matches!(parse_detail(Some(&extra)), Err(DetailError::Malformed(_))));
    }

    #[test]
    fn rejects_blank_fields_and_empty_facts() {
        let blank_story = VALID.replace("사냥꾼 오리온의 이야기", "   ");
        assert!(matches!(
            parse_detail(Some(&blank_story)),
            Err(DetailError::InvalidField("story"))
        ));

        let no_facts = r#"{"story":"s","bestViewingTime":"t","findingTip":"f","difficulty":"Hard","interestingFacts":[]}"#;
        assert!(matches!(
            parse_detail(Some(no_facts)),
            Err(DetailError::InvalidField("interestingFacts"))
        ));
    }
}
