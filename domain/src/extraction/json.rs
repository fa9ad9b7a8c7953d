//! JSON object extraction from free-form model output.
//!
//! Models asked for "JSON only" still wrap the object in prose or code
//! fences. [`extract_json`] tries two strategies in order and returns the
//! first candidate that parses:
//!
//! 1. a fenced block labelled `json` whose body is a brace-delimited object
//! 2. the greedy span from the first `{` to the last `}` in the whole text
//!
//! No strategy panics on arbitrary input; every failure is an
//! [`ExtractionError`].

use serde_json::{Map, Value};
use thiserror::Error;

/// A parsed JSON object.
pub type JsonObject = Map<String, Value>;

/// Why no object could be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No JSON object found in the model response")]
    NoJsonFound,

    #[error("Model response contains malformed JSON ({message}): {candidate}")]
    MalformedJson {
        /// The substring that looked like an object but did not parse.
        candidate: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Locate and parse the JSON object embedded in `raw`.
///
/// When several candidates exist and none parses, the error carries the
/// first one (the fenced block if there was one).
pub fn extract_json(raw: &str) -> Result<JsonObject, ExtractionError> {
    let candidates: Vec<&str> = [fenced_json_block(raw), greedy_brace_span(raw)]
        .into_iter()
        .flatten()
        .collect();

    let mut first_failure: Option<ExtractionError> = None;

    for candidate in candidates {
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Object(map)) => return Ok(map),
            Ok(_) => {
                first_failure.get_or_insert_with(|| ExtractionError::MalformedJson {
                    candidate: candidate.to_string(),
                    message: "top-level value is not an object".to_string(),
                });
            }
            Err(e) => {
                first_failure.get_or_insert_with(|| ExtractionError::MalformedJson {
                    candidate: candidate.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    Err(first_failure.unwrap_or(ExtractionError::NoJsonFound))
}

/// Body of the first ` ```json ` fence whose trimmed content starts with
/// `{` and ends with `}`.
fn fenced_json_block(raw: &str) -> Option<&str> {
    let mut rest = raw;

    while let Some(open) = rest.find("```") {
        let after_ticks = &rest[open + 3..];
        let label_end = after_ticks
            .find(|c: char| c.is_whitespace() || c == '{')
            .unwrap_or(after_ticks.len());
        let label = &after_ticks[..label_end];
        let body_start = &after_ticks[label_end..];

        let Some(close) = body_start.find("```") else {
            return None;
        };
        let body = body_start[..close].trim();

        if label.eq_ignore_ascii_case("json") && body.starts_with('{') && body.ends_with('}') {
            return Some(body);
        }

        rest = &body_start[close + 3..];
    }

    None
}

/// Greedy span from the first `{` to the last `}` after it.
fn greedy_brace_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw[start..].rfind('}')?;
    Some(&raw[start..start + end + 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fenced_block_returns_exact_object() {
        let raw = r#"Here is the setup:
```json
{"refined_goal": "Social media platforms should be regulated", "roles": {"llm_1": "for", "llm_2": "against"}}
```
Good luck!"#;
        let object = extract_json(raw).unwrap();
        assert_eq!(
            Value::Object(object),
            json!({
                "refined_goal": "Social media platforms should be regulated",
                "roles": {"llm_1": "for", "llm_2": "against"}
            })
        );
    }

    #[test]
    fn test_fence_label_is_case_insensitive() {
        let raw = "```JSON\n{\"a\": 1}\n```";
        assert_eq!(extract_json(raw).unwrap()["a"], json!(1));
    }

    #[test]
    fn test_prose_around_bare_object() {
        let raw = "Sure! The debate is set up as {\"refined_goal\": \"x\", \"n\": {\"k\": true}} and that's it.";
        let object = extract_json(raw).unwrap();
        assert_eq!(object["refined_goal"], json!("x"));
        assert_eq!(object["n"]["k"], json!(true));
    }

    #[test]
    fn test_unlabelled_fence_falls_back_to_brace_scan() {
        let raw = "```\n{\"a\": \"b\"}\n```";
        assert_eq!(extract_json(raw).unwrap()["a"], json!("b"));
    }

    #[test]
    fn test_non_json_fence_is_skipped() {
        let raw = "```python\nprint('hi')\n```\n```json\n{\"ok\": true}\n```";
        assert_eq!(extract_json(raw).unwrap()["ok"], json!(true));
    }

    #[test]
    fn test_no_braces_is_no_json_found() {
        assert_eq!(
            extract_json("I refuse to answer in JSON."),
            Err(ExtractionError::NoJsonFound)
        );
        assert_eq!(extract_json(""), Err(ExtractionError::NoJsonFound));
        assert_eq!(
            extract_json("only an opening { brace"),
            Err(ExtractionError::NoJsonFound)
        );
        assert_eq!(extract_json("} backwards {"), Err(ExtractionError::NoJsonFound));
    }

    #[test]
    fn test_unbalanced_braces_are_malformed() {
        let err = extract_json("prefix {{\"a\": 1} suffix").unwrap_err();
        match err {
            ExtractionError::MalformedJson { candidate, .. } => {
                assert_eq!(candidate, "{{\"a\": 1}");
            }
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_syntax_is_malformed() {
        let err = extract_json("```json\n{refined_goal: 'single quotes'}\n```").unwrap_err();
        assert!(matches!(err, ExtractionError::MalformedJson { .. }));
    }

    #[test]
    fn test_fenced_candidate_reported_first() {
        let raw = "```json\n{broken}\n```";
        match extract_json(raw).unwrap_err() {
            ExtractionError::MalformedJson { candidate, .. } => assert_eq!(candidate, "{broken}"),
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn test_arbitrary_garbage_never_panics() {
        let inputs = [
            "```",
            "```json",
            "```json\n{",
            "{}}}}",
            "{\u{1F600}}",
            "```json{\"a\":1}```",
            "\u{feff}{\"é\": \"ü\"}",
        ];
        for input in inputs {
            let _ = extract_json(input);
        }
        assert_eq!(extract_json("```json{\"a\":1}```").unwrap()["a"], json!(1));
    }
}
